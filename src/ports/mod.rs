//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system. Implementations live in `src/adapters/`.

pub mod content_generator;
pub mod credentials;
pub mod geocoder;
pub mod image_search;
pub mod weather;

pub use content_generator::{ContentGenerator, ContentPart, GenerationRequest, GenerationResponse};
pub use credentials::{ApiKeyBundle, CredentialSource};
pub use geocoder::{Coordinates, Geocoder, Place};
pub use image_search::{ImageSearch, PhotoQuery};
pub use weather::{Units, WeatherProvider, WeatherQuery, WeatherReport};
