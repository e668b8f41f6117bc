//! Real API implementations.

pub mod credentials;
pub mod gemini;
pub mod google_geocoding;
pub mod openweather;
pub mod pexels;
