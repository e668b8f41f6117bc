//! Geocoder port for turning coordinates into a place name.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::PlantError;

/// A point on the globe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// City and country for a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Locality or first-level administrative area, `Unknown` if absent.
    pub city: String,
    /// Country name, `Unknown` if absent.
    pub country: String,
    /// ISO country code, empty if absent.
    pub country_code: String,
}

/// Boxed future type returned by [`Geocoder::reverse`].
pub type GeocodeFuture<'a> = Pin<Box<dyn Future<Output = Result<Place, PlantError>> + Send + 'a>>;

/// Reverse geocoding.
pub trait Geocoder: Send + Sync {
    /// Resolve coordinates to a place.
    fn reverse(&self, coordinates: &Coordinates) -> GeocodeFuture<'_>;
}
