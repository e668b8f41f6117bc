//! Local weather and place lookups shown alongside care advice.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::context::ServiceContext;
use crate::error::PlantError;
use crate::ports::{Coordinates, Place, Units, WeatherQuery, WeatherReport};

/// Place and weather for the same coordinates. Either may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    /// City and country, if geocoding succeeded.
    pub place: Option<Place>,
    /// Current weather, if the lookup succeeded.
    pub weather: Option<WeatherReport>,
}

/// Current weather at `coordinates`.
///
/// # Errors
///
/// Returns any error from the weather provider.
pub async fn fetch_weather(
    ctx: &ServiceContext,
    coordinates: Coordinates,
    units: Units,
) -> Result<WeatherReport, PlantError> {
    let query = WeatherQuery { lat: coordinates.lat, lon: coordinates.lon, units };
    debug!(lat = query.lat, lon = query.lon, %units, "fetching weather");
    ctx.weather.current(&query).await
}

/// City and country at `coordinates`.
///
/// # Errors
///
/// Returns any error from the geocoder, including [`PlantError::NoResults`].
pub async fn fetch_place(ctx: &ServiceContext, coordinates: Coordinates) -> Result<Place, PlantError> {
    debug!(lat = coordinates.lat, lon = coordinates.lon, "reverse geocoding");
    ctx.geocoder.reverse(&coordinates).await
}

/// Look up place and weather concurrently, keeping whichever succeed.
pub async fn refresh(ctx: &ServiceContext, coordinates: Coordinates, units: Units) -> Conditions {
    let (place, weather) =
        futures::join!(fetch_place(ctx, coordinates), fetch_weather(ctx, coordinates, units));

    Conditions {
        place: place.inspect_err(|e| warn!(error = %e, "place lookup failed")).ok(),
        weather: weather.inspect_err(|e| warn!(error = %e, "weather lookup failed")).ok(),
    }
}
