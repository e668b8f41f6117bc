//! Weather port for current conditions at a location.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlantError;

/// Measurement system for temperatures and wind speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Celsius, metres per second.
    #[default]
    Metric,
    /// Fahrenheit, miles per hour.
    Imperial,
}

impl Units {
    /// Query-string value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            other => Err(format!("Unsupported units '{other}'. Valid: metric, imperial")),
        }
    }
}

/// A current-weather lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherQuery {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Measurement system.
    pub units: Units,
}

/// Current conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    /// Temperature rounded to a whole degree.
    pub temp: i64,
    /// Station or city name.
    pub location: String,
    /// Icon code, e.g. `04d`.
    pub icon: Option<String>,
    /// Human description, e.g. `broken clouds`.
    pub description: Option<String>,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Wind speed in the requested units.
    pub wind_speed: f64,
}

/// Boxed future type returned by [`WeatherProvider::current`].
pub type WeatherFuture<'a> =
    Pin<Box<dyn Future<Output = Result<WeatherReport, PlantError>> + Send + 'a>>;

/// Looks up current weather.
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for the query.
    fn current(&self, query: &WeatherQuery) -> WeatherFuture<'_>;
}
