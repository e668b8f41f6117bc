//! Stand-in for ports whose credentials are not configured.
//!
//! Lets a context be built for commands that never touch the missing
//! service, while any call that does reach it reports which key to set.

use crate::error::PlantError;
use crate::ports::credentials::{CredentialFuture, CredentialSource};
use crate::ports::geocoder::{Coordinates, GeocodeFuture, Geocoder};
use crate::ports::weather::{WeatherFuture, WeatherProvider, WeatherQuery};

/// Fails every call with [`PlantError::MissingApiKey`].
pub struct Unconfigured {
    service: &'static str,
    env_var: &'static str,
}

impl Unconfigured {
    /// Create a stand-in for `service`, pointing users at `env_var`.
    #[must_use]
    pub fn new(service: &'static str, env_var: &'static str) -> Self {
        Self { service, env_var }
    }

    fn error(&self) -> PlantError {
        PlantError::MissingApiKey { service: self.service.to_string(), env_var: self.env_var.to_string() }
    }
}

impl CredentialSource for Unconfigured {
    fn fetch(&self) -> CredentialFuture<'_> {
        let err = self.error();
        Box::pin(async move { Err(err) })
    }
}

impl WeatherProvider for Unconfigured {
    fn current(&self, _query: &WeatherQuery) -> WeatherFuture<'_> {
        let err = self.error();
        Box::pin(async move { Err(err) })
    }
}

impl Geocoder for Unconfigured {
    fn reverse(&self, _coordinates: &Coordinates) -> GeocodeFuture<'_> {
        let err = self.error();
        Box::pin(async move { Err(err) })
    }
}
