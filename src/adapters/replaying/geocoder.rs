//! Replaying adapter for the `Geocoder` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::geocoder::{Coordinates, GeocodeFuture, Geocoder, Place};

/// Serves recorded reverse-geocoding results from a cassette.
pub struct ReplayingGeocoder {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingGeocoder {
    /// Create a replaying adapter backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl Geocoder for ReplayingGeocoder {
    fn reverse(&self, coordinates: &Coordinates) -> GeocodeFuture<'_> {
        let output = next_output(&self.replayer, "geocoder", "reverse", coordinates);
        Box::pin(async move { replay_result::<Place>(output) })
    }
}
