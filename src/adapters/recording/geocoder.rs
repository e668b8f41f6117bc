//! Recording adapter for the `Geocoder` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::geocoder::{Coordinates, GeocodeFuture, Geocoder};

/// Records reverse-geocoding calls while delegating to an inner implementation.
pub struct RecordingGeocoder {
    inner: Box<dyn Geocoder>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingGeocoder {
    /// Wrap `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn Geocoder>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl Geocoder for RecordingGeocoder {
    fn reverse(&self, coordinates: &Coordinates) -> GeocodeFuture<'_> {
        let coordinates = *coordinates;
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = self.inner.reverse(&coordinates).await;
            record_result(&recorder, "geocoder", "reverse", &coordinates, &result);
            result
        })
    }
}
