//! Recording adapter for the `WeatherProvider` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::weather::{WeatherFuture, WeatherProvider, WeatherQuery};

/// Records weather lookups while delegating to an inner implementation.
pub struct RecordingWeather {
    inner: Box<dyn WeatherProvider>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingWeather {
    /// Wrap `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn WeatherProvider>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl WeatherProvider for RecordingWeather {
    fn current(&self, query: &WeatherQuery) -> WeatherFuture<'_> {
        let query = *query;
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = self.inner.current(&query).await;
            record_result(&recorder, "weather", "current", &query, &result);
            result
        })
    }
}
