//! Replaying adapter for the `WeatherProvider` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::weather::{WeatherFuture, WeatherProvider, WeatherQuery, WeatherReport};

/// Serves recorded weather reports from a cassette.
pub struct ReplayingWeather {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingWeather {
    /// Create a replaying adapter backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl WeatherProvider for ReplayingWeather {
    fn current(&self, query: &WeatherQuery) -> WeatherFuture<'_> {
        let output = next_output(&self.replayer, "weather", "current", query);
        Box::pin(async move { replay_result::<WeatherReport>(output) })
    }
}
