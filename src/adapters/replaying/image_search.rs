//! Replaying adapter for the `ImageSearch` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::image_search::{ImageSearch, PhotoQuery, SearchFuture};

/// Serves recorded photo searches, matched by query where possible.
pub struct ReplayingImageSearch {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingImageSearch {
    /// Create a replaying search backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl ImageSearch for ReplayingImageSearch {
    fn search(&self, _api_key: &str, query: &PhotoQuery) -> SearchFuture<'_> {
        let output = next_output(&self.replayer, "image_search", "search", query);
        Box::pin(async move { replay_result::<Vec<String>>(output) })
    }
}
