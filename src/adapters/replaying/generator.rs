//! Replaying adapter for the `ContentGenerator` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::content_generator::{
    ContentGenerator, GenerateFuture, GenerationRequest, GenerationResponse,
};

/// Serves recorded model replies from a cassette.
pub struct ReplayingGenerator {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingGenerator {
    /// Create a replaying generator backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl ContentGenerator for ReplayingGenerator {
    fn generate(&self, _api_key: &str, request: &GenerationRequest) -> GenerateFuture<'_> {
        let output = next_output(&self.replayer, "content_generator", "generate", request);
        Box::pin(async move { replay_result::<GenerationResponse>(output) })
    }
}
