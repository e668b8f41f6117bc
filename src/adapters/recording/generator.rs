//! Recording adapter for the `ContentGenerator` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::content_generator::{ContentGenerator, GenerateFuture, GenerationRequest};

/// Records generation calls while delegating to an inner implementation.
/// The API key is not part of the recorded input.
pub struct RecordingGenerator {
    inner: Box<dyn ContentGenerator>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingGenerator {
    /// Creates a new recording generator wrapping the given implementation.
    pub fn new(inner: Box<dyn ContentGenerator>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl ContentGenerator for RecordingGenerator {
    fn generate(&self, api_key: &str, request: &GenerationRequest) -> GenerateFuture<'_> {
        let api_key = api_key.to_string();
        let request = request.clone();
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = self.inner.generate(&api_key, &request).await;
            record_result(&recorder, "content_generator", "generate", &request, &result);
            result
        })
    }
}
