//! Recording adapter for the `ImageSearch` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::image_search::{ImageSearch, PhotoQuery, SearchFuture};

/// Records photo searches while delegating to an inner implementation.
pub struct RecordingImageSearch {
    inner: Box<dyn ImageSearch>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingImageSearch {
    /// Creates a new recording search wrapping the given implementation.
    pub fn new(inner: Box<dyn ImageSearch>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl ImageSearch for RecordingImageSearch {
    fn search(&self, api_key: &str, query: &PhotoQuery) -> SearchFuture<'_> {
        let api_key = api_key.to_string();
        let query = query.clone();
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = self.inner.search(&api_key, &query).await;
            record_result(&recorder, "image_search", "search", &query, &result);
            result
        })
    }
}
