//! Recording adapter for the `CredentialSource` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::credentials::{ApiKeyBundle, CredentialFuture, CredentialSource};

/// Records credential fetches. Keys are replaced with a placeholder before
/// they reach the cassette.
pub struct RecordingCredentials {
    inner: Box<dyn CredentialSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingCredentials {
    /// Creates a new recording source wrapping the given implementation.
    pub fn new(inner: Box<dyn CredentialSource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl CredentialSource for RecordingCredentials {
    fn fetch(&self) -> CredentialFuture<'_> {
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = self.inner.fetch().await;
            let redacted = result.as_ref().map(|_| ApiKeyBundle::redacted());
            record_result(&recorder, "credentials", "fetch", &serde_json::Value::Null, &redacted);
            result
        })
    }
}
