//! Replaying adapter for the `CredentialSource` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::credentials::{ApiKeyBundle, CredentialFuture, CredentialSource};

/// Serves recorded credential fetches. Successful fetches yield the
/// redacted placeholder bundle.
pub struct ReplayingCredentials {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingCredentials {
    /// Create a replaying source backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl CredentialSource for ReplayingCredentials {
    fn fetch(&self) -> CredentialFuture<'_> {
        let output = next_output(&self.replayer, "credentials", "fetch", &serde_json::Value::Null);
        Box::pin(async move { replay_result::<ApiKeyBundle>(output) })
    }
}
