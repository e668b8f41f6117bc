//! Credential port for short-lived third-party API keys.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::PlantError;

/// Placeholder written to cassettes instead of real keys.
pub const REDACTED: &str = "[redacted]";

/// Keys for the identification pipeline. Fetched per call and never cached.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyBundle {
    /// Gemini API key.
    pub gemini: String,
    /// Pexels API key.
    pub pexels: String,
}

impl ApiKeyBundle {
    /// A copy safe to persist.
    #[must_use]
    pub fn redacted() -> Self {
        Self { gemini: REDACTED.to_string(), pexels: REDACTED.to_string() }
    }
}

impl fmt::Debug for ApiKeyBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyBundle")
            .field("gemini", &REDACTED)
            .field("pexels", &REDACTED)
            .finish()
    }
}

/// Boxed future type returned by [`CredentialSource::fetch`].
pub type CredentialFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ApiKeyBundle, PlantError>> + Send + 'a>>;

/// Supplies API keys for one pipeline run.
pub trait CredentialSource: Send + Sync {
    /// Fetch a fresh key bundle.
    fn fetch(&self) -> CredentialFuture<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_keys() {
        let keys = ApiKeyBundle { gemini: "g-secret".into(), pexels: "p-secret".into() };
        let debug = format!("{keys:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains(REDACTED));
    }
}
