//! Live credential sources: the key-vending backend function, or keys from config.

use reqwest::Client;
use serde::Deserialize;

use crate::error::PlantError;
use crate::ports::credentials::{ApiKeyBundle, CredentialFuture, CredentialSource};

const SCAN_PLANT_FUNCTION: &str = "functions/v1/scan-plant";

/// Fetches short-lived keys from the backend's `scan-plant` function.
pub struct EdgeFunctionCredentials {
    client: Client,
    url: String,
    anon_key: String,
}

impl EdgeFunctionCredentials {
    /// Create a source for the backend at `base_url`.
    #[must_use]
    pub fn new(client: Client, base_url: &str, anon_key: String) -> Self {
        let url = format!("{}/{SCAN_PLANT_FUNCTION}", base_url.trim_end_matches('/'));
        Self { client, url, anon_key }
    }
}

impl CredentialSource for EdgeFunctionCredentials {
    fn fetch(&self) -> CredentialFuture<'_> {
        Box::pin(async move {
            let response = self
                .client
                .get(&self.url)
                .header("Content-Type", "application/json")
                .header("apikey", &self.anon_key)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(PlantError::CredentialFetch { status: status.as_u16() });
            }

            let keys: ScanPlantKeys = response.json().await?;
            Ok(ApiKeyBundle { gemini: keys.gemini_api_key, pexels: keys.pexels_api_key })
        })
    }
}

/// Keys supplied directly through the environment or config file.
pub struct StaticCredentials {
    keys: ApiKeyBundle,
}

impl StaticCredentials {
    /// Wrap a fixed key bundle.
    #[must_use]
    pub fn new(keys: ApiKeyBundle) -> Self {
        Self { keys }
    }
}

impl CredentialSource for StaticCredentials {
    fn fetch(&self) -> CredentialFuture<'_> {
        let keys = self.keys.clone();
        Box::pin(async move { Ok(keys) })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScanPlantKeys {
    gemini_api_key: String,
    pexels_api_key: String,
}
