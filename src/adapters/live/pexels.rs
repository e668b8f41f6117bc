//! Live adapter for the Pexels photo search API.

use reqwest::Client;
use serde::Deserialize;

use crate::error::PlantError;
use crate::ports::image_search::{ImageSearch, PhotoQuery, SearchFuture};

const PEXELS_SEARCH_URL: &str = "https://api.pexels.com/v1/search";

/// Live Pexels search.
pub struct PexelsSearch {
    client: Client,
}

impl PexelsSearch {
    /// Create a new Pexels search sharing the given HTTP client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ImageSearch for PexelsSearch {
    fn search(&self, api_key: &str, query: &PhotoQuery) -> SearchFuture<'_> {
        let api_key = api_key.to_string();
        let query = query.clone();
        Box::pin(async move {
            let per_page = query.per_page.to_string();
            let response = self
                .client
                .get(PEXELS_SEARCH_URL)
                .query(&[
                    ("query", query.query.as_str()),
                    ("per_page", per_page.as_str()),
                    ("orientation", query.orientation.as_str()),
                ])
                .header("Authorization", api_key)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let message = response.text().await?;
                return Err(PlantError::Api { status: status.as_u16(), message });
            }

            let parsed: PexelsResponse = response.json().await?;
            Ok(parsed.photos.into_iter().map(|p| p.src.large).collect())
        })
    }
}

// --- Pexels API response types ---

#[derive(Deserialize)]
struct PexelsResponse {
    #[serde(default)]
    photos: Vec<PexelsPhoto>,
}

#[derive(Deserialize)]
struct PexelsPhoto {
    src: PexelsSource,
}

#[derive(Deserialize)]
struct PexelsSource {
    large: String,
}
