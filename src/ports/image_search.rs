//! Image search port for stock photo lookups.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::PlantError;

/// A photo search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoQuery {
    /// Free-text search terms.
    pub query: String,
    /// Maximum number of results.
    pub per_page: u32,
    /// Orientation filter (`portrait`, `landscape`, `square`).
    pub orientation: String,
}

impl PhotoQuery {
    /// A portrait-oriented search.
    pub fn portrait(query: impl Into<String>, per_page: u32) -> Self {
        Self { query: query.into(), per_page, orientation: "portrait".to_string() }
    }
}

/// Boxed future type returned by [`ImageSearch::search`].
pub type SearchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<String>, PlantError>> + Send + 'a>>;

/// Finds photo URLs for a text query.
pub trait ImageSearch: Send + Sync {
    /// Search for photos, authenticating with `api_key`. Returns large-size URLs.
    fn search(&self, api_key: &str, query: &PhotoQuery) -> SearchFuture<'_>;
}
