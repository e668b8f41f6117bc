//! Illustrative photos for an identified plant and its likely diseases.
//!
//! Photos are enrichment: lookup failures are logged and replaced with
//! [`FALLBACK_IMAGE`], never propagated.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::ports::{ImageSearch, PhotoQuery};

/// Shown whenever a photo lookup fails or finds nothing.
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1485955900006-10f4d324d411?w=800&q=80";

/// Photos requested for the plant gallery.
pub const GALLERY_SIZE: u32 = 6;

/// Search used when no disease keyword matches.
pub const GENERIC_DISEASE_QUERY: &str = "plant disease damage";

/// Disease keywords and the search each maps to. Checked in order; first match wins.
const DISEASE_QUERIES: &[(&[&str], &str)] = &[
    (&["yellow"], "plant yellow leaves disease"),
    (&["brown"], "plant brown tips leaves"),
    (&["rot"], "plant root rot disease"),
    (&["pest", "mite", "aphid", "bug"], "plant pest insect damage"),
    (&["mold", "fungus", "mildew"], "plant mold fungus disease"),
    (&["wilt"], "plant wilting drooping"),
    (&["spot"], "plant leaf spot disease"),
    (&["curl"], "plant leaf curl disease"),
    (&["black"], "plant black spot disease"),
];

/// Map a disease title to a photo search.
#[must_use]
pub fn disease_query(title: &str) -> &'static str {
    let title = title.to_lowercase();
    DISEASE_QUERIES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| title.contains(k)))
        .map_or(GENERIC_DISEASE_QUERY, |&(_, query)| query)
}

/// Resolves photos through an [`ImageSearch`] port.
pub struct PhotoResolver<'a> {
    search: &'a dyn ImageSearch,
    api_key: &'a str,
}

impl<'a> PhotoResolver<'a> {
    /// Create a resolver using the given search port and key.
    #[must_use]
    pub fn new(search: &'a dyn ImageSearch, api_key: &'a str) -> Self {
        Self { search, api_key }
    }

    /// Up to [`GALLERY_SIZE`] portrait photos of the plant.
    pub async fn gallery(&self, plant_name: &str) -> Vec<String> {
        let query = PhotoQuery::portrait(format!("{plant_name} plant"), GALLERY_SIZE);
        match self.search.search(self.api_key, &query).await {
            Ok(urls) if !urls.is_empty() => urls,
            Ok(_) => {
                debug!(query = %query.query, "gallery search returned no photos");
                vec![FALLBACK_IMAGE.to_string()]
            }
            Err(e) => {
                warn!(query = %query.query, error = %e, "gallery search failed");
                vec![FALLBACK_IMAGE.to_string()]
            }
        }
    }

    /// One photo for a disease title. Like the gallery, the search term is
    /// suffixed with `plant`.
    pub async fn disease_photo(&self, title: &str) -> String {
        let query = PhotoQuery::portrait(format!("{} plant", disease_query(title)), 1);
        match self.search.search(self.api_key, &query).await {
            Ok(urls) => urls.into_iter().next().unwrap_or_else(|| FALLBACK_IMAGE.to_string()),
            Err(e) => {
                warn!(title, error = %e, "disease photo search failed");
                FALLBACK_IMAGE.to_string()
            }
        }
    }

    /// Photos for every title, looked up concurrently. Output order matches `titles`.
    pub async fn disease_photos(&self, titles: &[String]) -> Vec<String> {
        join_all(titles.iter().map(|title| self.disease_photo(title))).await
    }
}
