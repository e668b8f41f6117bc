//! Live adapter for the Google reverse geocoding API.

use reqwest::Client;
use serde::Deserialize;

use crate::error::PlantError;
use crate::ports::geocoder::{Coordinates, GeocodeFuture, Geocoder, Place};

const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

const UNKNOWN: &str = "Unknown";

/// Live Google Geocoding client.
pub struct GoogleGeocoder {
    client: Client,
    api_key: String,
}

impl GoogleGeocoder {
    /// Create a new geocoder with the given API key.
    #[must_use]
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

impl Geocoder for GoogleGeocoder {
    fn reverse(&self, coordinates: &Coordinates) -> GeocodeFuture<'_> {
        let coordinates = *coordinates;
        Box::pin(async move {
            let latlng = format!("{},{}", coordinates.lat, coordinates.lon);
            let response = self
                .client
                .get(GEOCODE_URL)
                .query(&[("latlng", latlng.as_str()), ("key", self.api_key.as_str()), ("language", "en")])
                .send()
                .await
                .map_err(reqwest::Error::without_url)?;

            let status = response.status();
            let body = response.text().await.map_err(reqwest::Error::without_url)?;
            if !status.is_success() {
                return Err(PlantError::Api { status: status.as_u16(), message: body });
            }

            to_place(&body)
        })
    }
}

fn to_place(body: &str) -> Result<Place, PlantError> {
    let parsed: GeocodeResponse = serde_json::from_str(body).map_err(|e| PlantError::Api {
        status: 200,
        message: format!("Failed to parse geocoding response: {e}"),
    })?;
    let result = parsed.results.into_iter().next().ok_or(PlantError::NoResults)?;
    let components = result.address_components;

    let has_type = |c: &&AddressComponent, wanted: &[&str]| {
        c.types.iter().any(|t| wanted.contains(&t.as_str()))
    };
    let city = components.iter().find(|c| has_type(c, &["locality", "administrative_area_level_1"]));
    let country = components.iter().find(|c| has_type(c, &["country"]));

    Ok(Place {
        city: city.map_or_else(|| UNKNOWN.to_string(), |c| c.long_name.clone()),
        country: country.map_or_else(|| UNKNOWN.to_string(), |c| c.long_name.clone()),
        country_code: country.map(|c| c.short_name.clone()).unwrap_or_default(),
    })
}

// --- Geocoding API response types ---

#[derive(Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    address_components: Vec<AddressComponent>,
}

#[derive(Deserialize)]
struct AddressComponent {
    long_name: String,
    short_name: String,
    #[serde(default)]
    types: Vec<String>,
}
