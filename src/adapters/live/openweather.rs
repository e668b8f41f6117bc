//! Live adapter for the OpenWeatherMap current weather API.

use reqwest::Client;
use serde::Deserialize;

use crate::error::PlantError;
use crate::ports::weather::{WeatherFuture, WeatherProvider, WeatherQuery, WeatherReport};

const OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Live OpenWeatherMap client.
pub struct OpenWeatherProvider {
    client: Client,
    api_key: String,
}

impl OpenWeatherProvider {
    /// Create a new provider with the given API key.
    #[must_use]
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

impl WeatherProvider for OpenWeatherProvider {
    fn current(&self, query: &WeatherQuery) -> WeatherFuture<'_> {
        let query = *query;
        Box::pin(async move {
            let response = self
                .client
                .get(OPENWEATHER_URL)
                .query(&[
                    ("lat", query.lat.to_string()),
                    ("lon", query.lon.to_string()),
                    ("appid", self.api_key.clone()),
                    ("units", query.units.to_string()),
                ])
                .send()
                .await
                .map_err(reqwest::Error::without_url)?;

            let status = response.status();
            let body = response.text().await.map_err(reqwest::Error::without_url)?;
            if !status.is_success() {
                return Err(PlantError::Api { status: status.as_u16(), message: body });
            }

            to_report(&body)
        })
    }
}

fn to_report(body: &str) -> Result<WeatherReport, PlantError> {
    let parsed: OpenWeatherResponse = serde_json::from_str(body).map_err(|e| PlantError::Api {
        status: 200,
        message: format!("Failed to parse weather response: {e}"),
    })?;
    let condition = parsed.weather.into_iter().next();

    #[allow(clippy::cast_possible_truncation)]
    let temp = parsed.main.temp.round() as i64;

    Ok(WeatherReport {
        temp,
        location: parsed.name,
        icon: condition.as_ref().map(|c| c.icon.clone()),
        description: condition.map(|c| c.description),
        humidity: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
    })
}

// --- OpenWeatherMap response types ---

#[derive(Deserialize)]
struct OpenWeatherResponse {
    main: MainReadings,
    #[serde(default)]
    weather: Vec<Condition>,
    wind: Wind,
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
struct MainReadings {
    temp: f64,
    humidity: u8,
}

#[derive(Deserialize)]
struct Condition {
    icon: String,
    description: String,
}

#[derive(Deserialize)]
struct Wind {
    speed: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_response_fields() {
        let body = r#"{
            "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
            "main": {"temp": 21.6, "feels_like": 20.0, "humidity": 38},
            "wind": {"speed": 4.12, "deg": 250},
            "name": "Tashkent"
        }"#;
        let report = to_report(body).unwrap();
        assert_eq!(report.temp, 22);
        assert_eq!(report.location, "Tashkent");
        assert_eq!(report.icon.as_deref(), Some("04d"));
        assert_eq!(report.description.as_deref(), Some("broken clouds"));
        assert_eq!(report.humidity, 38);
        assert!((report.wind_speed - 4.12).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_condition_leaves_icon_empty() {
        let body = r#"{"weather": [], "main": {"temp": -0.4, "humidity": 90}, "wind": {"speed": 0}, "name": ""}"#;
        let report = to_report(body).unwrap();
        assert_eq!(report.temp, 0);
        assert!(report.icon.is_none());
        assert!(report.description.is_none());
    }

    #[test]
    fn malformed_body_is_api_error() {
        assert!(matches!(to_report("{}"), Err(PlantError::Api { status: 200, .. })));
    }
}
