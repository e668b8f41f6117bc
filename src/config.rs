//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::DEFAULT_MODEL;
use crate::ports::Units;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Credential backend that hands out short-lived keys.
    #[serde(default)]
    pub backend: BackendConfig,

    /// API key configuration.
    #[serde(default)]
    pub keys: KeysConfig,

    /// Default parameter values (used when CLI flags are absent).
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Credential backend location.
#[derive(Debug, Default, Deserialize)]
pub struct BackendConfig {
    /// Base URL, e.g. `https://project.example.co`.
    pub url: Option<String>,
    /// Anonymous key sent as the `apikey` header.
    pub anon_key: Option<String>,
}

/// API key configuration.
#[derive(Debug, Default, Deserialize)]
pub struct KeysConfig {
    /// Gemini API key.
    pub gemini: Option<String>,
    /// Pexels API key.
    pub pexels: Option<String>,
    /// `OpenWeatherMap` API key.
    pub openweather: Option<String>,
    /// Google Maps (geocoding) API key.
    pub google_maps: Option<String>,
}

/// Default parameter values from config file.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Default model name or alias.
    pub model: String,
    /// Default weather units.
    pub units: Units,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self { model: DEFAULT_MODEL.to_string(), units: Units::Metric }
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Credential backend base URL.
    #[must_use]
    pub fn backend_url(&self) -> Option<String> {
        env_or("PLANTUS_BACKEND_URL", self.backend.url.as_ref())
    }

    /// Credential backend anonymous key.
    #[must_use]
    pub fn anon_key(&self) -> Option<String> {
        env_or("PLANTUS_ANON_KEY", self.backend.anon_key.as_ref())
    }

    /// Gemini API key, preferring `GEMINI_API_KEY`.
    #[must_use]
    pub fn gemini_key(&self) -> Option<String> {
        env_or("GEMINI_API_KEY", self.keys.gemini.as_ref())
    }

    /// Pexels API key, preferring `PEXELS_API_KEY`.
    #[must_use]
    pub fn pexels_key(&self) -> Option<String> {
        env_or("PEXELS_API_KEY", self.keys.pexels.as_ref())
    }

    /// `OpenWeatherMap` key, preferring `OPENWEATHER_API_KEY`.
    #[must_use]
    pub fn openweather_key(&self) -> Option<String> {
        env_or("OPENWEATHER_API_KEY", self.keys.openweather.as_ref())
    }

    /// Google Maps key, preferring `GOOGLE_MAPS_API_KEY`.
    #[must_use]
    pub fn google_maps_key(&self) -> Option<String> {
        env_or("GOOGLE_MAPS_API_KEY", self.keys.google_maps.as_ref())
    }
}

/// Non-empty environment value, else the file value.
fn env_or(var: &str, file_value: Option<&String>) -> Option<String> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| file_value.filter(|v| !v.is_empty()).cloned())
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `PLANTUS_CONFIG` environment variable
/// 3. `~/.config/plantus/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("PLANTUS_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/plantus/config.toml")
    } else {
        PathBuf::from("plantus.toml")
    }
}
