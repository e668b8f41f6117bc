//! Service context that bundles all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use reqwest::Client;

use crate::adapters::live::credentials::{EdgeFunctionCredentials, StaticCredentials};
use crate::adapters::live::gemini::GeminiGenerator;
use crate::adapters::live::google_geocoding::GoogleGeocoder;
use crate::adapters::live::openweather::OpenWeatherProvider;
use crate::adapters::live::pexels::PexelsSearch;
use crate::adapters::recording::credentials::RecordingCredentials;
use crate::adapters::recording::generator::RecordingGenerator;
use crate::adapters::recording::geocoder::RecordingGeocoder;
use crate::adapters::recording::image_search::RecordingImageSearch;
use crate::adapters::recording::weather::RecordingWeather;
use crate::adapters::replaying::credentials::ReplayingCredentials;
use crate::adapters::replaying::generator::ReplayingGenerator;
use crate::adapters::replaying::geocoder::ReplayingGeocoder;
use crate::adapters::replaying::image_search::ReplayingImageSearch;
use crate::adapters::replaying::weather::ReplayingWeather;
use crate::adapters::unconfigured::Unconfigured;
use crate::cassette::config::load_cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::config::Config;
use crate::error::PlantError;
use crate::ports::{
    ApiKeyBundle, ContentGenerator, CredentialSource, Geocoder, ImageSearch, WeatherProvider,
};

/// Bundles all port trait objects into a single context.
pub struct ServiceContext {
    /// Source of the Gemini and Pexels keys.
    pub credentials: Box<dyn CredentialSource>,
    /// Gemini `generateContent`.
    pub generator: Box<dyn ContentGenerator>,
    /// Pexels photo search.
    pub image_search: Box<dyn ImageSearch>,
    /// Current weather.
    pub weather: Box<dyn WeatherProvider>,
    /// Reverse geocoding.
    pub geocoder: Box<dyn Geocoder>,
}

/// Handle to a recording session that must be finished after use.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Finish the recording and write the cassette file to disk.
    ///
    /// The context that produced this session must be dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapters still hold the recorder".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        let count = recorder.interaction_count();
        let path = recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))?;
        tracing::info!(path = %path.display(), interactions = count, "cassette written");
        Ok(path)
    }
}

impl ServiceContext {
    /// Create a live context from configuration.
    ///
    /// Services without keys get an [`Unconfigured`] stand-in, so only the
    /// commands that actually need them fail.
    #[must_use]
    pub fn live(config: &Config) -> Self {
        let client = Client::new();

        let credentials: Box<dyn CredentialSource> =
            match (config.gemini_key(), config.pexels_key(), config.backend_url()) {
                (Some(gemini), Some(pexels), _) => {
                    tracing::debug!("using keys from environment/config");
                    Box::new(StaticCredentials::new(ApiKeyBundle { gemini, pexels }))
                }
                (_, _, Some(url)) => {
                    tracing::debug!(backend = %url, "using credential backend");
                    Box::new(EdgeFunctionCredentials::new(
                        client.clone(),
                        &url,
                        config.anon_key().unwrap_or_default(),
                    ))
                }
                _ => Box::new(Unconfigured::new("credential backend", "PLANTUS_BACKEND_URL")),
            };

        let weather: Box<dyn WeatherProvider> = match config.openweather_key() {
            Some(key) => Box::new(OpenWeatherProvider::new(client.clone(), key)),
            None => Box::new(Unconfigured::new("OpenWeatherMap", "OPENWEATHER_API_KEY")),
        };

        let geocoder: Box<dyn Geocoder> = match config.google_maps_key() {
            Some(key) => Box::new(GoogleGeocoder::new(client.clone(), key)),
            None => Box::new(Unconfigured::new("Google Geocoding", "GOOGLE_MAPS_API_KEY")),
        };

        Self {
            credentials,
            generator: Box::new(GeminiGenerator::new(client.clone())),
            image_search: Box::new(PexelsSearch::new(client)),
            weather,
            geocoder,
        }
    }

    /// Create a recording context that wraps every live adapter with a
    /// single shared recorder.
    #[must_use]
    pub fn recording(config: &Config) -> (Self, RecordingSession) {
        let live = Self::live(config);

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let path = PathBuf::from(".plantus/cassettes").join(&timestamp).join("session.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            format!("{timestamp}-session"),
            get_commit_hash(),
        )));

        let ctx = Self {
            credentials: Box::new(RecordingCredentials::new(live.credentials, Arc::clone(&recorder))),
            generator: Box::new(RecordingGenerator::new(live.generator, Arc::clone(&recorder))),
            image_search: Box::new(RecordingImageSearch::new(live.image_search, Arc::clone(&recorder))),
            weather: Box::new(RecordingWeather::new(live.weather, Arc::clone(&recorder))),
            geocoder: Box::new(RecordingGeocoder::new(live.geocoder, Arc::clone(&recorder))),
        };

        (ctx, RecordingSession { recorder })
    }

    /// Create a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be loaded.
    pub fn replaying(path: &Path) -> Result<Self, PlantError> {
        let replayer = load_cassette(path)
            .map_err(|e| PlantError::Config(format!("Failed to load cassette: {e}")))?;
        let replayer = Arc::new(Mutex::new(replayer));
        tracing::debug!(path = %path.display(), "replaying cassette");
        Ok(Self {
            credentials: Box::new(ReplayingCredentials::new(Arc::clone(&replayer))),
            generator: Box::new(ReplayingGenerator::new(Arc::clone(&replayer))),
            image_search: Box::new(ReplayingImageSearch::new(Arc::clone(&replayer))),
            weather: Box::new(ReplayingWeather::new(Arc::clone(&replayer))),
            geocoder: Box::new(ReplayingGeocoder::new(replayer)),
        })
    }
}

/// Get the current git commit hash, or "unknown" if unavailable.
fn get_commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}
