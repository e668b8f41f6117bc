//! Unified error type for plantus.

use thiserror::Error;

/// Errors that can occur while identifying plants or calling supporting services.
#[derive(Debug, Error)]
pub enum PlantError {
    /// The request was rejected before any network call (wrong image count, empty chat).
    #[error("{0}")]
    Validation(String),

    /// The credential backend returned a non-success status.
    #[error("Failed to fetch API keys: {status}")]
    CredentialFetch {
        /// HTTP status code.
        status: u16,
    },

    /// The generative AI endpoint returned a non-success status.
    #[error("AI analysis failed: {status}")]
    AiRequest {
        /// HTTP status code.
        status: u16,
        /// Response body, kept for diagnostics.
        message: String,
    },

    /// The AI reply carried no candidates or no text parts.
    #[error("{0}")]
    AiEmptyResponse(String),

    /// The AI response body, or the text it carried, could not be parsed as JSON.
    #[error("Malformed AI response: {0}")]
    MalformedAiResponse(#[source] serde_json::Error),

    /// The model reported that the image does not show a plant.
    #[error("{0}")]
    NotAPlant(String),

    /// The AI reply parsed but lacks required top-level fields.
    #[error("Invalid AI response format - missing required fields: {}", missing.join(", "))]
    IncompleteAiResponse {
        /// Names of the missing fields.
        missing: Vec<&'static str>,
    },

    /// A supporting API (weather, geocoding, image search) returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// A lookup succeeded but matched nothing.
    #[error("No results found")]
    NoResults,

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No API key configured for a service.
    #[error("No API key for {service}. Set {env_var} or add it to config file.")]
    MissingApiKey {
        /// The service name.
        service: String,
        /// The environment variable name.
        env_var: String,
    },

    /// A cassette could not serve a recorded interaction.
    #[error("Replay error: {0}")]
    Replay(String),

    /// A failure served back from a cassette, shown exactly as recorded.
    #[error("{0}")]
    Recorded(String),
}
