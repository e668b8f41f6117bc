//! Live adapter for the Gemini `generateContent` API.

use reqwest::Client;
use serde::Deserialize;

use crate::error::PlantError;
use crate::ports::content_generator::{
    ContentGenerator, GenerateFuture, GenerationRequest, GenerationResponse,
};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Live Gemini generator that calls the Google AI API.
pub struct GeminiGenerator {
    client: Client,
}

impl GeminiGenerator {
    /// Create a new Gemini generator sharing the given HTTP client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ContentGenerator for GeminiGenerator {
    fn generate(&self, api_key: &str, request: &GenerationRequest) -> GenerateFuture<'_> {
        let api_key = api_key.to_string();
        let request = request.clone();
        Box::pin(async move {
            let url = format!("{GEMINI_API_BASE}/{}:generateContent", request.model);

            let body = serde_json::json!({
                "contents": [{
                    "parts": request.parts
                }],
                "generationConfig": request.config
            });

            // The key travels in the query string; keep it out of error messages.
            let response = self
                .client
                .post(&url)
                .query(&[("key", &api_key)])
                .json(&body)
                .send()
                .await
                .map_err(reqwest::Error::without_url)?;

            let status = response.status();
            let response_text = response.text().await.map_err(reqwest::Error::without_url)?;

            if !status.is_success() {
                return Err(PlantError::AiRequest { status: status.as_u16(), message: response_text });
            }

            let text = extract_text(&response_text)?;
            Ok(GenerationResponse { text })
        })
    }
}

/// Pull the first candidate's first text part out of a response body.
fn extract_text(body: &str) -> Result<String, PlantError> {
    let parsed: GeminiResponse = serde_json::from_str(body).map_err(PlantError::MalformedAiResponse)?;

    let candidate = parsed
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| PlantError::AiEmptyResponse("No AI response received".to_string()))?;

    candidate
        .content
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or_else(|| PlantError::AiEmptyResponse("Empty AI response".to_string()))
}

// --- Gemini API response types ---

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
}
