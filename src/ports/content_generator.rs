//! Content generator port for the Gemini `generateContent` API.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::PlantError;
use crate::inline_image::InlineImage;
use crate::model::GenerationConfig;

/// One part of a multi-part prompt, in Gemini wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentPart {
    /// An inline image.
    Image {
        /// The image payload.
        inline_data: InlineImage,
    },
    /// Instruction or transcript text.
    Text {
        /// The text.
        text: String,
    },
}

impl ContentPart {
    /// Build a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Build an image part.
    #[must_use]
    pub fn image(inline_data: InlineImage) -> Self {
        Self::Image { inline_data }
    }
}

/// A request to generate text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The resolved model identifier (e.g., `"gemini-2.5-flash"`).
    pub model: String,
    /// Ordered prompt parts: images first, then text.
    pub parts: Vec<ContentPart>,
    /// Sampling parameters.
    pub config: GenerationConfig,
}

/// Text extracted from the first candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// The generated text.
    pub text: String,
}

/// Boxed future type returned by [`ContentGenerator::generate`].
pub type GenerateFuture<'a> =
    Pin<Box<dyn Future<Output = Result<GenerationResponse, PlantError>> + Send + 'a>>;

/// Generates text from multi-part prompts via an external API.
pub trait ContentGenerator: Send + Sync {
    /// Generate a reply for the given request, authenticating with `api_key`.
    fn generate(&self, api_key: &str, request: &GenerationRequest) -> GenerateFuture<'_>;
}
