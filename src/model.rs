//! Scanner modes, model name resolution and sampling constants.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Model used when neither the CLI nor the config names one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// How the caller's images should be analysed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScannerMode {
    /// Identify a plant from a single photo.
    Identify,
    /// Identify and diagnose problems from three photos of the same plant.
    Diagnose,
    /// Identify from three photos of the same plant.
    Multiple,
}

impl ScannerMode {
    /// Number of images the mode accepts.
    #[must_use]
    pub fn required_images(self) -> usize {
        match self {
            Self::Identify => 1,
            Self::Diagnose | Self::Multiple => 3,
        }
    }

    /// Sampling parameters sent with identification requests.
    ///
    /// Every mode currently shares the same constants.
    #[must_use]
    pub fn generation_config(self) -> GenerationConfig {
        IDENTIFY_GENERATION_CONFIG
    }
}

impl fmt::Display for ScannerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Identify => "identify",
            Self::Diagnose => "diagnose",
            Self::Multiple => "multiple",
        })
    }
}

impl FromStr for ScannerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "identify" => Ok(Self::Identify),
            "diagnose" => Ok(Self::Diagnose),
            "multiple" => Ok(Self::Multiple),
            other => Err(format!("Unknown mode '{other}'. Valid: identify, diagnose, multiple")),
        }
    }
}

/// Fixed sampling parameters for a `generateContent` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature.
    pub temperature: f32,
    /// Top-K sampling bound.
    pub top_k: u32,
    /// Nucleus sampling bound.
    pub top_p: f32,
    /// Upper bound on generated tokens.
    pub max_output_tokens: u32,
}

/// Sampling for plant identification in every scanner mode.
pub const IDENTIFY_GENERATION_CONFIG: GenerationConfig =
    GenerationConfig { temperature: 0.4, top_k: 32, top_p: 1.0, max_output_tokens: 8192 };

/// Sampling for the chat assistant.
pub const CHAT_GENERATION_CONFIG: GenerationConfig =
    GenerationConfig { temperature: 0.7, top_k: 40, top_p: 0.95, max_output_tokens: 2048 };

/// Short name aliases for Gemini models.
const ALIASES: &[(&str, &str)] = &[
    ("flash", "gemini-2.5-flash"),
    ("flash-lite", "gemini-2.5-flash-lite"),
    ("pro", "gemini-2.5-pro"),
];

/// Resolve a model name (alias or exact) to the full model identifier.
#[must_use]
pub fn resolve_model(name: &str) -> String {
    for &(alias, full) in ALIASES {
        if name == alias {
            return full.to_string();
        }
    }
    name.to_string()
}

/// Check that a resolved model name targets the Gemini API.
///
/// # Errors
///
/// Returns an error if the model name doesn't start with `gemini`.
pub fn validate_model(model: &str) -> Result<(), String> {
    if model.starts_with("gemini") {
        Ok(())
    } else {
        Err(format!("Unknown model '{model}'. Expected 'gemini-*' or one of: flash, flash-lite, pro."))
    }
}
