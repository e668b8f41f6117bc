//! The `{success, data | error}` result envelope and where it gets written.

use std::path::Path;

use serde::Serialize;

use crate::error::PlantError;

/// Envelope every command prints.
#[derive(Debug, Serialize)]
pub struct Outcome<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The result, on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> From<Result<T, PlantError>> for Outcome<T> {
    fn from(result: Result<T, PlantError>) -> Self {
        match result {
            Ok(data) => Self { success: true, data: Some(data), error: None },
            Err(e) => Self { success: false, data: None, error: Some(e.to_string()) },
        }
    }
}

impl<T: Serialize> Outcome<T> {
    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if `T` cannot be serialized.
    pub fn to_json(&self) -> Result<String, PlantError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlantError::Config(format!("Failed to serialize result: {e}")))
    }

    /// Print to stdout, or write to `path` when given.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn emit(&self, path: Option<&Path>) -> Result<(), PlantError> {
        let json = self.to_json()?;
        match path {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, format!("{json}\n"))?;
                eprintln!("Saved: {}", path.display());
            }
            None => println!("{json}"),
        }
        Ok(())
    }
}
