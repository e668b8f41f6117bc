//! Repairs and parses the JSON document Gemini returns for an identification.

use serde_json::Value;

use crate::error::PlantError;

/// Top-level fields every identification reply must carry.
const REQUIRED_FIELDS: [&str; 4] = ["name", "overview", "careplan", "disease"];

/// Message used when the model flags a non-plant without explaining why.
const NOT_A_PLANT_FALLBACK: &str = "This image does not appear to contain a plant or flower.";

/// A parsed identification reply that passed the sentinel and required-field checks.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPlant {
    value: Value,
}

impl RawPlant {
    /// The underlying JSON object.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The plant's common name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.value["name"].as_str().unwrap_or_default()
    }

    /// The `disease` entries in reply order.
    #[must_use]
    pub fn diseases(&self) -> &[Value] {
        self.value["disease"].as_array().map_or(&[][..], Vec::as_slice)
    }
}

/// Strip Markdown code fences and surrounding whitespace.
#[must_use]
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let without_close = without_open.strip_suffix("```").unwrap_or(without_open);
    without_close.trim()
}

/// Parse the AI text into a validated [`RawPlant`].
///
/// # Errors
///
/// - [`PlantError::MalformedAiResponse`] when the text is not JSON.
/// - [`PlantError::NotAPlant`] when the model returned the `not_a_plant` sentinel.
/// - [`PlantError::IncompleteAiResponse`] when required fields are missing.
pub fn parse_identification(text: &str) -> Result<RawPlant, PlantError> {
    let value: Value =
        serde_json::from_str(strip_code_fences(text)).map_err(PlantError::MalformedAiResponse)?;

    if value.get("error").is_some_and(is_truthy) {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(NOT_A_PLANT_FALLBACK);
        return Err(PlantError::NotAPlant(message.to_string()));
    }

    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .into_iter()
        .filter(|&field| match (field, value.get(field)) {
            (_, None | Some(Value::Null)) => true,
            ("name", Some(name)) => !name.as_str().is_some_and(|n| !n.is_empty()),
            ("disease", Some(disease)) => !disease.is_array(),
            _ => false,
        })
        .collect();

    if !missing.is_empty() {
        return Err(PlantError::IncompleteAiResponse { missing });
    }

    Ok(RawPlant { value })
}

/// JSON truthiness as the reply producer understands it.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{"name":"Monstera","overview":{},"careplan":{},"disease":[]}"#;

    #[test]
    fn fenced_json_parses_like_bare_json() {
        let fenced = format!("```json\n{MINIMAL}\n```");
        let bare = parse_identification(MINIMAL).unwrap();
        assert_eq!(parse_identification(&fenced).unwrap(), bare);
    }

    #[test]
    fn plain_fence_and_whitespace_are_stripped() {
        assert_eq!(strip_code_fences("  ```\n{}\n```  "), "{}");
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```json{}"), "{}");
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = parse_identification("```json\nnot json\n```").unwrap_err();
        assert!(matches!(err, PlantError::MalformedAiResponse(_)));
    }

    #[test]
    fn sentinel_surfaces_model_message() {
        let err = parse_identification(r#"{"error":"not_a_plant","message":"X"}"#).unwrap_err();
        assert!(matches!(err, PlantError::NotAPlant(ref m) if m == "X"));
    }

    #[test]
    fn sentinel_without_message_uses_fallback() {
        let err = parse_identification(r#"{"error":"not_a_plant"}"#).unwrap_err();
        assert!(matches!(err, PlantError::NotAPlant(ref m) if m == NOT_A_PLANT_FALLBACK));
    }

    #[test]
    fn falsy_error_field_is_ignored() {
        let text = r#"{"error":"","name":"Fern","overview":{},"careplan":{},"disease":[]}"#;
        assert_eq!(parse_identification(text).unwrap().name(), "Fern");
    }

    #[test]
    fn missing_fields_are_reported() {
        let err = parse_identification(r#"{"name":"","overview":{},"disease":{}}"#).unwrap_err();
        match err {
            PlantError::IncompleteAiResponse { missing } => {
                assert_eq!(missing, vec!["name", "careplan", "disease"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_object_reply_is_incomplete() {
        let err = parse_identification("[1, 2]").unwrap_err();
        assert!(matches!(err, PlantError::IncompleteAiResponse { ref missing } if missing.len() == 4));
    }

    #[test]
    fn accessors_read_name_and_diseases() {
        let plant = parse_identification(
            r#"{"name":"Pothos","overview":{},"careplan":{},"disease":[{"title":"Root Rot"}]}"#,
        )
        .unwrap();
        assert_eq!(plant.name(), "Pothos");
        assert_eq!(plant.diseases().len(), 1);
    }
}
