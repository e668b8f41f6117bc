//! Replaying adapters that serve recorded interactions from cassettes.

pub mod credentials;
pub mod generator;
pub mod geocoder;
pub mod image_search;
pub mod weather;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::replayer::CassetteReplayer;
use crate::error::PlantError;

/// Retrieve the recorded output for a call on `port`/`method` with `input`.
///
/// # Errors
///
/// Returns [`PlantError::Replay`] when the cassette has nothing left for
/// this port and method.
pub(crate) fn next_output<I: Serialize>(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
    input: &I,
) -> Result<serde_json::Value, PlantError> {
    let input = serde_json::to_value(input).unwrap_or(serde_json::Value::Null);
    let mut guard = replayer
        .lock()
        .map_err(|_| PlantError::Replay("replayer lock poisoned".to_string()))?;
    let interaction = guard.next_interaction(port, method, &input).map_err(PlantError::Replay)?;
    tracing::debug!(port, method, seq = interaction.seq, "replaying interaction");
    Ok(interaction.output.clone())
}

/// Deserialize a replayed output as `Result<T, PlantError>`.
///
/// Recorded failures come back as [`PlantError::Recorded`] carrying the
/// original message.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: Result<serde_json::Value, PlantError>,
) -> Result<T, PlantError> {
    let output = output?;
    if let Some(err_val) = output.get("Err").or_else(|| output.get("err")) {
        let msg = err_val.as_str().unwrap_or("replayed error").to_string();
        return Err(PlantError::Recorded(msg));
    }
    let ok_val = output.get("Ok").or_else(|| output.get("ok")).cloned().unwrap_or(output);
    serde_json::from_value(ok_val)
        .map_err(|e| PlantError::Replay(format!("recorded output does not match the port type: {e}")))
}
