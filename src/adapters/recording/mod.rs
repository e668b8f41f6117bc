//! Recording adapters that capture interactions to cassettes.
//!
//! Each adapter delegates to a live implementation and appends the call's
//! input and result to a shared [`CassetteRecorder`].

pub mod credentials;
pub mod generator;
pub mod geocoder;
pub mod image_search;
pub mod weather;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

/// Record a `Result<T, E>` interaction using the Ok/Err JSON convention.
///
/// A value that cannot be serialized is logged and skipped; recording never
/// changes the outcome of the call it observes.
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let output_json = match result {
        Ok(v) => serde_json::to_value(v).map(|inner| serde_json::json!({ "Ok": inner })),
        Err(e) => Ok(serde_json::json!({ "Err": e.to_string() })),
    };
    let (input_json, output_json) = match (serde_json::to_value(input), output_json) {
        (Ok(input), Ok(output)) => (input, output),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(port, method, error = %e, "skipping unserializable interaction");
            return;
        }
    };

    match recorder.lock() {
        Ok(mut guard) => {
            guard.record(port, method, input_json, output_json);
        }
        Err(_) => tracing::warn!(port, method, "recorder lock poisoned; interaction dropped"),
    }
}
