//! Opening cassette files for replay.

use std::path::Path;

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Read a YAML cassette from `path` and wrap it in a replayer.
///
/// # Errors
///
/// Returns a message naming the file if it cannot be read or is not a cassette.
pub fn load_cassette(path: &Path) -> Result<CassetteReplayer, String> {
    let shown = path.display();
    let yaml = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read cassette file {shown}: {e}"))?;
    let cassette = serde_yaml::from_str::<Cassette>(&yaml)
        .map_err(|e| format!("Failed to parse cassette file {shown}: {e}"))?;
    tracing::debug!(
        name = %cassette.name,
        recorded_at = %cassette.recorded_at,
        interactions = cassette.interactions.len(),
        "loaded cassette"
    );
    Ok(CassetteReplayer::new(&cassette))
}
