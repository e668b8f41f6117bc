//! Records port calls into a cassette file.

use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;

use super::format::{Cassette, Interaction};

/// A cassette being filled in during one run.
///
/// The header is stamped when the session opens, so `recorded_at` marks the
/// start of the run rather than the moment it was saved.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    cassette: Cassette,
}

impl CassetteRecorder {
    /// Open a session that will be saved to `path`.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>, commit: impl Into<String>) -> Self {
        let cassette = Cassette {
            name: name.into(),
            recorded_at: Utc::now(),
            commit: commit.into(),
            interactions: Vec::new(),
        };
        Self { path: path.into(), cassette }
    }

    /// Number of interactions captured so far.
    #[must_use]
    pub fn interaction_count(&self) -> usize {
        self.cassette.interactions.len()
    }

    /// Append a call and return its sequence number.
    pub fn record(
        &mut self,
        port: &str,
        method: &str,
        input: serde_json::Value,
        output: serde_json::Value,
    ) -> u64 {
        let seq = self.cassette.interactions.len() as u64;
        tracing::trace!(seq, port, method, "captured interaction");
        self.cassette.interactions.push(Interaction {
            seq,
            port: port.to_owned(),
            method: method.to_owned(),
            input,
            output,
        });
        seq
    }

    /// Save the cassette and return where it went.
    ///
    /// The YAML goes to a sibling `.partial` file first and is renamed into
    /// place, so an interrupted save never leaves a truncated cassette behind.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn finish(self) -> io::Result<PathBuf> {
        let yaml = serde_yaml::to_string(&self.cassette).map_err(io::Error::other)?;
        write_replacing(&self.path, yaml.as_bytes())?;
        tracing::debug!(path = %self.path.display(), interactions = self.cassette.interactions.len(), "cassette saved");
        Ok(self.path)
    }
}

fn write_replacing(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut partial = path.as_os_str().to_owned();
    partial.push(".partial");
    let partial = PathBuf::from(partial);
    std::fs::write(&partial, contents)?;
    std::fs::rename(&partial, path)
}
