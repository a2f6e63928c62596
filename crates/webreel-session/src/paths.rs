//! On-disk layout

use std::path::PathBuf;

/// Well-known file locations under the webreel data directory.
#[derive(Debug, Clone)]
pub struct Paths {
    root: PathBuf,
}

impl Paths {
    /// Default location: `~/.webreel`.
    pub fn new() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            root: home.join(".webreel"),
        }
    }

    /// Rooted somewhere else, for tests and explicit overrides.
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Raw network phase events, one JSON object per line.
    pub fn protocol_file(&self) -> PathBuf {
        self.root.join("protocol.jsonl")
    }

    pub fn interactions_file(&self) -> PathBuf {
        self.root.join("interactions.jsonl")
    }

    pub fn snapshots_file(&self) -> PathBuf {
        self.root.join("snapshots.jsonl")
    }

    /// Small-value store backing file.
    pub fn state_file(&self) -> PathBuf {
        self.root.join("state.json")
    }

    pub fn blobs_dir(&self) -> PathBuf {
        self.root.join("blobs")
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}
