//! The recorded screen video

/// Finished screen recording for one session.
///
/// At most one artifact exists per session; starting a new recording
/// supersedes any prior artifact stored under the same id. The payload
/// lives in the blob store, never in the small-value store.
#[derive(Debug, Clone)]
pub struct VideoArtifact {
    pub data: Vec<u8>,
    /// Container/codec type chosen by the capability probe.
    pub mime_type: String,
    /// Anchors video time zero to the session's wall-clock timeline.
    pub start_timestamp: i64,
    pub size: u64,
}

impl VideoArtifact {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>, start_timestamp: i64) -> Self {
        let size = data.len() as u64;
        Self {
            data,
            mime_type: mime_type.into(),
            start_timestamp,
            size,
        }
    }
}
