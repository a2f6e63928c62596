//! Contracts between the coordinator and its collaborators
//!
//! The helper recording context, the capture-handle source and the
//! blob store are external: the coordinator depends on these traits
//! only, never on their implementations.

use crate::error::VideoError;

/// Opaque identifier of the tab/page being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(pub i64);

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque capture stream handle scoped to one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamHandle(pub String);

/// Finished recording as handed back by the helper context.
#[derive(Debug, Clone)]
pub struct RecordedVideo {
    pub data: Vec<u8>,
    pub mime_type: String,
    /// When capture actually started; anchors video time zero.
    pub start_timestamp: i64,
}

/// RPC surface of the helper recording context.
pub trait ScreenRecorder {
    /// Start recording from a capture stream. Resolves once the helper
    /// acknowledges; the coordinator bounds the wait.
    fn start(
        &mut self,
        stream: StreamHandle,
    ) -> impl std::future::Future<Output = Result<(), VideoError>>;

    /// Stop recording. The helper concatenates its buffered chunks and
    /// hands back the finished payload.
    fn stop(&mut self) -> impl std::future::Future<Output = Result<RecordedVideo, VideoError>>;
}

/// Acquires capture handles for targets.
pub trait CaptureSource {
    fn acquire(
        &mut self,
        target: TargetId,
    ) -> impl std::future::Future<Output = Result<StreamHandle, VideoError>>;
}

/// Large-object storage for video payloads. The small-value store has
/// a hard size ceiling, so artifacts never go there.
pub trait BlobStore {
    fn put(&mut self, id: &str, bytes: &[u8]) -> Result<(), VideoError>;
    fn get(&self, id: &str) -> Result<Option<Vec<u8>>, VideoError>;
    fn delete(&mut self, id: &str) -> Result<(), VideoError>;
}
