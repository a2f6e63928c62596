//! Video capture coordination
//!
//! The coordinator drives the `Idle → Starting → Recording → Stopping`
//! state machine against a helper recording context it only knows
//! through the narrow [`ScreenRecorder`] contract. The helper runs in
//! a separate execution context and may delay or never answer, so
//! every transition is guarded by timeouts and bounded retries.

pub mod chunks;
pub mod codec;
pub mod coordinator;
pub mod error;
pub mod recorder;
pub mod retry;

pub use chunks::ChunkBuffer;
pub use codec::{select_codec, CODEC_PRIORITY};
pub use coordinator::{RecorderState, VideoConfig, VideoCoordinator};
pub use error::VideoError;
pub use recorder::{BlobStore, CaptureSource, RecordedVideo, ScreenRecorder, StreamHandle, TargetId};
pub use retry::retry_with_backoff;
