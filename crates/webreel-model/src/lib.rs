//! Record model shared by every webreel crate
//!
//! Four record kinds flow through a session: network exchanges,
//! user interactions, element snapshots and the video artifact.
//! All of them carry a millisecond epoch timestamp, which is the
//! only field the aggregator needs to merge them.

pub mod element;
pub mod event;
pub mod export;
pub mod interaction;
pub mod network;
pub mod snapshot;
pub mod video;

pub use element::{BoundingBox, ElementDescriptor, Viewport};
pub use event::{AggregatedEvent, EventKind};
pub use export::{ExportDocument, ExportMode, Summary, VideoData};
pub use interaction::{ChangeValue, ClickCoordinates, InteractionLogEntry, Point};
pub use network::{LoadingFailed, LoadingFinished, NetworkLogEntry, ResponseData};
pub use snapshot::ElementSnapshot;
pub use video::VideoArtifact;

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
