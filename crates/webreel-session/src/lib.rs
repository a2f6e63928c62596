//! Session orchestration
//!
//! Owns the single process-wide session state and the typed command
//! surface over it, plus the file-backed rendition of the small-value
//! store, the append-only logs and the blob store.

pub mod command;
pub mod context;
pub mod interact;
pub mod paths;
pub mod storage;

pub use command::{dispatch, Command, CommandOutcome, Status};
pub use context::SessionContext;
pub use interact::{drag_entry, ScrollThrottle, DRAG_MIN_DISTANCE_PX, SCROLL_THROTTLE_MS};
pub use paths::Paths;
pub use storage::{FileBlobStore, FileValueStore, JsonlLog, SmallValueStore};
