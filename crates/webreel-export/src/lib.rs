//! Export rendering
//!
//! Turns the in-memory session model into (a) a portable pretty JSON
//! document and (b) a single self-contained interactive HTML timeline
//! with an embedded playback engine and, optionally, the recorded
//! video. The HTML ships everything it needs, no CDN scripts.

pub mod html;
pub mod json;
mod player;
mod styles;
mod template;

pub use html::{render_timeline_html, video_file_name, INLINE_VIDEO_MAX_BYTES};
pub use json::render_json;

/// Failures while rendering an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
