//! Point-in-time element snapshots

use crate::element::{ElementDescriptor, Viewport};
use serde::{Deserialize, Serialize};

/// Capture of all interactive elements visible at one instant:
/// anchors, buttons, inputs, selects, textareas, and anything with a
/// click handler or button role. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSnapshot {
    pub timestamp: i64,
    pub url: String,
    pub elements: Vec<ElementDescriptor>,
    pub viewport: Viewport,
}
