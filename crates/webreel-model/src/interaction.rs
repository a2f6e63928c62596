//! User interaction records

use crate::element::ElementDescriptor;
use serde::{Deserialize, Serialize};

/// A single user action, appended to the interaction log and never
/// mutated afterwards.
///
/// Privacy rule: input and change records carry the value *length*,
/// never the raw value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum InteractionLogEntry {
    Click {
        timestamp: i64,
        element: ElementDescriptor,
        coordinates: ClickCoordinates,
    },
    Scroll {
        timestamp: i64,
        url: String,
        x: f64,
        y: f64,
    },
    Drag {
        timestamp: i64,
        element: ElementDescriptor,
        start: Point,
        end: Point,
        /// Euclidean distance in pixels between start and end.
        distance: f64,
        duration_ms: i64,
    },
    Input {
        timestamp: i64,
        element: ElementDescriptor,
        value_length: usize,
        input_type: String,
    },
    Change {
        timestamp: i64,
        element: ElementDescriptor,
        #[serde(flatten)]
        value: ChangeValue,
    },
}

impl InteractionLogEntry {
    pub fn timestamp(&self) -> i64 {
        match self {
            Self::Click { timestamp, .. }
            | Self::Scroll { timestamp, .. }
            | Self::Drag { timestamp, .. }
            | Self::Input { timestamp, .. }
            | Self::Change { timestamp, .. } => *timestamp,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Click { .. } => "click",
            Self::Scroll { .. } => "scroll",
            Self::Drag { .. } => "drag",
            Self::Input { .. } => "input",
            Self::Change { .. } => "change",
        }
    }
}

/// New value of a change event: a boolean for checkbox/radio controls,
/// a value length for everything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum ChangeValue {
    Checked { checked: bool },
    Text { value_length: usize },
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Click position in the three browser coordinate spaces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClickCoordinates {
    pub client: Point,
    pub page: Point,
    pub screen: Point,
}
