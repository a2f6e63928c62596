//! Interaction capture policies

use std::collections::HashMap;
use webreel_model::{ElementDescriptor, InteractionLogEntry, Point};

/// Minimum spacing between consecutive scroll entries for one page.
pub const SCROLL_THROTTLE_MS: i64 = 100;

/// A pointer move must travel further than this to count as a drag
/// rather than a click.
pub const DRAG_MIN_DISTANCE_PX: f64 = 5.0;

/// Per-page scroll throttle: rapid-fire scroll events collapse to at
/// most one entry per window.
#[derive(Debug, Default)]
pub struct ScrollThrottle {
    last_by_url: HashMap<String, i64>,
}

impl ScrollThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a scroll at `timestamp` on `url` should be recorded.
    /// Admitting updates the window.
    pub fn admit(&mut self, url: &str, timestamp: i64) -> bool {
        match self.last_by_url.get(url) {
            Some(&last) if timestamp - last < SCROLL_THROTTLE_MS => false,
            _ => {
                self.last_by_url.insert(url.to_string(), timestamp);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_by_url.clear();
    }
}

/// Build a drag entry, or `None` when the travelled distance does not
/// exceed the click-disambiguation threshold.
pub fn drag_entry(
    element: ElementDescriptor,
    start: Point,
    end: Point,
    start_timestamp: i64,
    end_timestamp: i64,
) -> Option<InteractionLogEntry> {
    let distance = ((end.x - start.x).powi(2) + (end.y - start.y).powi(2)).sqrt();
    if distance <= DRAG_MIN_DISTANCE_PX {
        return None;
    }
    Some(InteractionLogEntry::Drag {
        timestamp: end_timestamp,
        element,
        start,
        end,
        distance,
        duration_ms: end_timestamp - start_timestamp,
    })
}

/// Build an input entry. Only the value length travels, never the
/// value itself.
pub fn input_entry(
    element: ElementDescriptor,
    timestamp: i64,
    value: &str,
    input_type: &str,
) -> InteractionLogEntry {
    InteractionLogEntry::Input {
        timestamp,
        element,
        value_length: value.chars().count(),
        input_type: input_type.to_string(),
    }
}
