//! Unified timeline projection

use serde::{Deserialize, Serialize};

/// Source log a merged event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Network,
    Interaction,
    Snapshot,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventKind::Network => "network",
            EventKind::Interaction => "interaction",
            EventKind::Snapshot => "snapshot",
        };
        f.write_str(name)
    }
}

/// One event on the merged timeline.
///
/// `relative_time_ms` is the playback coordinate: milliseconds since
/// the first event of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedEvent {
    pub kind: EventKind,
    pub timestamp: i64,
    pub relative_time_ms: i64,
    pub payload: serde_json::Value,
}
