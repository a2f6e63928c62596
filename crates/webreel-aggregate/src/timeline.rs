//! Merged relative-time view over the three session logs

use tracing::error;
use webreel_model::{
    now_ms, AggregatedEvent, ElementSnapshot, EventKind, InteractionLogEntry, NetworkLogEntry,
};

/// Chronologically ordered view over a session.
///
/// `relative_time_ms` of every event lies in `[0, duration_ms]`; that
/// range is the playback coordinate space of the timeline player.
#[derive(Debug, Clone)]
pub struct Timeline {
    pub events: Vec<AggregatedEvent>,
    pub start_time: i64,
    pub end_time: i64,
    pub duration_ms: i64,
}

impl Timeline {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Merge the three logs into one stable-sorted timeline.
///
/// Ties on `timestamp` keep the concatenation order
/// network → interaction → snapshot, since sub-millisecond ordering is
/// not observable at the sources. An empty combined input yields a
/// degenerate timeline anchored at the current time with zero duration.
pub fn aggregate(
    network: &[NetworkLogEntry],
    interactions: &[InteractionLogEntry],
    snapshots: &[ElementSnapshot],
) -> Timeline {
    let mut events: Vec<AggregatedEvent> = Vec::new();

    for entry in network {
        push_event(&mut events, EventKind::Network, entry.timestamp, entry);
    }
    for entry in interactions {
        push_event(&mut events, EventKind::Interaction, entry.timestamp(), entry);
    }
    for snapshot in snapshots {
        push_event(&mut events, EventKind::Snapshot, snapshot.timestamp, snapshot);
    }

    // Vec::sort_by_key is stable, which is what keeps tie order.
    events.sort_by_key(|e| e.timestamp);

    let (start_time, end_time) = match (events.first(), events.last()) {
        (Some(first), Some(last)) => (first.timestamp, last.timestamp),
        _ => {
            let now = now_ms();
            (now, now)
        }
    };

    for event in &mut events {
        event.relative_time_ms = event.timestamp - start_time;
    }

    Timeline {
        events,
        start_time,
        end_time,
        duration_ms: end_time - start_time,
    }
}

fn push_event<T: serde::Serialize + std::fmt::Debug>(
    events: &mut Vec<AggregatedEvent>,
    kind: EventKind,
    timestamp: i64,
    record: &T,
) {
    // One malformed record must not lose the rest of the session.
    match serde_json::to_value(record) {
        Ok(payload) => events.push(AggregatedEvent {
            kind,
            timestamp,
            relative_time_ms: 0,
            payload,
        }),
        Err(err) => error!(%kind, %err, ?record, "skipping unserializable record"),
    }
}
