use serde_json::Value;
use webreel_correlate::{ProtocolEvent, RequestCorrelator};
use webreel_model::{ElementSnapshot, InteractionLogEntry};
use webreel_session::storage::{read_jsonl, FileValueStore, SmallValueStore};
use webreel_session::Paths;

pub fn run(paths: &Paths) -> anyhow::Result<()> {
    let events: Vec<ProtocolEvent> = read_jsonl(&paths.protocol_file())?;
    let mut correlator = RequestCorrelator::new();
    for event in events {
        correlator.apply(event);
    }
    let pending = correlator
        .entries()
        .iter()
        .filter(|entry| entry.is_pending())
        .count();

    let interactions: Vec<InteractionLogEntry> = read_jsonl(&paths.interactions_file())?;
    let snapshots: Vec<ElementSnapshot> = read_jsonl(&paths.snapshots_file())?;

    let state = FileValueStore::new(paths.state_file());
    let values = state.get(&["tabId", "loggingActive"])?;

    let output = serde_json::json!({
        "recording": values.get("loggingActive").and_then(Value::as_bool).unwrap_or(false),
        "tabId": values.get("tabId").and_then(Value::as_i64),
        "networkRequests": correlator.len(),
        "pendingRequests": pending,
        "interactions": interactions.len(),
        "snapshots": snapshots.len(),
    });
    println!("{output}");
    Ok(())
}
