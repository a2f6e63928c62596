use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;
use tracing::info;
use webreel_correlate::ProtocolEvent;
use webreel_model::{ElementSnapshot, InteractionLogEntry};
use webreel_session::storage::{append_jsonl, read_jsonl, FileValueStore, SmallValueStore};
use webreel_session::Paths;

pub fn run(
    paths: &Paths,
    network: Option<&Path>,
    interactions: Option<&Path>,
    snapshots: Option<&Path>,
    tab_id: Option<i64>,
) -> anyhow::Result<()> {
    let mut network_count = 0usize;
    let mut interaction_count = 0usize;
    let mut snapshot_count = 0usize;

    if let Some(file) = network {
        let events: Vec<ProtocolEvent> = read_jsonl(file)?;
        for event in &events {
            append_jsonl(&paths.protocol_file(), event)?;
        }
        network_count = events.len();
    }

    if let Some(file) = interactions {
        let entries: Vec<InteractionLogEntry> = read_jsonl(file)?;
        for entry in &entries {
            append_jsonl(&paths.interactions_file(), entry)?;
        }
        interaction_count = entries.len();
    }

    if let Some(file) = snapshots {
        let records: Vec<ElementSnapshot> = read_jsonl(file)?;
        for record in &records {
            append_jsonl(&paths.snapshots_file(), record)?;
        }
        snapshot_count = records.len();
    }

    if let Some(tab_id) = tab_id {
        let mut store = FileValueStore::new(paths.state_file());
        let mut values = BTreeMap::new();
        values.insert("tabId".to_string(), Value::from(tab_id));
        values.insert("loggingActive".to_string(), Value::from(true));
        store.set(values)?;
    }

    info!(network_count, interaction_count, snapshot_count, "streams ingested");

    let output = serde_json::json!({
        "networkEvents": network_count,
        "interactions": interaction_count,
        "snapshots": snapshot_count,
    });
    println!("{output}");
    Ok(())
}
