use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{info, warn};
use webreel_correlate::{ProtocolEvent, RequestCorrelator};
use webreel_export::{render_json, render_timeline_html, video_file_name};
use webreel_model::{
    ElementSnapshot, ExportDocument, ExportMode, InteractionLogEntry, VideoArtifact, VideoData,
};
use webreel_session::storage::{read_jsonl, FileBlobStore, FileValueStore, SmallValueStore};
use webreel_session::Paths;
use webreel_video::BlobStore;

/// Blob id the recording pipeline stores the session video under.
const VIDEO_BLOB_ID: &str = "session-video";

pub fn run(
    paths: &Paths,
    mode: ExportMode,
    out: &Path,
    video_override: Option<&Path>,
) -> anyhow::Result<()> {
    std::fs::create_dir_all(out)
        .with_context(|| format!("creating output directory {}", out.display()))?;

    // Replay the raw phase stream into whole network entries.
    let events: Vec<ProtocolEvent> = read_jsonl(&paths.protocol_file())?;
    let mut correlator = RequestCorrelator::new();
    for event in events {
        correlator.apply(event);
    }
    let interactions: Vec<InteractionLogEntry> = read_jsonl(&paths.interactions_file())?;
    let snapshots: Vec<ElementSnapshot> = read_jsonl(&paths.snapshots_file())?;

    // Video mode degrades to a log-only export when no artifact turns
    // up; the captured data is always worth more than the recording.
    let artifact = if mode == ExportMode::Video {
        resolve_video(paths, video_override)
    } else {
        None
    };

    let video_data = match &artifact {
        Some(a) => VideoData::present(video_file_name(a.start_timestamp, &a.mime_type), a.size),
        None => VideoData::none(),
    };

    let tab_id = read_state(paths, &["tabId"])
        .get("tabId")
        .and_then(Value::as_i64)
        .unwrap_or(0);

    let doc = ExportDocument::new(
        tab_id,
        mode,
        correlator.into_entries(),
        interactions,
        snapshots,
        video_data,
    );

    // JSON first: the logs must survive even if a later artifact write
    // fails.
    let json = render_json(&doc)?;
    let json_path = out.join("session.json");
    std::fs::write(&json_path, json)
        .with_context(|| format!("writing {}", json_path.display()))?;

    if let Some(a) = &artifact {
        let name = video_file_name(a.start_timestamp, &a.mime_type);
        if let Err(err) = std::fs::write(out.join(&name), &a.data) {
            warn!(%err, file = %name, "video file not written, continuing");
        }
    }

    let html = render_timeline_html(&doc, artifact.as_ref())?;
    let html_path = out.join("timeline.html");
    std::fs::write(&html_path, html)
        .with_context(|| format!("writing {}", html_path.display()))?;

    info!(
        out = %out.display(),
        has_video = artifact.is_some(),
        "export complete"
    );

    let output = serde_json::json!({
        "networkRequests": doc.summary.total_network_requests,
        "interactions": doc.summary.total_interactions,
        "snapshots": doc.summary.total_element_snapshots,
        "hasVideo": doc.video_data.has_video,
        "out": out.display().to_string(),
    });
    println!("{output}");
    Ok(())
}

/// Read keys from the small-value store. Storage failures (corrupt or
/// unreadable state file) never abort an export; the intact logs are
/// worth more than the metadata.
fn read_state(paths: &Paths, keys: &[&str]) -> BTreeMap<String, Value> {
    let state = FileValueStore::new(paths.state_file());
    match state.get(keys) {
        Ok(values) => values,
        Err(err) => {
            warn!(%err, "state store unreadable, exporting without its metadata");
            BTreeMap::new()
        }
    }
}

/// Find the recording to bundle: an explicit file wins, otherwise the
/// stored blob. `None` when neither exists or when storage fails; a
/// lost recording never blocks the log export.
fn resolve_video(paths: &Paths, video_override: Option<&Path>) -> Option<VideoArtifact> {
    let meta = read_state(paths, &["videoMimeType", "videoStartTimestamp"]);
    let start_timestamp = meta
        .get("videoStartTimestamp")
        .and_then(Value::as_i64)
        .unwrap_or(0);

    if let Some(path) = video_override {
        return match std::fs::read(path) {
            Ok(data) => Some(VideoArtifact::new(data, mime_for_path(path), start_timestamp)),
            Err(err) => {
                warn!(%err, path = %path.display(), "video file unreadable, exporting without it");
                None
            }
        };
    }

    let store = FileBlobStore::new(paths.blobs_dir());
    match store.get(VIDEO_BLOB_ID) {
        Ok(Some(data)) => {
            let mime_type = meta
                .get("videoMimeType")
                .and_then(Value::as_str)
                .unwrap_or("video/webm");
            Some(VideoArtifact::new(data, mime_type, start_timestamp))
        }
        Ok(None) => {
            warn!("no recorded video found, exporting logs only");
            None
        }
        Err(err) => {
            warn!(%err, "blob store unreadable, exporting without video");
            None
        }
    }
}

fn mime_for_path(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("mp4") => "video/mp4",
        _ => "video/webm",
    }
}
