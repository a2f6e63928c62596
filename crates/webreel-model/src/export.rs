//! At-rest export document

use crate::interaction::InteractionLogEntry;
use crate::network::NetworkLogEntry;
use crate::snapshot::ElementSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a session was recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    Logs,
    Video,
}

/// Interchange representation of a finished session.
///
/// The video payload itself is never embedded here: `video_data`
/// holds only a reference (filename + size), the bytes travel as a
/// separate file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub export_date: DateTime<Utc>,
    pub tab_id: i64,
    pub mode: ExportMode,
    pub network_logs: Vec<NetworkLogEntry>,
    pub interaction_logs: Vec<InteractionLogEntry>,
    pub element_snapshots: Vec<ElementSnapshot>,
    pub video_data: VideoData,
    pub summary: Summary,
}

impl ExportDocument {
    /// Build a document with the summary derived from the log arrays.
    pub fn new(
        tab_id: i64,
        mode: ExportMode,
        network_logs: Vec<NetworkLogEntry>,
        interaction_logs: Vec<InteractionLogEntry>,
        element_snapshots: Vec<ElementSnapshot>,
        video_data: VideoData,
    ) -> Self {
        let summary = Summary {
            total_network_requests: network_logs.len(),
            total_interactions: interaction_logs.len(),
            total_element_snapshots: element_snapshots.len(),
        };
        Self {
            export_date: Utc::now(),
            tab_id,
            mode,
            network_logs,
            interaction_logs,
            element_snapshots,
            video_data,
            summary,
        }
    }
}

/// Reference to the exported video file, if any.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoData {
    pub has_video: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_size: Option<u64>,
}

impl VideoData {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn present(file_name: impl Into<String>, size: u64) -> Self {
        Self {
            has_video: true,
            video_file_name: Some(file_name.into()),
            video_size: Some(size),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_network_requests: usize,
    pub total_interactions: usize,
    pub total_element_snapshots: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_matches_log_lengths() {
        let doc = ExportDocument::new(
            7,
            ExportMode::Logs,
            vec![],
            vec![],
            vec![],
            VideoData::none(),
        );
        assert_eq!(doc.summary.total_network_requests, 0);
        assert_eq!(doc.summary.total_interactions, 0);
        assert_eq!(doc.summary.total_element_snapshots, 0);
    }

    #[test]
    fn test_export_date_is_iso8601() {
        let doc = ExportDocument::new(
            1,
            ExportMode::Video,
            vec![],
            vec![],
            vec![],
            VideoData::present("recording.webm", 1024),
        );
        let json = serde_json::to_string(&doc).unwrap();
        // chrono serializes DateTime<Utc> as an RFC 3339 string
        assert!(json.contains("\"exportDate\":\""));
        assert!(json.contains("\"mode\":\"video\""));
        assert!(json.contains("\"videoFileName\":\"recording.webm\""));
    }

    #[test]
    fn test_video_data_none_omits_reference_fields() {
        let json = serde_json::to_string(&VideoData::none()).unwrap();
        assert_eq!(json, "{\"hasVideo\":false}");
    }
}
