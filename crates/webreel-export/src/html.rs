//! Self-contained HTML timeline export

use crate::player::PLAYER_JS;
use crate::styles::STYLES;
use crate::template::TEMPLATE;
use crate::ExportError;
use base64::Engine;
use serde::Serialize;
use tracing::debug;
use webreel_aggregate::aggregate;
use webreel_model::{AggregatedEvent, ExportDocument, ExportMode, Summary, VideoArtifact};

/// Artifacts below this size are inlined as a data URI; larger ones
/// are referenced by a co-located filename. Inline encoding inflates
/// size by roughly a third, so unbounded inlining is not an option.
pub const INLINE_VIDEO_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Everything the embedded player needs, injected as one JSON literal.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayerData<'a> {
    mode: ExportMode,
    start_time: i64,
    duration_ms: i64,
    summary: &'a Summary,
    events: &'a [AggregatedEvent],
    /// Video start relative to the timeline origin, for clock mapping.
    video_offset_ms: i64,
    has_video: bool,
}

/// Render the interactive timeline document.
///
/// With an artifact the media element's clock drives playback; without
/// one a virtual clock does, and a placeholder explains the video is
/// unavailable. Either way the output is one standalone file.
pub fn render_timeline_html(
    doc: &ExportDocument,
    artifact: Option<&VideoArtifact>,
) -> Result<String, ExportError> {
    let timeline = aggregate(
        &doc.network_logs,
        &doc.interaction_logs,
        &doc.element_snapshots,
    );

    // May be negative when capture began before the first event; the
    // player's clamp keeps playback inside [0, duration] either way.
    let video_offset_ms = artifact
        .map(|a| a.start_timestamp - timeline.start_time)
        .unwrap_or(0);

    let data = PlayerData {
        mode: doc.mode,
        start_time: timeline.start_time,
        duration_ms: timeline.duration_ms,
        summary: &doc.summary,
        events: &timeline.events,
        video_offset_ms,
        has_video: artifact.is_some(),
    };
    // Guard against </script> breakout from logged payloads.
    let data_json = serde_json::to_string(&data)?.replace("</", "<\\/");

    let title = format!(
        "Session recording {}",
        doc.export_date.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let summary_line = format!(
        "{} network requests · {} interactions · {} snapshots",
        doc.summary.total_network_requests,
        doc.summary.total_interactions,
        doc.summary.total_element_snapshots
    );

    let html = TEMPLATE
        .replace("__TITLE__", &escape_html(&title))
        .replace("__SUMMARY__", &escape_html(&summary_line))
        .replace("__VIDEO_SECTION__", &video_section(artifact))
        .replace("__STYLES__", STYLES)
        .replace("__SESSION_DATA__", &data_json)
        .replace("__PLAYER_JS__", PLAYER_JS);
    Ok(html)
}

/// Export filename for the video, stamped with the recording start.
pub fn video_file_name(start_timestamp: i64, mime_type: &str) -> String {
    let stamp = chrono::DateTime::from_timestamp_millis(start_timestamp)
        .map(|t| t.format("%Y%m%d-%H%M%S").to_string())
        .unwrap_or_else(|| start_timestamp.to_string());
    format!("recording-{stamp}.{}", extension_for(mime_type))
}

fn extension_for(mime_type: &str) -> &'static str {
    if mime_type.contains("webm") {
        "webm"
    } else if mime_type.contains("mp4") {
        "mp4"
    } else {
        "bin"
    }
}

fn video_section(artifact: Option<&VideoArtifact>) -> String {
    let Some(artifact) = artifact else {
        return "<div class=\"video-placeholder\">No video is available for this session.</div>"
            .to_string();
    };

    if artifact.size < INLINE_VIDEO_MAX_BYTES {
        debug!(size = artifact.size, "inlining video as data uri");
        let encoded = base64::engine::general_purpose::STANDARD.encode(&artifact.data);
        format!(
            "<video id=\"sessionVideo\" controls src=\"data:{};base64,{}\"></video>",
            escape_html(&artifact.mime_type),
            encoded
        )
    } else {
        // Too large to inline: reference the co-located file instead.
        let file_name = video_file_name(artifact.start_timestamp, &artifact.mime_type);
        format!(
            "<video id=\"sessionVideo\" controls src=\"{0}\"></video>\n\
             <p class=\"video-note\">Keep <code>{0}</code> in the same folder as this file.</p>",
            escape_html(&file_name)
        )
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use webreel_model::{InteractionLogEntry, VideoData};

    fn doc() -> ExportDocument {
        ExportDocument::new(
            1,
            ExportMode::Logs,
            vec![],
            vec![InteractionLogEntry::Scroll {
                timestamp: 1000,
                url: "https://example.com".to_string(),
                x: 0.0,
                y: 10.0,
            }],
            vec![],
            VideoData::none(),
        )
    }

    #[test]
    fn test_small_video_inlined() {
        // Below the cutoff the artifact rides inside the document.
        let artifact = VideoArtifact::new(vec![1, 2, 3, 4], "video/webm", 1000);
        let html = render_timeline_html(&doc(), Some(&artifact)).unwrap();

        assert!(html.contains("data:video/webm;base64,"));
        assert!(!html.contains("video-placeholder"));
    }

    #[test]
    fn test_large_video_referenced_by_filename() {
        let artifact = VideoArtifact::new(
            vec![0u8; (INLINE_VIDEO_MAX_BYTES + 1) as usize],
            "video/webm",
            1_700_000_000_000,
        );
        let html = render_timeline_html(&doc(), Some(&artifact)).unwrap();

        assert!(!html.contains("data:video/webm;base64,"));
        assert!(html.contains("recording-"));
        assert!(html.contains(".webm"));
        assert!(html.contains("same folder"));
    }

    #[test]
    fn test_no_video_renders_placeholder() {
        let html = render_timeline_html(&doc(), None).unwrap();

        assert!(html.contains("video-placeholder"));
        assert!(!html.contains("<video"));
        // Document must still be a complete page.
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("</html>"));
    }

    #[test]
    fn test_no_external_dependencies() {
        let html = render_timeline_html(&doc(), None).unwrap();
        assert!(!html.contains("http://cdn"));
        assert!(!html.contains("https://cdn"));
        assert!(!html.contains("<script src="));
        assert!(!html.contains("<link "));
    }

    #[test]
    fn test_script_breakout_escaped() {
        let mut document = doc();
        document.interaction_logs = vec![InteractionLogEntry::Scroll {
            timestamp: 1000,
            url: "https://example.com/</script><script>alert(1)".to_string(),
            x: 0.0,
            y: 0.0,
        }];
        let html = render_timeline_html(&document, None).unwrap();
        assert!(!html.contains("</script><script>alert(1)"));
    }

    #[test]
    fn test_video_started_before_first_event_keeps_negative_offset() {
        // Capture at t=400, first event at t=1000: video time zero maps
        // to -600ms on the timeline and must not be collapsed to zero.
        let artifact = VideoArtifact::new(vec![1, 2, 3, 4], "video/webm", 400);
        let html = render_timeline_html(&doc(), Some(&artifact)).unwrap();
        assert!(html.contains("\"videoOffsetMs\":-600"));
    }

    #[test]
    fn test_video_file_name_stamped() {
        let name = video_file_name(1_700_000_000_000, "video/webm;codecs=vp9");
        assert!(name.starts_with("recording-"));
        assert!(name.ends_with(".webm"));
    }

    #[test]
    fn test_events_embedded_for_player() {
        let html = render_timeline_html(&doc(), None).unwrap();
        assert!(html.contains("\"durationMs\":0"));
        assert!(html.contains("\"kind\":\"interaction\""));
    }
}
