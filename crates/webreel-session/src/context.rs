//! Process-wide session state

use crate::interact::ScrollThrottle;
use std::collections::HashSet;
use tracing::{debug, info};
use webreel_correlate::{ProtocolEvent, RequestCorrelator};
use webreel_model::{
    ElementSnapshot, ExportDocument, ExportMode, InteractionLogEntry, VideoData,
};

/// The one mutable home of a recording session.
///
/// Created on the first start command, reset by clear-all, gone when
/// the process restarts. Handlers receive it explicitly; there are no
/// ambient globals to mock around in tests.
#[derive(Debug, Default)]
pub struct SessionContext {
    pub tab_id: Option<i64>,
    pub logging_active: bool,
    pub attached_targets: HashSet<i64>,
    pub correlator: RequestCorrelator,
    pub interactions: Vec<InteractionLogEntry>,
    pub snapshots: Vec<ElementSnapshot>,
    /// Reference to a persisted artifact (file name, size), if any.
    pub video_ref: Option<(String, u64)>,
    scroll_throttle: ScrollThrottle,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_logging(&mut self, tab_id: i64) {
        info!(tab_id, "logging started");
        self.tab_id = Some(tab_id);
        self.logging_active = true;
        self.attached_targets.insert(tab_id);
    }

    pub fn stop_logging(&mut self) {
        if let Some(tab_id) = self.tab_id {
            self.attached_targets.remove(&tab_id);
        }
        self.logging_active = false;
        info!("logging stopped");
    }

    /// Feed one raw network phase event into the correlator.
    pub fn network_event(&mut self, event: ProtocolEvent) {
        self.correlator.apply(event);
    }

    /// Append an interaction, applying the scroll throttle. Returns
    /// whether the entry was kept.
    pub fn record_interaction(&mut self, entry: InteractionLogEntry) -> bool {
        if let InteractionLogEntry::Scroll { timestamp, url, .. } = &entry {
            if !self.scroll_throttle.admit(url, *timestamp) {
                debug!(%url, "scroll entry throttled");
                return false;
            }
        }
        self.interactions.push(entry);
        true
    }

    pub fn capture_snapshot(&mut self, snapshot: ElementSnapshot) {
        self.snapshots.push(snapshot);
    }

    /// Project the session into its interchange document.
    pub fn export_document(&self, mode: ExportMode) -> ExportDocument {
        let video_data = match &self.video_ref {
            Some((file_name, size)) => VideoData::present(file_name.clone(), *size),
            None => VideoData::none(),
        };
        ExportDocument::new(
            self.tab_id.unwrap_or(0),
            mode,
            self.correlator.entries().to_vec(),
            self.interactions.clone(),
            self.snapshots.clone(),
            video_data,
        )
    }

    /// Explicit clear-all: the only way data leaves a live session.
    pub fn clear_all(&mut self) {
        self.correlator.clear();
        self.interactions.clear();
        self.snapshots.clear();
        self.attached_targets.clear();
        self.scroll_throttle.reset();
        self.video_ref = None;
        self.tab_id = None;
        self.logging_active = false;
        info!("session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll(timestamp: i64) -> InteractionLogEntry {
        InteractionLogEntry::Scroll {
            timestamp,
            url: "https://example.com".to_string(),
            x: 0.0,
            y: 5.0,
        }
    }

    #[test]
    fn test_scrolls_throttled_on_append() {
        let mut ctx = SessionContext::new();
        assert!(ctx.record_interaction(scroll(1000)));
        assert!(!ctx.record_interaction(scroll(1020)));
        assert!(ctx.record_interaction(scroll(1200)));
        assert_eq!(ctx.interactions.len(), 2);
    }

    #[test]
    fn test_export_document_counts() {
        let mut ctx = SessionContext::new();
        ctx.start_logging(7);
        ctx.record_interaction(scroll(1000));

        let doc = ctx.export_document(ExportMode::Logs);
        assert_eq!(doc.tab_id, 7);
        assert_eq!(doc.summary.total_interactions, 1);
        assert_eq!(doc.summary.total_network_requests, 0);
        assert!(!doc.video_data.has_video);
    }

    #[test]
    fn test_clear_all_resets_everything() {
        let mut ctx = SessionContext::new();
        ctx.start_logging(7);
        ctx.record_interaction(scroll(1000));
        ctx.video_ref = Some(("recording.webm".to_string(), 100));
        ctx.clear_all();

        assert!(ctx.interactions.is_empty());
        assert!(ctx.correlator.is_empty());
        assert!(ctx.attached_targets.is_empty());
        assert!(ctx.video_ref.is_none());
        assert!(!ctx.logging_active);
    }
}
