//! Phase events → complete network log entries

use crate::events::{ProtocolEvent, RequestMeta, ResponseMeta};
use base64::Engine;
use tracing::{debug, warn};
use webreel_model::{LoadingFailed, LoadingFinished, NetworkLogEntry, ResponseData};

/// MIME types whose bodies are worth fetching. Binary payloads are
/// skipped entirely; the entry keeps `body_size` either way.
pub fn wants_body(mime_type: &str) -> bool {
    ["json", "javascript", "text", "xml"]
        .iter()
        .any(|t| mime_type.contains(t))
}

/// Associates protocol phase events by request id.
///
/// Request ids can be reused by the protocol across navigations, so a
/// repeated "sent" phase appends a new sequence-numbered entry rather
/// than overwriting the old one. Lookups always target the most recent
/// entry for an id that is still missing the phase being applied.
#[derive(Debug, Default)]
pub struct RequestCorrelator {
    entries: Vec<NetworkLogEntry>,
    next_sequence: u64,
}

impl RequestCorrelator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch one raw protocol event to the matching phase handler.
    pub fn apply(&mut self, event: ProtocolEvent) {
        match event {
            ProtocolEvent::RequestWillBeSent {
                request_id,
                timestamp,
                request,
            } => self.on_request_sent(&request_id, timestamp, request),
            ProtocolEvent::ResponseReceived {
                request_id,
                response,
            } => self.on_response_received(&request_id, response),
            ProtocolEvent::ResponseBody {
                request_id,
                body,
                base64_encoded,
            } => self.on_body_available(&request_id, &body, base64_encoded),
            ProtocolEvent::LoadingFinished {
                request_id,
                timestamp,
                encoded_data_length,
            } => self.on_loading_finished(&request_id, timestamp, encoded_data_length),
            ProtocolEvent::LoadingFailed {
                request_id,
                timestamp,
                error_text,
                canceled,
            } => self.on_loading_failed(&request_id, timestamp, &error_text, canceled),
        }
    }

    /// "Request sent" phase: always appends, never overwrites.
    pub fn on_request_sent(&mut self, request_id: &str, timestamp: i64, meta: RequestMeta) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.entries.push(NetworkLogEntry {
            request_id: request_id.to_string(),
            sequence,
            timestamp,
            url: meta.url,
            method: meta.method,
            request_headers: meta.headers,
            post_data: meta.post_data,
            response: None,
            loading_finished: None,
            loading_failed: None,
        });
    }

    /// "Response received" phase: attaches to the latest entry for the
    /// id that has no response yet. Unmatched events are discarded with
    /// a warning; they reference requests predating the recording
    /// window.
    pub fn on_response_received(&mut self, request_id: &str, meta: ResponseMeta) {
        let Some(entry) = self
            .entries
            .iter_mut()
            .rev()
            .find(|e| e.request_id == request_id && e.response.is_none())
        else {
            warn!(request_id, "discarding response for unknown request");
            return;
        };

        entry.response = Some(ResponseData {
            status: meta.status,
            status_text: meta.status_text,
            response_headers: meta.headers,
            mime_type: meta.mime_type,
            body: None,
            body_size: meta.body_size,
        });
    }

    /// Out-of-band body delivery. Only text-like MIME types are kept;
    /// decode or parse failure leaves the entry without a body, which
    /// is non-fatal.
    pub fn on_body_available(&mut self, request_id: &str, raw: &str, base64_encoded: bool) {
        let Some(response) = self
            .entries
            .iter_mut()
            .rev()
            .find(|e| e.request_id == request_id && e.response.is_some())
            .and_then(|e| e.response.as_mut())
        else {
            warn!(request_id, "discarding body for request without response");
            return;
        };

        if !wants_body(&response.mime_type) {
            debug!(
                request_id,
                mime_type = %response.mime_type,
                "skipping body for non-text mime type"
            );
            return;
        }

        let text = if base64_encoded {
            match base64::engine::general_purpose::STANDARD.decode(raw) {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(err) => {
                    warn!(request_id, %err, "failed to decode body, keeping entry without it");
                    return;
                }
            }
        } else {
            raw.to_string()
        };

        response.body = if response.mime_type.contains("json") {
            // Parse failure falls back to the raw string.
            Some(
                serde_json::from_str(&text)
                    .unwrap_or_else(|_| serde_json::Value::String(text.clone())),
            )
        } else {
            Some(serde_json::Value::String(text))
        };
    }

    /// Terminal "finished" phase. Idempotent: a duplicate arrival
    /// overwrites with the latest data. A conflicting "failed" already
    /// recorded wins and the event is dropped.
    pub fn on_loading_finished(&mut self, request_id: &str, timestamp: i64, encoded_data_length: u64) {
        let Some(entry) = self.latest_mut(request_id) else {
            warn!(request_id, "loadingFinished for unknown request");
            return;
        };
        if entry.loading_failed.is_some() {
            warn!(request_id, "loadingFinished after loadingFailed, keeping failure");
            return;
        }
        entry.loading_finished = Some(LoadingFinished {
            timestamp,
            encoded_data_length,
        });
    }

    /// Terminal "failed" phase, same idempotence rules as finished.
    pub fn on_loading_failed(
        &mut self,
        request_id: &str,
        timestamp: i64,
        error_text: &str,
        canceled: bool,
    ) {
        let Some(entry) = self.latest_mut(request_id) else {
            warn!(request_id, "loadingFailed for unknown request");
            return;
        };
        if entry.loading_finished.is_some() {
            warn!(request_id, "loadingFailed after loadingFinished, keeping completion");
            return;
        }
        entry.loading_failed = Some(LoadingFailed {
            timestamp,
            error_text: error_text.to_string(),
            canceled,
        });
    }

    pub fn entries(&self) -> &[NetworkLogEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<NetworkLogEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries (explicit clear-all).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn latest_mut(&mut self, request_id: &str) -> Option<&mut NetworkLogEntry> {
        self.entries
            .iter_mut()
            .rev()
            .find(|e| e.request_id == request_id)
    }
}
