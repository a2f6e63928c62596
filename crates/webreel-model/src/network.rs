//! Network exchange records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One logical HTTP exchange, built up phase by phase.
///
/// Created when the request is sent and mutated in place as later
/// phases arrive for the same `request_id`. A request that never
/// completes keeps `response: None`; pending state is exported as-is,
/// never erased.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkLogEntry {
    /// Correlation key; may be reused by the protocol across navigations.
    pub request_id: String,
    /// Disambiguates entries that share a reused `request_id`.
    pub sequence: u64,
    pub timestamp: i64,
    pub url: String,
    pub method: String,
    #[serde(default)]
    pub request_headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ResponseData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading_finished: Option<LoadingFinished>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading_failed: Option<LoadingFailed>,
}

impl NetworkLogEntry {
    /// True while no terminal phase has arrived.
    pub fn is_pending(&self) -> bool {
        self.loading_finished.is_none() && self.loading_failed.is_none()
    }
}

/// Response phase of an exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseData {
    pub status: u16,
    pub status_text: String,
    #[serde(default)]
    pub response_headers: BTreeMap<String, String>,
    pub mime_type: String,
    /// Parsed JSON for json MIME types, raw string otherwise.
    /// Only fetched for text-like bodies; `None` when unavailable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    pub body_size: u64,
}

/// Terminal phase: the exchange completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingFinished {
    pub timestamp: i64,
    pub encoded_data_length: u64,
}

/// Terminal phase: the exchange failed or was canceled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingFailed {
    pub timestamp: i64,
    pub error_text: String,
    pub canceled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_entry() -> NetworkLogEntry {
        NetworkLogEntry {
            request_id: "req-1".to_string(),
            sequence: 0,
            timestamp: 1_700_000_000_000,
            url: "https://example.com/api".to_string(),
            method: "GET".to_string(),
            request_headers: BTreeMap::new(),
            post_data: None,
            response: None,
            loading_finished: None,
            loading_failed: None,
        }
    }

    #[test]
    fn test_pending_until_terminal() {
        let mut entry = pending_entry();
        assert!(entry.is_pending());

        entry.loading_finished = Some(LoadingFinished {
            timestamp: 1_700_000_000_100,
            encoded_data_length: 512,
        });
        assert!(!entry.is_pending());
    }

    #[test]
    fn test_serializes_camel_case_and_skips_absent_phases() {
        let entry = pending_entry();
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"requestId\":\"req-1\""));
        assert!(json.contains("\"requestHeaders\""));
        assert!(!json.contains("response"));
        assert!(!json.contains("loadingFinished"));
        assert!(!json.contains("loadingFailed"));
    }

    #[test]
    fn test_roundtrip_with_response() {
        let mut entry = pending_entry();
        entry.response = Some(ResponseData {
            status: 200,
            status_text: "OK".to_string(),
            response_headers: BTreeMap::from([(
                "content-type".to_string(),
                "application/json".to_string(),
            )]),
            mime_type: "application/json".to_string(),
            body: Some(serde_json::json!({"ok": true})),
            body_size: 11,
        });

        let json = serde_json::to_string(&entry).unwrap();
        let parsed: NetworkLogEntry = serde_json::from_str(&json).unwrap();
        let response = parsed.response.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, Some(serde_json::json!({"ok": true})));
    }
}
