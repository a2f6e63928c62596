//! Raw protocol events as delivered by the capture source

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One phase event from the network protocol stream.
///
/// Phases for a given request id arrive in logical order (sent before
/// response before a terminal); no ordering is assumed across ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ProtocolEvent {
    RequestWillBeSent {
        request_id: String,
        timestamp: i64,
        request: RequestMeta,
    },
    ResponseReceived {
        request_id: String,
        response: ResponseMeta,
    },
    /// Out-of-band body delivery for text-like responses.
    ResponseBody {
        request_id: String,
        body: String,
        #[serde(default)]
        base64_encoded: bool,
    },
    LoadingFinished {
        request_id: String,
        timestamp: i64,
        encoded_data_length: u64,
    },
    LoadingFailed {
        request_id: String,
        timestamp: i64,
        error_text: String,
        #[serde(default)]
        canceled: bool,
    },
}

/// Payload of the "request sent" phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMeta {
    pub url: String,
    pub method: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_data: Option<String>,
}

/// Payload of the "response received" phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    pub status: u16,
    #[serde(default)]
    pub status_text: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub body_size: u64,
}
