//! Request correlation
//!
//! Stitches the multi-phase network protocol stream
//! (sent → response → body → finished/failed) into whole
//! `NetworkLogEntry` records keyed by request id.

pub mod correlator;
pub mod events;

pub use correlator::{wants_body, RequestCorrelator};
pub use events::{ProtocolEvent, RequestMeta, ResponseMeta};
