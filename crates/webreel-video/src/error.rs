//! Video error taxonomy

use crate::recorder::TargetId;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum VideoError {
    /// Recording is only allowed on network-fetchable pages.
    #[error("recording refused for restricted url: {url}")]
    RestrictedScheme { url: String },

    /// The platform has not released a previous capture handle yet.
    #[error("capture handle busy for target {0}")]
    CaptureBusy(TargetId),

    /// The helper context never acknowledged the start command.
    #[error("helper did not acknowledge start within {0:?}")]
    StartTimeout(Duration),

    /// The helper context never delivered the finished artifact.
    #[error("helper did not deliver artifact within {0:?}")]
    StopTimeout(Duration),

    #[error("helper context unreachable: {0}")]
    HelperUnreachable(String),

    #[error("blob store failure: {0}")]
    Storage(String),
}

impl VideoError {
    /// Whether a retry with backoff can reasonably help.
    ///
    /// Only a busy capture handle qualifies: the platform releases the
    /// handle eventually. Handshake timeouts are retried separately,
    /// bounded to the handshake itself.
    pub fn is_retryable(&self) -> bool {
        matches!(self, VideoError::CaptureBusy(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_busy_is_retryable() {
        assert!(VideoError::CaptureBusy(TargetId(1)).is_retryable());
        assert!(!VideoError::RestrictedScheme {
            url: "chrome://settings".to_string()
        }
        .is_retryable());
        assert!(!VideoError::StartTimeout(Duration::from_secs(5)).is_retryable());
    }
}
