//! Recording lifecycle state machine

use crate::error::VideoError;
use crate::recorder::{BlobStore, CaptureSource, ScreenRecorder, TargetId};
use crate::retry::retry_with_backoff;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};
use webreel_model::VideoArtifact;

/// Where the coordinator currently is in
/// `Idle → Starting → Recording → Stopping → Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderState {
    Idle,
    Starting,
    Recording(TargetId),
    Stopping,
}

/// Tunables for the start/stop handshakes.
#[derive(Debug, Clone)]
pub struct VideoConfig {
    /// Blob store key the artifact is persisted under.
    pub blob_id: String,
    /// Wait after stopping an overlapping recording, long enough for
    /// the platform to release the capture handle.
    pub cooldown: Duration,
    pub acquire_attempts: u32,
    pub acquire_backoff: Duration,
    /// Ceiling on one start-acknowledgement wait.
    pub ack_timeout: Duration,
    pub ack_attempts: u32,
    pub ack_backoff: Duration,
    /// Ceiling on the whole stop/finalize wait. After this the
    /// recording is treated as lost.
    pub stop_ceiling: Duration,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            blob_id: "session-video".to_string(),
            cooldown: Duration::from_millis(1500),
            acquire_attempts: 3,
            acquire_backoff: Duration::from_secs(1),
            ack_timeout: Duration::from_secs(5),
            ack_attempts: 3,
            ack_backoff: Duration::from_millis(500),
            stop_ceiling: Duration::from_secs(30),
        }
    }
}

/// Orchestrates one recording at a time against the helper context.
///
/// Owns the only mutable recording state in the process; every
/// transition happens through `&mut self`, so two recordings can never
/// run concurrently against the same target.
pub struct VideoCoordinator<R, C, B> {
    recorder: R,
    capture: C,
    blobs: B,
    config: VideoConfig,
    state: RecorderState,
}

impl<R, C, B> VideoCoordinator<R, C, B>
where
    R: ScreenRecorder,
    C: CaptureSource,
    B: BlobStore,
{
    pub fn new(recorder: R, capture: C, blobs: B, config: VideoConfig) -> Self {
        Self {
            recorder,
            capture,
            blobs,
            config,
            state: RecorderState::Idle,
        }
    }

    pub fn state(&self) -> RecorderState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        matches!(self.state, RecorderState::Recording(_))
    }

    /// Start recording `target`.
    ///
    /// An active recording is first driven through `Stopping → Idle`
    /// and followed by a cooldown, because the platform forbids two
    /// concurrent captures of one target; the caller never sees an
    /// "already recording" error. Restricted URL schemes are refused
    /// outright, with no retry.
    pub async fn start(&mut self, target: TargetId, url: &str) -> Result<(), VideoError> {
        if !scheme_is_recordable(url) {
            return Err(VideoError::RestrictedScheme {
                url: url.to_string(),
            });
        }

        if self.state != RecorderState::Idle {
            info!(%target, "recording already active, stopping it before restart");
            if let Err(err) = self.stop().await {
                warn!(%err, "previous recording lost during overlap cleanup");
            }
            tokio::time::sleep(self.config.cooldown).await;
        }

        self.state = RecorderState::Starting;

        let attempts = self.config.acquire_attempts;
        let backoff = self.config.acquire_backoff;
        let capture = &mut self.capture;
        let stream = match retry_with_backoff(attempts, backoff, VideoError::is_retryable, async || {
            capture.acquire(target).await
        })
        .await
        {
            Ok(stream) => stream,
            Err(err) => {
                self.state = RecorderState::Idle;
                return Err(err);
            }
        };

        let ack_attempts = self.config.ack_attempts;
        let ack_backoff = self.config.ack_backoff;
        let ack_timeout = self.config.ack_timeout;
        let recorder = &mut self.recorder;
        let ack = retry_with_backoff(
            ack_attempts,
            ack_backoff,
            |err: &VideoError| {
                matches!(
                    err,
                    VideoError::StartTimeout(_) | VideoError::HelperUnreachable(_)
                )
            },
            async || match timeout(ack_timeout, recorder.start(stream.clone())).await {
                Ok(result) => result,
                Err(_) => Err(VideoError::StartTimeout(ack_timeout)),
            },
        )
        .await;

        match ack {
            Ok(()) => {
                info!(%target, "recording started");
                self.state = RecorderState::Recording(target);
                Ok(())
            }
            Err(err) => {
                error!(%target, %err, "helper never acknowledged start");
                self.state = RecorderState::Idle;
                Err(err)
            }
        }
    }

    /// Stop the active recording and persist its artifact.
    ///
    /// Safe to call when nothing is active (`Ok(None)`). Never blocks
    /// past the stop ceiling: a helper that does not report completion
    /// loses the recording, loudly, and the state still returns to
    /// `Idle`.
    pub async fn stop(&mut self) -> Result<Option<VideoArtifact>, VideoError> {
        if self.state == RecorderState::Idle {
            debug!("stop requested with no active recording");
            return Ok(None);
        }

        self.state = RecorderState::Stopping;
        let result = timeout(self.config.stop_ceiling, self.recorder.stop()).await;
        self.state = RecorderState::Idle;

        let video = match result {
            Err(_) => {
                error!(
                    ceiling = ?self.config.stop_ceiling,
                    "helper never delivered the artifact, recording lost"
                );
                return Err(VideoError::StopTimeout(self.config.stop_ceiling));
            }
            Ok(Err(err)) => {
                error!(%err, "helper failed to finalize recording");
                return Err(err);
            }
            Ok(Ok(video)) => video,
        };

        let artifact = VideoArtifact::new(video.data, video.mime_type, video.start_timestamp);

        // Supersede any artifact from a previous recording.
        if let Err(err) = self.blobs.delete(&self.config.blob_id) {
            warn!(%err, "failed to delete previous artifact");
        }
        if let Err(err) = self.blobs.put(&self.config.blob_id, &artifact.data) {
            // Non-fatal: the in-memory artifact is still exportable.
            error!(%err, "failed to persist artifact to blob store");
        }

        info!(size = artifact.size, mime = %artifact.mime_type, "recording finished");
        Ok(Some(artifact))
    }
}

/// Recording is restricted to network-fetchable pages; internal and
/// privileged schemes are refused.
pub fn scheme_is_recordable(url: &str) -> bool {
    matches!(url.split(':').next(), Some("http" | "https"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::{RecordedVideo, StreamHandle};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecorderLog {
        starts: u32,
        stops: u32,
    }

    struct MockRecorder {
        log: Arc<Mutex<RecorderLog>>,
        ack_failures: u32,
        never_ack: bool,
        stop_hangs: bool,
        payload: Vec<u8>,
    }

    impl MockRecorder {
        fn new(log: Arc<Mutex<RecorderLog>>) -> Self {
            Self {
                log,
                ack_failures: 0,
                never_ack: false,
                stop_hangs: false,
                payload: vec![0xAB; 64],
            }
        }
    }

    impl ScreenRecorder for MockRecorder {
        async fn start(&mut self, _stream: StreamHandle) -> Result<(), VideoError> {
            self.log.lock().unwrap().starts += 1;
            if self.never_ack {
                std::future::pending::<()>().await;
            }
            if self.ack_failures > 0 {
                self.ack_failures -= 1;
                return Err(VideoError::HelperUnreachable("no ack".to_string()));
            }
            Ok(())
        }

        async fn stop(&mut self) -> Result<RecordedVideo, VideoError> {
            self.log.lock().unwrap().stops += 1;
            if self.stop_hangs {
                std::future::pending::<()>().await;
            }
            Ok(RecordedVideo {
                data: self.payload.clone(),
                mime_type: "video/webm;codecs=vp9".to_string(),
                start_timestamp: 42,
            })
        }
    }

    struct MockCapture {
        busy_failures: u32,
        calls: Arc<Mutex<u32>>,
    }

    impl CaptureSource for MockCapture {
        async fn acquire(&mut self, target: TargetId) -> Result<StreamHandle, VideoError> {
            *self.calls.lock().unwrap() += 1;
            if self.busy_failures > 0 {
                self.busy_failures -= 1;
                return Err(VideoError::CaptureBusy(target));
            }
            Ok(StreamHandle(format!("stream-{target}")))
        }
    }

    #[derive(Clone, Default)]
    struct MemoryBlobStore {
        blobs: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl BlobStore for MemoryBlobStore {
        fn put(&mut self, id: &str, bytes: &[u8]) -> Result<(), VideoError> {
            self.blobs
                .lock()
                .unwrap()
                .insert(id.to_string(), bytes.to_vec());
            Ok(())
        }

        fn get(&self, id: &str) -> Result<Option<Vec<u8>>, VideoError> {
            Ok(self.blobs.lock().unwrap().get(id).cloned())
        }

        fn delete(&mut self, id: &str) -> Result<(), VideoError> {
            self.blobs.lock().unwrap().remove(id);
            Ok(())
        }
    }

    struct Harness {
        log: Arc<Mutex<RecorderLog>>,
        acquire_calls: Arc<Mutex<u32>>,
        blobs: MemoryBlobStore,
    }

    fn harness(
        configure: impl FnOnce(&mut MockRecorder, &mut MockCapture),
    ) -> (
        VideoCoordinator<MockRecorder, MockCapture, MemoryBlobStore>,
        Harness,
    ) {
        let log = Arc::new(Mutex::new(RecorderLog::default()));
        let acquire_calls = Arc::new(Mutex::new(0));
        let blobs = MemoryBlobStore::default();

        let mut recorder = MockRecorder::new(log.clone());
        let mut capture = MockCapture {
            busy_failures: 0,
            calls: acquire_calls.clone(),
        };
        configure(&mut recorder, &mut capture);

        let coordinator =
            VideoCoordinator::new(recorder, capture, blobs.clone(), VideoConfig::default());
        (
            coordinator,
            Harness {
                log,
                acquire_calls,
                blobs,
            },
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_restricted_scheme_refused() {
        let (mut coordinator, h) = harness(|_, _| {});
        let err = coordinator
            .start(TargetId(1), "chrome://settings")
            .await
            .unwrap_err();

        assert!(matches!(err, VideoError::RestrictedScheme { .. }));
        assert_eq!(coordinator.state(), RecorderState::Idle);
        assert_eq!(*h.acquire_calls.lock().unwrap(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_happy_path() {
        let (mut coordinator, h) = harness(|_, _| {});
        coordinator
            .start(TargetId(1), "https://example.com")
            .await
            .unwrap();

        assert_eq!(coordinator.state(), RecorderState::Recording(TargetId(1)));
        assert_eq!(h.log.lock().unwrap().starts, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_busy_capture_retried_then_succeeds() {
        let (mut coordinator, h) = harness(|_, capture| capture.busy_failures = 2);
        coordinator
            .start(TargetId(1), "https://example.com")
            .await
            .unwrap();

        assert!(coordinator.is_recording());
        assert_eq!(*h.acquire_calls.lock().unwrap(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_busy_capture_exhausts_retries() {
        let (mut coordinator, h) = harness(|_, capture| capture.busy_failures = 10);
        let err = coordinator
            .start(TargetId(1), "https://example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, VideoError::CaptureBusy(_)));
        assert_eq!(coordinator.state(), RecorderState::Idle);
        assert_eq!(*h.acquire_calls.lock().unwrap(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ack_timeout_falls_back_to_idle() {
        let (mut coordinator, h) = harness(|recorder, _| recorder.never_ack = true);
        let err = coordinator
            .start(TargetId(1), "https://example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, VideoError::StartTimeout(_)));
        assert_eq!(coordinator.state(), RecorderState::Idle);
        // Handshake retried up to the bound, never indefinitely.
        assert_eq!(h.log.lock().unwrap().starts, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_flaky_ack_retried_within_bound() {
        let (mut coordinator, h) = harness(|recorder, _| recorder.ack_failures = 2);
        coordinator
            .start(TargetId(1), "https://example.com")
            .await
            .unwrap();

        assert!(coordinator.is_recording());
        assert_eq!(h.log.lock().unwrap().starts, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_without_recording_is_noop() {
        let (mut coordinator, h) = harness(|_, _| {});
        let artifact = coordinator.stop().await.unwrap();

        assert!(artifact.is_none());
        assert_eq!(h.log.lock().unwrap().stops, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_persists_artifact() {
        let (mut coordinator, h) = harness(|_, _| {});
        coordinator
            .start(TargetId(1), "https://example.com")
            .await
            .unwrap();
        let artifact = coordinator.stop().await.unwrap().unwrap();

        assert_eq!(artifact.mime_type, "video/webm;codecs=vp9");
        assert_eq!(artifact.start_timestamp, 42);
        assert_eq!(artifact.size, 64);
        assert_eq!(coordinator.state(), RecorderState::Idle);

        let stored = h.blobs.get("session-video").unwrap().unwrap();
        assert_eq!(stored.len(), 64);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_ceiling_treats_recording_as_lost() {
        let (mut coordinator, _h) = harness(|recorder, _| recorder.stop_hangs = true);
        coordinator
            .start(TargetId(1), "https://example.com")
            .await
            .unwrap();
        let err = coordinator.stop().await.unwrap_err();

        assert!(matches!(err, VideoError::StopTimeout(_)));
        assert_eq!(coordinator.state(), RecorderState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_start_stops_then_restarts() {
        // No "already recording" error; the old recording
        // is stopped, the handle released, and the new start succeeds.
        let (mut coordinator, h) = harness(|_, _| {});
        coordinator
            .start(TargetId(1), "https://example.com/a")
            .await
            .unwrap();

        let before = tokio::time::Instant::now();
        coordinator
            .start(TargetId(1), "https://example.com/b")
            .await
            .unwrap();

        assert!(coordinator.is_recording());
        let log = h.log.lock().unwrap();
        assert_eq!(log.starts, 2);
        assert_eq!(log.stops, 1);
        // Cooldown honored so the platform can release the handle.
        assert!(before.elapsed() >= VideoConfig::default().cooldown);
    }
}
