//! Bounded retry with growing backoff

use std::time::Duration;
use tracing::warn;

/// Run `op` up to `attempts` times, sleeping `base_delay * attempt`
/// between tries. Only errors the classifier accepts are retried; the
/// final error is returned as-is.
pub async fn retry_with_backoff<T, E, Op>(
    attempts: u32,
    base_delay: Duration,
    is_retryable: impl Fn(&E) -> bool,
    mut op: Op,
) -> Result<T, E>
where
    Op: AsyncFnMut() -> Result<T, E>,
    E: std::fmt::Display,
{
    let mut attempt: u32 = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < attempts && is_retryable(&err) => {
                let delay = base_delay * attempt;
                warn!(attempt, %err, ?delay, "attempt failed, backing off");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
