//! Bounded retry for the upstream service calls.
//!
//! Only transport-level trouble is worth a second attempt: timeouts,
//! refused connections and 5xx responses. Anything the service said on
//! purpose (an ERROR envelope, an unparseable body, a misconfigured base
//! URL) will come back unchanged, so those fail fast.

use std::future::Future;
use std::time::Duration;

use crate::error::PlatformError;
use crate::ClientConfig;

/// Per-client retry budget and pacing, derived from [`ClientConfig`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct RetryPolicy {
    max_retries: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    const DELAY_CEILING: Duration = Duration::from_secs(60);

    pub(crate) fn new(cfg: &ClientConfig) -> Self {
        Self {
            max_retries: cfg.max_retries,
            base_delay: Duration::from_millis(cfg.retry_backoff_base_ms),
        }
    }

    /// Runs `operation`, spending one extra attempt per transient failure
    /// until the budget is exhausted. Non-transient errors end the run on
    /// the spot.
    pub(crate) async fn run<T, F, Fut>(&self, mut operation: F) -> Result<T, PlatformError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, PlatformError>>,
    {
        let mut failures = 0u32;
        loop {
            let err = match operation().await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };
            failures += 1;
            if failures > self.max_retries || !is_transient(&err) {
                return Err(err);
            }
            let delay = jitter(self.backoff(failures));
            tracing::warn!(
                failures,
                budget = self.max_retries,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                error = %err,
                "transient upstream failure, waiting before next attempt"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Pre-jitter delay after the `failures`-th consecutive failure: the
    /// base delay doubled per failure, capped at one minute.
    fn backoff(&self, failures: u32) -> Duration {
        let doublings = failures.saturating_sub(1).min(10);
        self.base_delay
            .saturating_mul(1 << doublings)
            .min(Self::DELAY_CEILING)
    }
}

/// Spreads a delay into the 75%..125% band so clients that failed together
/// don't come back together.
fn jitter(delay: Duration) -> Duration {
    delay.mul_f64(rand::random::<f64>() * 0.5 + 0.75)
}

fn is_transient(err: &PlatformError) -> bool {
    match err {
        PlatformError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        PlatformError::Api { .. }
        | PlatformError::Deserialize { .. }
        | PlatformError::InvalidBaseUrl { .. } => false,
    }
}
