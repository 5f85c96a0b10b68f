//! Bounded retry with exponential backoff.
//!
//! Kept separate from the HTTP client so the policy — attempt cap,
//! retryable-error predicate, delay curve — is testable without network I/O.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// Attempt cap and base backoff delay. The wait after a failed attempt `n`
/// (0-based) is `base_delay * 2^n`: 1s, 2s, ... at the default base.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    /// 3 attempts total, waiting 1s then 2s between them.
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Backoff delay applied after the given failed attempt (0-based).
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.base_delay * (1u32 << attempt)
    }
}

/// Runs `op` until it succeeds, fails with a non-retryable error, or the
/// attempt cap is reached. The closure receives the 0-based attempt number.
/// On exhaustion the last error is returned.
pub async fn with_backoff<T, E, F, Fut, P>(
    policy: &RetryPolicy,
    is_retryable: P,
    mut op: F,
) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&E) -> bool,
    E: std::fmt::Display,
{
    let mut attempt = 0;
    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if attempt + 1 < policy.max_attempts.max(1) && is_retryable(&e) => {
                let delay = policy.backoff_delay(attempt);
                warn!(
                    "attempt {} failed ({e}), retrying after {}ms",
                    attempt + 1,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
