//! Retry policies and the bounded-retry wrapper.

use std::future::Future;
use std::time::Duration;

/// Retry policy for a single request.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// No retries — used for mutating POST endpoints: a transfer or order
    /// must never be resubmitted blindly.
    #[default]
    None,
    /// Bounded retry with exponential backoff. Default for read endpoints.
    Idempotent,
    /// User-provided retry configuration.
    Custom(RetryConfig),
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total number of attempts, including the initial one.
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Cap on the delay between retries.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Whether to add jitter to the delay.
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(2),
            max_delay: Duration::from_secs(10),
            backoff_factor: 2.0,
            jitter: false,
        }
    }
}

impl RetryConfig {
    /// Delay before retry number `retry` (0-indexed).
    pub fn delay_for_attempt(&self, retry: u32) -> Duration {
        let base = self.initial_delay.as_millis() as f64 * self.backoff_factor.powi(retry as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }
}

/// Run `op` with bounded retries.
///
/// `retryable` decides whether a given failure is worth another attempt —
/// transport failures are, application errors are not. Every failed attempt
/// is logged with its cause before the wait; when attempts are exhausted the
/// final failure is returned as-is.
pub async fn with_retry<T, E, F, Fut>(
    config: &RetryConfig,
    label: &str,
    retryable: impl Fn(&E) -> bool,
    mut op: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                if attempt >= max_attempts || !retryable(&e) {
                    return Err(e);
                }
                let delay = config.delay_for_attempt(attempt - 1);
                tracing::warn!(
                    attempt,
                    max = max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "{} failed, retrying",
                    label
                );
                futures_timer::Delay::new(delay).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn default_policy_is_none() {
        assert!(matches!(RetryPolicy::default(), RetryPolicy::None));
    }

    #[test]
    fn delays_double_and_cap() {
        let config = RetryConfig::default();
        assert_eq!(config.delay_for_attempt(0).as_secs(), 2);
        assert_eq!(config.delay_for_attempt(1).as_secs(), 4);
        assert_eq!(config.delay_for_attempt(2).as_secs(), 8);
        assert_eq!(config.delay_for_attempt(3).as_secs(), 10);
        assert_eq!(config.delay_for_attempt(9).as_secs(), 10);
    }

    #[tokio::test]
    async fn returns_success_after_two_failures() {
        let config = RetryConfig {
            max_attempts: 3,
            initial_delay: Duration::from_millis(5),
            max_delay: Duration::from_millis(20),
            backoff_factor: 2.0,
            jitter: false,
        };
        let calls = AtomicU32::new(0);
        let result: Result<u32, String> = with_retry(&config, "probe", |_| true, || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n < 3 {
                    Err(format!("boom {}", n))
                } else {
                    Ok(n)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn exhaustion_returns_final_failure() {
        let config = RetryConfig {
            max_attempts: 3,
            initial_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(4),
            backoff_factor: 2.0,
            jitter: false,
        };
        let calls = AtomicU32::new(0);
        let result: Result<(), String> = with_retry(&config, "probe", |_| true, || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Err(format!("boom {}", n)) }
        })
        .await;
        assert_eq!(result.unwrap_err(), "boom 3");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn non_retryable_failure_short_circuits() {
        let config = RetryConfig::default();
        let calls = AtomicU32::new(0);
        let result: Result<(), String> = with_retry(&config, "probe", |_| false, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err("fatal".to_string()) }
        })
        .await;
        assert_eq!(result.unwrap_err(), "fatal");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
