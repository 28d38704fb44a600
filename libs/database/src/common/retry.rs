use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Retry policy for connecting to the database at startup
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,

    /// Delay before the first retry in milliseconds
    pub initial_delay_ms: u64,

    /// Upper bound for any single delay in milliseconds
    pub max_delay_ms: u64,

    /// Growth factor applied after each failed attempt
    pub backoff_multiplier: f64,

    /// Randomize each delay between 50% and 100% of its nominal value
    pub use_jitter: bool,
}

impl RetryConfig {
    /// Defaults: 5 retries, 200ms initial delay, 5s cap, x2 backoff, jitter on.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_max_delay(mut self, delay_ms: u64) -> Self {
        self.max_delay_ms = delay_ms;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }

    /// Nominal delay before retry number `retry` (1-based), without jitter.
    pub fn nominal_delay(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1) as i32;
        let millis = self.initial_delay_ms as f64 * self.backoff_multiplier.powi(exponent);
        Duration::from_millis((millis as u64).min(self.max_delay_ms))
    }

    fn delay(&self, retry: u32) -> Duration {
        let nominal = self.nominal_delay(retry);
        if self.use_jitter {
            apply_jitter(nominal)
        } else {
            nominal
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_delay_ms: 200,
            max_delay_ms: 5_000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

/// Run `operation` until it succeeds or the retry budget is spent.
///
/// The last error is returned unchanged.
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    debug!(retries = attempt, "Operation succeeded after retrying");
                }
                return Ok(value);
            }
            Err(e) if attempt >= config.max_retries => {
                warn!(attempts = attempt + 1, error = %e, "Operation failed, giving up");
                return Err(e);
            }
            Err(e) => {
                attempt += 1;
                let delay = config.delay(attempt);
                debug!(
                    attempt,
                    max_retries = config.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Operation failed, retrying"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// [`retry_with_backoff`] with [`RetryConfig::default`].
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}

fn apply_jitter(delay: Duration) -> Duration {
    // factor in [0.5, 1.0)
    let factor = 0.5 + rand::random::<f64>() * 0.5;
    delay.mul_f64(factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_retry_success_first_attempt() {
        let counter = Arc::new(AtomicU32::new(0));

        let result = retry(|| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, String>("connected")
            }
        })
        .await;

        assert_eq!(result.unwrap(), "connected");
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retry_success_after_failures() {
        let counter = Arc::new(AtomicU32::new(0));
        let config = RetryConfig::new().with_initial_delay(5).without_jitter();

        let result = retry_with_backoff(
            || {
                let counter = counter.clone();
                async move {
                    let attempt = counter.fetch_add(1, Ordering::SeqCst);
                    if attempt < 2 {
                        Err(format!("attempt {} refused", attempt + 1))
                    } else {
                        Ok(attempt)
                    }
                }
            },
            config,
        )
        .await;

        assert_eq!(result.unwrap(), 2);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_returns_last_error_when_exhausted() {
        let counter = Arc::new(AtomicU32::new(0));
        let config = RetryConfig::new()
            .with_max_retries(2)
            .with_initial_delay(5)
            .without_jitter();

        let result = retry_with_backoff(
            || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>("connection refused")
                }
            },
            config,
        )
        .await;

        assert_eq!(result.unwrap_err(), "connection refused");
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_nominal_delay_grows_and_caps() {
        let config = RetryConfig::new()
            .with_initial_delay(100)
            .with_max_delay(350)
            .without_jitter();

        assert_eq!(config.nominal_delay(1), Duration::from_millis(100));
        assert_eq!(config.nominal_delay(2), Duration::from_millis(200));
        assert_eq!(config.nominal_delay(3), Duration::from_millis(350));
        assert_eq!(config.nominal_delay(10), Duration::from_millis(350));
    }

    #[test]
    fn test_apply_jitter_stays_in_range() {
        let delay = Duration::from_millis(1000);
        for _ in 0..20 {
            let jittered = apply_jitter(delay);
            assert!(jittered >= Duration::from_millis(500));
            assert!(jittered <= Duration::from_millis(1010));
        }
    }
}
