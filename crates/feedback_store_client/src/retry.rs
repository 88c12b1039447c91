use rand::{RngExt, rng};
use std::time::Duration;

/// A simple retry policy with exponential backoff and jitter.
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(100),
        }
    }
}

impl RetryPolicy {
    /// Retry `f` while it fails with an error `is_transient` accepts.
    /// A non-transient error is returned immediately.
    pub async fn retry_async<F, Fut, T, E, P>(&self, mut f: F, mut is_transient: P) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, E>>,
        P: FnMut(&E) -> bool,
    {
        let mut attempt = 0u32;
        loop {
            match f().await {
                Ok(v) => return Ok(v),
                Err(e) => {
                    attempt += 1;
                    if attempt > self.max_retries || !is_transient(&e) {
                        return Err(e);
                    }
                    tracing::debug!(attempt, "retrying after transient failure");
                    // exponential backoff with jitter
                    let max_delay = self.base_delay * (1u32 << attempt);
                    let jitter = {
                        let mut rng = rng();
                        rng.random_range(0..max_delay.as_millis() as u64)
                    };
                    let delay = Duration::from_millis(jitter.min(max_delay.as_millis() as u64));
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
