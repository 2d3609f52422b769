use crate::config::RetryConfig;
use anyhow::Result;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// Run `f` until it succeeds or the attempt budget is spent, backing off exponentially
pub async fn run_with_retry<F, Fut, T>(mut f: F, retry_config: &RetryConfig) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let max_attempts = retry_config.max_retries.max(1);
    let mut delay = Duration::from_millis(retry_config.initial_delay_ms);
    let mut attempt = 1;

    loop {
        match f().await {
            Ok(result) => return Ok(result),
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(e) => {
                warn!("Attempt {} failed: {}, retrying in {:?}", attempt, e, delay);
                sleep(delay).await;

                // Exponential backoff
                delay = Duration::from_millis(
                    (delay.as_millis() as f64 * retry_config.backoff_multiplier)
                        .min(retry_config.max_delay_ms as f64) as u64,
                );
                attempt += 1;
            }
        }
    }
}
