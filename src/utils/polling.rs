use std::future::Future;
use std::time::Duration;

use log::{debug, warn};

/// Polls until a condition is met or the attempts are used up.
///
/// The first check runs immediately; `interval` is slept between checks, never
/// after the last one. An error from `check` stops polling and is returned as
/// is, so an unreachable service is never reported as a timeout.
///
/// # Arguments
/// * `check` - Closure that returns `Ok(true)` when the condition is met, `Ok(false)` to continue polling
/// * `attempts` - Maximum number of checks; `0` is treated as `1`
/// * `interval` - Time to sleep between checks
/// * `operation_name` - Name of the operation for logging
///
/// # Returns
/// * `Ok(true)` - Condition was met within the attempts
/// * `Ok(false)` - Every attempt returned `Ok(false)`
pub async fn poll_until<F, Fut, E>(
    mut check: F,
    attempts: u32,
    interval: Duration,
    operation_name: &str,
) -> Result<bool, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    let attempts = attempts.max(1);

    for attempt in 1..=attempts {
        if check().await? {
            debug!("{} completed after {} attempt(s)", operation_name, attempt);
            return Ok(true);
        }

        if attempt < attempts {
            tokio::time::sleep(interval).await;
        }
    }

    warn!(
        "Gave up waiting for {} after {} attempt(s)",
        operation_name, attempts
    );
    Ok(false)
}
