use std::future::Future;
use std::time::Duration;

use tracing::warn;

use super::{Result, TodoistError};

/// Retry schedule for one logical API call.
///
/// The delay doubles after each failed attempt, so the default policy waits
/// 1s then 2s before the third and final try.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub initial_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            initial_backoff: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Default attempt count with no sleeping between attempts. Used by the
    /// integration suite to exercise the schedule without real delays.
    pub fn fast() -> Self {
        Self {
            attempts: 3,
            initial_backoff: Duration::ZERO,
        }
    }
}

/// Run `op` until it produces a non-retryable outcome or the policy is
/// exhausted.
///
/// Retryable means a transport-level error or a 5xx status. Anything else,
/// including 4xx responses, is returned to the caller as-is on the first
/// attempt; status mapping is the caller's job. Exhaustion yields
/// [`TodoistError::Transport`] carrying the last failure seen.
pub async fn with_retry<F, Fut>(
    policy: &RetryPolicy,
    endpoint: &str,
    mut op: F,
) -> Result<reqwest::Response>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<reqwest::Response, reqwest::Error>>,
{
    let attempts = policy.attempts.max(1);
    let mut backoff = policy.initial_backoff;
    let mut last_error = String::new();

    for attempt in 1..=attempts {
        match op().await {
            Ok(response) if response.status().is_server_error() => {
                last_error = format!("HTTP {}", response.status().as_u16());
            }
            Ok(response) => return Ok(response),
            Err(err) => {
                last_error = err.to_string();
            }
        }
        if attempt < attempts {
            warn!(
                "{}: attempt {}/{} failed ({}), retrying in {:?}",
                endpoint, attempt, attempts, last_error, backoff
            );
            tokio::time::sleep(backoff).await;
            backoff *= 2;
        }
    }

    Err(TodoistError::Transport {
        endpoint: endpoint.to_string(),
        detail: format!("{last_error} (after {attempts} attempts)"),
    })
}
