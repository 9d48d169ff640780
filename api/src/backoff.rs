//! Exponential backoff for transient startup failures
//!
//! Used by the database lifecycle to retry the initial connection with
//! exponentially growing intervals, capped at a configured maximum.

use std::time::Duration;
use tracing::{error, info, warn};

/// Exponential backoff state tracker
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    base_interval_secs: u64,
    max_interval_secs: u64,
    current_attempt: u32,
    current_interval_secs: u64,
}

impl ExponentialBackoff {
    pub fn new(base_interval_secs: u64, max_interval_secs: u64) -> Self {
        ExponentialBackoff {
            base_interval_secs,
            max_interval_secs,
            current_attempt: 0,
            current_interval_secs: base_interval_secs,
        }
    }

    /// Record a failure and return the interval to wait before retrying
    pub fn on_failure(&mut self, error_message: &str) -> Duration {
        self.current_attempt += 1;

        // base * 2^(attempts - 1), capped at the maximum interval
        let next_interval = self
            .base_interval_secs
            .saturating_mul(2_u64.saturating_pow(self.current_attempt.saturating_sub(1)));
        self.current_interval_secs = next_interval.min(self.max_interval_secs);

        error!(
            attempt = self.current_attempt,
            interval_secs = self.current_interval_secs,
            error = error_message,
            "operation failed: backing off before retry"
        );

        Duration::from_secs(self.current_interval_secs)
    }

    /// Reset backoff after a successful operation
    pub fn on_success(&mut self) {
        if self.current_attempt > 0 {
            info!(
                attempts = self.current_attempt,
                "recovered after {} attempts, resetting backoff", self.current_attempt
            );
        }
        self.current_attempt = 0;
        self.current_interval_secs = self.base_interval_secs;
    }

    pub fn attempts(&self) -> u32 {
        self.current_attempt
    }

    pub fn interval_secs(&self) -> u64 {
        self.current_interval_secs
    }

    pub fn should_give_up(&self, max_total_attempts: u32) -> bool {
        self.current_attempt >= max_total_attempts
    }
}

/// Run an operation with exponential backoff, returning the last error
/// once the attempt budget is exhausted.
pub async fn execute_with_backoff<F, T, E, Fut>(
    mut backoff: ExponentialBackoff,
    max_attempts: u32,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    loop {
        match operation().await {
            Ok(result) => {
                backoff.on_success();
                return Ok(result);
            }
            Err(err) => {
                let wait_duration = backoff.on_failure(&err.to_string());

                if backoff.should_give_up(max_attempts) {
                    error!(
                        attempts = backoff.attempts(),
                        "giving up after {} attempts", backoff.attempts()
                    );
                    return Err(err);
                }

                warn!(
                    attempt = backoff.attempts(),
                    wait_secs = wait_duration.as_secs(),
                    "retrying after backoff"
                );

                tokio::time::sleep(wait_duration).await;
            }
        }
    }
}
