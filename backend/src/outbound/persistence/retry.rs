//! Bounded retry for transient database failures.
//!
//! Only failures the error type classifies as transient are retried. The
//! delay before attempt `n + 1` is `initial_backoff * 2^(n - 1)`, capped at
//! `max_backoff`, plus up to a quarter of that again as random jitter.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tracing::warn;

use crate::domain::ports::{EmployeeRepositoryError, SalaryRepositoryError};

/// Errors that can tell whether a retry could succeed.
pub trait Transient {
    /// Whether repeating the operation might succeed.
    fn is_transient(&self) -> bool;
}

impl Transient for EmployeeRepositoryError {
    fn is_transient(&self) -> bool {
        EmployeeRepositoryError::is_transient(self)
    }
}

impl Transient for SalaryRepositoryError {
    fn is_transient(&self) -> bool {
        SalaryRepositoryError::is_transient(self)
    }
}

/// Retry limits for repository calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    initial_backoff: Duration,
    max_backoff: Duration,
}

impl RetryPolicy {
    /// Default number of attempts, including the first.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    /// Default delay before the second attempt.
    pub const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_millis(100);
    /// Default ceiling on the un-jittered delay.
    pub const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(2);

    /// Build a policy. `max_attempts` below one is treated as one.
    #[must_use]
    pub fn new(max_attempts: u32, initial_backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_backoff,
            max_backoff: Self::DEFAULT_MAX_BACKOFF.max(initial_backoff),
        }
    }

    /// Policy that never retries.
    #[must_use]
    pub fn no_retry() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Override the delay ceiling.
    #[must_use]
    pub fn with_max_backoff(mut self, max_backoff: Duration) -> Self {
        self.max_backoff = max_backoff;
        self
    }

    /// Attempts including the first.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Un-jittered delay after failed attempt `attempt` (1-based).
    #[must_use]
    pub fn base_delay(&self, attempt: u32) -> Duration {
        let exponent = 2_u32.saturating_pow(attempt.saturating_sub(1));
        let base_ms = u64::try_from(self.initial_backoff.as_millis()).unwrap_or(u64::MAX);
        let max_ms = u64::try_from(self.max_backoff.as_millis()).unwrap_or(u64::MAX);
        Duration::from_millis(base_ms.saturating_mul(u64::from(exponent)).min(max_ms))
    }

    fn jittered_delay(&self, attempt: u32) -> Duration {
        let base = self.base_delay(attempt);
        let base_ms = u64::try_from(base.as_millis()).unwrap_or(u64::MAX);
        let max_extra = base_ms / 4;
        if max_extra == 0 {
            return base;
        }
        let extra = rand::thread_rng().gen_range(0..=max_extra);
        Duration::from_millis(base_ms.saturating_add(extra))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_INITIAL_BACKOFF)
    }
}

/// Run `op` until it succeeds, fails permanently, or exhausts the policy.
///
/// The last error is returned unchanged once attempts run out.
pub async fn retry_transient<T, E, F, Fut>(
    policy: &RetryPolicy,
    operation: &'static str,
    mut op: F,
) -> Result<T, E>
where
    E: Transient + fmt::Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_attempts = policy.max_attempts();
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_transient() && attempt < max_attempts => {
                let delay = policy.jittered_delay(attempt);
                warn!(
                    operation,
                    attempt,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %err,
                    "database operation failed; retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
