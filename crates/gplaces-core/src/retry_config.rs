use std::time::Duration;

use crate::status::ApiStatus;

/// Default pause between attempts, in seconds.
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 5;

/// Which API statuses are retried, how many times, and how long to wait
/// between attempts.
///
/// The default retries nothing: every response is returned after its first
/// attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    pub statuses: Vec<ApiStatus>,
    /// Additional attempts after the first one.
    pub max_retries: u32,
    pub delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            statuses: Vec::new(),
            max_retries: 0,
            delay: Duration::from_secs(DEFAULT_RETRY_DELAY_SECS),
        }
    }
}

impl RetryConfig {
    /// Builds a policy that retries `statuses` up to `max_retries` times,
    /// waiting `delay` before each retry.
    #[must_use]
    pub fn new<I, S>(statuses: I, max_retries: u32, delay: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ApiStatus>,
    {
        let mut config = Self {
            statuses: Vec::new(),
            max_retries,
            delay,
        };
        for status in statuses {
            let status = status.into();
            if !config.statuses.contains(&status) {
                config.statuses.push(status);
            }
        }
        config
    }

    #[must_use]
    pub fn is_retryable(&self, status: &ApiStatus) -> bool {
        self.statuses.contains(status)
    }
}
