//! Status-driven retries for a single Places API exchange.
//!
//! [`retry_on_status`] re-issues a request while the provider answers with a
//! status listed in the [`RetryConfig`]. Only the API `status` field drives
//! retries: transport errors from the operation are returned immediately.
//! The attempt counter covers one exchange, so every page of a paginated
//! search gets its own budget.

use std::future::Future;

use gplaces_core::RetryConfig;

use crate::error::PlacesError;
use crate::types::StatusEnvelope;

/// Runs `operation` until it returns a non-retryable status or the retry
/// budget is spent, sleeping `config.delay` before each retry.
///
/// The last response is returned as-is, whatever its status; turning a
/// failing status into an error is the caller's job.
///
/// With `max_retries = 2` the operation runs at most 3 times.
pub(crate) async fn retry_on_status<T, F, Fut>(
    config: &RetryConfig,
    mut operation: F,
) -> Result<T, PlacesError>
where
    T: StatusEnvelope,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, PlacesError>>,
{
    let mut attempt = 0u32;
    loop {
        let response = operation().await?;
        if !config.is_retryable(response.status()) || attempt >= config.max_retries {
            return Ok(response);
        }
        attempt += 1;
        tracing::warn!(
            attempt,
            max_retries = config.max_retries,
            delay_ms = u64::try_from(config.delay.as_millis()).unwrap_or(u64::MAX),
            status = %response.status(),
            "Places API returned retryable status, retrying"
        );
        if !config.delay.is_zero() {
            tokio::time::sleep(config.delay).await;
        }
    }
}
