//! HTTP client for the Google Places web API.
//!
//! Wraps `reqwest` with API key handling, per-exchange status retries, and
//! typed envelope deserialization. Every exchange checks the `"status"` field
//! and surfaces failing statuses as [`PlacesError::ApiStatus`].

mod details;
mod search;

use std::time::Duration;

use gplaces_core::{PlacesConfig, RetryConfig};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::PlacesError;
use crate::retry::retry_on_status;
use crate::types::StatusEnvelope;

/// Maximum number of pages followed for one search before giving up.
/// Google serves at most three pages per query; anything beyond that means
/// the cursor is cycling.
pub(crate) const MAX_PAGES: usize = 10;

/// Client for the Places API.
///
/// Built once from a [`PlacesConfig`] and shared by reference; it holds no
/// mutable state, so concurrent searches on one client are independent.
pub struct PlacesClient {
    client: Client,
    api_key: Option<String>,
    base_url: Url,
    page_token_delay: Duration,
    default_retry: RetryConfig,
}

impl std::fmt::Debug for PlacesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesClient")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("base_url", &self.base_url.as_str())
            .field("page_token_delay", &self.page_token_delay)
            .field("default_retry", &self.default_retry)
            .finish_non_exhaustive()
    }
}

impl PlacesClient {
    /// Creates a client from `config`.
    ///
    /// A missing API key is not an error here; requests fail with
    /// [`PlacesError::MissingApiKey`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `config.base_url` does not parse.
    pub fn new(config: &PlacesConfig) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .build()?;

        // Exactly one trailing slash, so that joining an endpoint path
        // appends to the base instead of replacing its last segment.
        let normalised = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            base_url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(PlacesError::InvalidBaseUrl {
                base_url: config.base_url.clone(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self {
            client,
            api_key: config
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_owned),
            base_url,
            page_token_delay: Duration::from_millis(config.page_token_delay_ms),
            default_retry: config.retry.clone(),
        })
    }

    /// The request's own retry policy, or the client default.
    fn retry_for<'a>(&'a self, requested: Option<&'a RetryConfig>) -> &'a RetryConfig {
        requested.unwrap_or(&self.default_retry)
    }

    /// Builds `<base>/<endpoint>/json?key=...&<params>` with every value
    /// percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::MissingApiKey`] when no key is configured.
    fn endpoint_url(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
    ) -> Result<Url, PlacesError> {
        let api_key = self.api_key.as_deref().ok_or(PlacesError::MissingApiKey)?;
        let mut url = self
            .base_url
            .join(&format!("{endpoint}/json"))
            .map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", api_key);
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// One logical exchange: send, retry listed statuses, then reject any
    /// remaining non-success status.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::MissingApiKey`] before anything is sent.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the body is not the expected envelope.
    /// - [`PlacesError::ApiStatus`] for a failing status after retries.
    async fn exchange<T>(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
        retry: &RetryConfig,
    ) -> Result<T, PlacesError>
    where
        T: DeserializeOwned + StatusEnvelope,
    {
        let url = self.endpoint_url(endpoint, params)?;
        let url = &url;
        let response = retry_on_status(retry, move || self.request_json::<T>(url)).await?;
        Self::check_status(response)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body.
    async fn request_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, PlacesError> {
        tracing::debug!(path = url.path(), "sending Places API request");
        // The full URL carries the API key; keep it out of every error.
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let response = response
            .error_for_status()
            .map_err(reqwest::Error::without_url)?;
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: url.path().to_owned(),
            source: e,
        })
    }

    fn check_status<T: StatusEnvelope>(response: T) -> Result<T, PlacesError> {
        if response.status().is_success() {
            return Ok(response);
        }
        Err(PlacesError::ApiStatus {
            status: response.status().clone(),
            message: response.error_message().map(str::to_owned),
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
