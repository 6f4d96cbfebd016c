//! Places API response envelopes.
//!
//! Every response carries a top-level `status` and, on failure, an optional
//! `error_message`. Individual results are kept as raw JSON here and mapped
//! into records by [`crate::normalize`], so schema drift in a single result
//! never fails the whole page.

use gplaces_core::ApiStatus;
use serde::Deserialize;

/// Access to the envelope fields the retry policy and status check need.
pub trait StatusEnvelope {
    fn status(&self) -> &ApiStatus;
    fn error_message(&self) -> Option<&str>;
}

/// One page from `nearbysearch`, `textsearch`, or `autocomplete`.
#[derive(Debug, Deserialize)]
pub struct PageResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub error_message: Option<String>,
    /// `results` for searches, `predictions` for autocomplete.
    #[serde(default, alias = "predictions")]
    pub results: Vec<serde_json::Value>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl PageResponse {
    /// The continuation cursor, if the provider sent a non-empty one.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_page_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

impl StatusEnvelope for PageResponse {
    fn status(&self) -> &ApiStatus {
        &self.status
    }

    fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

/// Response from the `details` endpoint: `{ "status": ..., "result": {...} }`.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

impl StatusEnvelope for DetailsResponse {
    fn status(&self) -> &ApiStatus {
        &self.status
    }

    fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}
