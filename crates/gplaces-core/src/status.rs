//! The `status` field every Places API response carries.

use serde::{Deserialize, Serialize};

/// Response status reported by the Places API.
///
/// Unknown strings are preserved in [`ApiStatus::Other`] so that new
/// provider statuses can still be listed as retryable or surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApiStatus {
    Ok,
    ZeroResults,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    NotFound,
    UnknownError,
    Other(String),
}

impl ApiStatus {
    /// The status string as it appears on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ApiStatus::Ok => "OK",
            ApiStatus::ZeroResults => "ZERO_RESULTS",
            ApiStatus::OverQueryLimit => "OVER_QUERY_LIMIT",
            ApiStatus::RequestDenied => "REQUEST_DENIED",
            ApiStatus::InvalidRequest => "INVALID_REQUEST",
            ApiStatus::NotFound => "NOT_FOUND",
            ApiStatus::UnknownError => "UNKNOWN_ERROR",
            ApiStatus::Other(raw) => raw,
        }
    }

    /// `OK` and `ZERO_RESULTS` carry a usable (possibly empty) result set.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ApiStatus::Ok | ApiStatus::ZeroResults)
    }
}

impl From<&str> for ApiStatus {
    fn from(raw: &str) -> Self {
        match raw.trim() {
            "OK" => ApiStatus::Ok,
            "ZERO_RESULTS" => ApiStatus::ZeroResults,
            "OVER_QUERY_LIMIT" => ApiStatus::OverQueryLimit,
            "REQUEST_DENIED" => ApiStatus::RequestDenied,
            "INVALID_REQUEST" => ApiStatus::InvalidRequest,
            "NOT_FOUND" => ApiStatus::NotFound,
            "UNKNOWN_ERROR" => ApiStatus::UnknownError,
            other => ApiStatus::Other(other.to_owned()),
        }
    }
}

impl From<String> for ApiStatus {
    fn from(raw: String) -> Self {
        ApiStatus::from(raw.as_str())
    }
}

impl From<ApiStatus> for String {
    fn from(status: ApiStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl std::fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
