use gplaces_core::ApiStatus;
use thiserror::Error;

/// Errors returned by the Places API client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// No API key was configured; raised before any request is sent.
    #[error("Places API key is not configured")]
    MissingApiKey,

    /// Network or TLS failure from the underlying HTTP client. Never retried.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status that was not retried, or
    /// was still failing once retries ran out.
    #[error("Places API returned {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    ApiStatus {
        status: ApiStatus,
        message: Option<String>,
    },

    /// The response body could not be deserialized into the expected envelope.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("pagination limit reached: exceeded {max_pages} pages")]
    PaginationLimit { max_pages: usize },
}

impl PlacesError {
    /// The provider status carried by an [`PlacesError::ApiStatus`] error.
    #[must_use]
    pub fn api_status(&self) -> Option<&ApiStatus> {
        match self {
            PlacesError::ApiStatus { status, .. } => Some(status),
            _ => None,
        }
    }
}
