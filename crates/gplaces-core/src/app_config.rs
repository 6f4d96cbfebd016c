use crate::retry_config::RetryConfig;

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";
pub const DEFAULT_USER_AGENT: &str = "gplaces/0.1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Google rejects a fresh `next_page_token` for a short while after issuing it.
pub const DEFAULT_PAGE_TOKEN_DELAY_MS: u64 = 2_000;

#[derive(Clone)]
pub struct PlacesConfig {
    /// Places API key. Requests fail with a configuration error while unset.
    pub api_key: Option<String>,
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub page_token_delay_ms: u64,
    /// Retry policy for requests that do not carry their own.
    pub retry: RetryConfig,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            page_token_delay_ms: DEFAULT_PAGE_TOKEN_DELAY_MS,
            retry: RetryConfig::default(),
        }
    }
}

impl std::fmt::Debug for PlacesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("page_token_delay_ms", &self.page_token_delay_ms)
            .field("retry", &self.retry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let config = PlacesConfig {
            api_key: Some("super-secret".to_owned()),
            ..PlacesConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"), "{rendered}");
        assert!(rendered.contains("[redacted]"), "{rendered}");
    }
}
