use std::time::Duration;

use crate::app_config::{
    PlacesConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_TOKEN_DELAY_MS, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};
use crate::retry_config::{RetryConfig, DEFAULT_RETRY_DELAY_SECS};
use crate::status::ApiStatus;
use crate::ConfigError;

/// Load client configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric variable cannot be parsed.
pub fn load_config() -> Result<PlacesConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load client configuration from environment variables already in the process.
///
/// Unlike [`load_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric variable cannot be parsed.
pub fn load_config_from_env() -> Result<PlacesConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build client configuration using the provided env-var lookup function.
fn build_config<F>(lookup: F) -> Result<PlacesConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let api_key = lookup("GOOGLE_PLACES_API_KEY")
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty());

    let base_url = or_default("GPLACES_BASE_URL", DEFAULT_BASE_URL);
    let user_agent = or_default("GPLACES_USER_AGENT", DEFAULT_USER_AGENT);
    let request_timeout_secs = parse_u64(
        "GPLACES_REQUEST_TIMEOUT_SECS",
        &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
    )?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "GPLACES_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let page_token_delay_ms = parse_u64(
        "GPLACES_PAGE_TOKEN_DELAY_MS",
        &DEFAULT_PAGE_TOKEN_DELAY_MS.to_string(),
    )?;

    let max_retries = parse_u32("GPLACES_MAX_RETRIES", "0")?;
    let retry_delay_secs = parse_u64(
        "GPLACES_RETRY_DELAY_SECS",
        &DEFAULT_RETRY_DELAY_SECS.to_string(),
    )?;
    let retry_statuses = parse_status_list(&or_default("GPLACES_RETRY_STATUSES", ""));

    Ok(PlacesConfig {
        api_key,
        base_url,
        request_timeout_secs,
        user_agent,
        page_token_delay_ms,
        retry: RetryConfig::new(
            retry_statuses,
            max_retries,
            Duration::from_secs(retry_delay_secs),
        ),
    })
}

/// Split a comma-separated status list, ignoring blank entries.
fn parse_status_list(raw: &str) -> Vec<ApiStatus> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ApiStatus::from)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
