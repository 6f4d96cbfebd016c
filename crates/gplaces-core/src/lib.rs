//! Shared configuration and value types for the Google Places client.

pub mod app_config;
pub mod config;
pub mod location;
pub mod places;
pub mod retry_config;
pub mod status;

use thiserror::Error;

pub use app_config::PlacesConfig;
pub use config::{load_config, load_config_from_env};
pub use location::Location;
pub use places::{AddressComponent, Prediction, Review, Spot};
pub use retry_config::RetryConfig;
pub use status::ApiStatus;

/// Failure to build a [`PlacesConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
