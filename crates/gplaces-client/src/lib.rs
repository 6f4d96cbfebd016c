//! Client for the Google Places web API: nearby and text search with
//! cursor pagination, autocomplete predictions, and spot details.

pub mod client;
pub mod error;
pub mod normalize;
pub mod query;
pub mod request;
mod retry;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use gplaces_core::{
    load_config, AddressComponent, ApiStatus, ConfigError, Location, PlacesConfig, Prediction,
    RetryConfig, Review, Spot,
};
pub use request::{DetailsRequest, Endpoint, RankBy, SearchRequest};
