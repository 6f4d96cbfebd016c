//! Single-spot lookup via the `details` endpoint.

use gplaces_core::{ApiStatus, Spot};

use crate::error::PlacesError;
use crate::normalize::spot_from_json;
use crate::query::build_details_params;
use crate::request::DetailsRequest;
use crate::types::DetailsResponse;

use super::PlacesClient;

const DETAILS_ENDPOINT: &str = "details";

impl PlacesClient {
    /// Looks up one spot by its reference.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::MissingApiKey`] if no API key is configured.
    /// - [`PlacesError::ApiStatus`] for a failing status after retries, or
    ///   with status `NOT_FOUND` when a successful response has no `result`.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response is not the expected
    ///   envelope.
    pub async fn find_spot(&self, request: &DetailsRequest) -> Result<Spot, PlacesError> {
        let params = build_details_params(request);
        let retry = self.retry_for(request.retry.as_ref());
        let response: DetailsResponse = self.exchange(DETAILS_ENDPOINT, &params, retry).await?;

        let result = response.result.ok_or_else(|| PlacesError::ApiStatus {
            status: ApiStatus::NotFound,
            message: Some(format!(
                "details response for reference {} has no result",
                request.reference
            )),
        })?;

        Ok(spot_from_json(&result))
    }
}
