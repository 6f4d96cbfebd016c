//! Paginated search for `PlacesClient`.
//!
//! A search is driven lazily: the first page is requested when the stream
//! is first polled, its surviving results are yielded, and only then is the
//! `next_page_token` followed. Each page gets its own retry budget.

use std::collections::BTreeSet;
use std::sync::Arc;

use futures::stream::{self, Stream, TryStreamExt};
use gplaces_core::{Prediction, RetryConfig, Spot};
use serde_json::Value;

use crate::error::PlacesError;
use crate::normalize::{has_excluded_type, prediction_from_json, spot_from_json};
use crate::query::{build_search_params, QueryParams};
use crate::request::{Endpoint, SearchRequest};
use crate::types::PageResponse;

use super::{PlacesClient, MAX_PAGES};

/// Everything a search needs after the request value is dropped.
struct SearchPlan {
    endpoint: Endpoint,
    first_page_params: QueryParams,
    retry: RetryConfig,
    exclude: BTreeSet<String>,
}

enum PageCursor {
    Start,
    Token { token: String, page: usize },
    Exhausted,
}

impl PlacesClient {
    /// Runs a search and streams every raw result object, page by page.
    ///
    /// Results whose `types` intersect the request's exclusion set are
    /// dropped. Order follows the provider's order within each page, and
    /// pages are consumed strictly in cursor order.
    ///
    /// The stream ends with an error item if any page fails; results from
    /// earlier pages have already been yielded by then.
    ///
    /// # Errors
    ///
    /// Items are [`PlacesError::MissingApiKey`], [`PlacesError::Http`],
    /// [`PlacesError::Deserialize`], [`PlacesError::ApiStatus`], or
    /// [`PlacesError::PaginationLimit`] when a page fails.
    pub fn search(
        &self,
        request: &SearchRequest,
    ) -> impl Stream<Item = Result<Value, PlacesError>> + '_ {
        let plan = Arc::new(SearchPlan {
            endpoint: request.endpoint,
            first_page_params: build_search_params(request),
            retry: self.retry_for(request.retry.as_ref()).clone(),
            exclude: request.exclude.clone(),
        });

        stream::try_unfold(PageCursor::Start, move |cursor| {
            let plan = Arc::clone(&plan);
            async move { self.next_page(&plan, cursor).await }
        })
        .map_ok(|results| stream::iter(results.into_iter().map(Ok::<Value, PlacesError>)))
        .try_flatten()
    }

    /// Streams search results mapped into [`Spot`] records.
    pub fn spots(
        &self,
        request: &SearchRequest,
    ) -> impl Stream<Item = Result<Spot, PlacesError>> + '_ {
        self.search(request).map_ok(|value| spot_from_json(&value))
    }

    /// Collects every spot of a nearby or text search.
    ///
    /// # Errors
    ///
    /// Returns the first error the stream yields; spots fetched before it
    /// are discarded.
    pub async fn list_spots(&self, request: &SearchRequest) -> Result<Vec<Spot>, PlacesError> {
        self.spots(request).try_collect().await
    }

    /// Fetches autocomplete predictions for a [`SearchRequest::autocomplete`]
    /// request.
    ///
    /// # Errors
    ///
    /// Same as [`Self::search`].
    pub async fn predictions(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<Prediction>, PlacesError> {
        self.search(request)
            .map_ok(|value| prediction_from_json(&value))
            .try_collect()
            .await
    }

    /// Fetches the page `cursor` points at and returns its surviving results
    /// with the cursor for the following page.
    async fn next_page(
        &self,
        plan: &SearchPlan,
        cursor: PageCursor,
    ) -> Result<Option<(Vec<Value>, PageCursor)>, PlacesError> {
        let (token, page) = match cursor {
            PageCursor::Exhausted => return Ok(None),
            PageCursor::Start => (None, 1),
            PageCursor::Token { token, page } => (Some(token), page),
        };

        if page > MAX_PAGES {
            return Err(PlacesError::PaginationLimit {
                max_pages: MAX_PAGES,
            });
        }

        // A continuation request carries nothing but the key and the cursor.
        let params = match token {
            Some(token) => {
                if !self.page_token_delay.is_zero() {
                    tokio::time::sleep(self.page_token_delay).await;
                }
                vec![("pagetoken", token)]
            }
            None => plan.first_page_params.clone(),
        };

        tracing::debug!(
            endpoint = plan.endpoint.path(),
            page,
            continuation = page > 1,
            "fetching Places results page"
        );

        let response: PageResponse = self
            .exchange(plan.endpoint.path(), &params, &plan.retry)
            .await?;

        let next = match response.next_cursor() {
            Some(token) => PageCursor::Token {
                token: token.to_owned(),
                page: page + 1,
            },
            None => PageCursor::Exhausted,
        };

        let received = response.results.len();
        let survivors: Vec<Value> = response
            .results
            .into_iter()
            .filter(|result| !has_excluded_type(result, &plan.exclude))
            .collect();
        if survivors.len() < received {
            tracing::debug!(
                page,
                dropped = received - survivors.len(),
                "dropped results with excluded types"
            );
        }

        Ok(Some((survivors, next)))
    }
}
