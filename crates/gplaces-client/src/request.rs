//! Typed request values for the search, autocomplete, and details endpoints.
//!
//! Requests are built with consuming `with_*` methods and are immutable once
//! handed to [`crate::PlacesClient`].

use std::collections::BTreeSet;

use gplaces_core::{Location, RetryConfig};

/// The list-style endpoints driven through the pagination pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    NearbySearch,
    TextSearch,
    Autocomplete,
}

impl Endpoint {
    /// Path segment under the Places base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::NearbySearch => "nearbysearch",
            Endpoint::TextSearch => "textsearch",
            Endpoint::Autocomplete => "autocomplete",
        }
    }

    /// Name of the free-text parameter, if the endpoint takes one.
    pub(crate) const fn text_param(self) -> Option<&'static str> {
        match self {
            Endpoint::NearbySearch => None,
            Endpoint::TextSearch => Some("query"),
            Endpoint::Autocomplete => Some("input"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBy {
    Prominence,
    /// Sorts by proximity; the provider then fixes the radius itself.
    Distance,
}

impl RankBy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RankBy::Prominence => "prominence",
            RankBy::Distance => "distance",
        }
    }
}

/// A nearby, text, or autocomplete search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub(crate) endpoint: Endpoint,
    pub(crate) location: Option<Location>,
    pub(crate) radius: Option<u32>,
    pub(crate) rank_by: Option<RankBy>,
    pub(crate) text: Option<String>,
    pub(crate) types: Vec<String>,
    pub(crate) keyword: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) language: Option<String>,
    pub(crate) sensor: bool,
    pub(crate) exclude: BTreeSet<String>,
    pub(crate) retry: Option<RetryConfig>,
}

impl SearchRequest {
    fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            location: None,
            radius: None,
            rank_by: None,
            text: None,
            types: Vec::new(),
            keyword: None,
            name: None,
            language: None,
            sensor: false,
            exclude: BTreeSet::new(),
            retry: None,
        }
    }

    /// Spots around `location`.
    #[must_use]
    pub fn nearby(location: Location) -> Self {
        Self::new(Endpoint::NearbySearch).with_location(location)
    }

    /// Spots matching a free-text query such as `"pizza in New York"`.
    #[must_use]
    pub fn text(query: impl Into<String>) -> Self {
        let mut request = Self::new(Endpoint::TextSearch);
        request.text = Some(query.into());
        request
    }

    /// Autocomplete predictions for a partially typed `input`.
    #[must_use]
    pub fn autocomplete(input: impl Into<String>) -> Self {
        let mut request = Self::new(Endpoint::Autocomplete);
        request.text = Some(input.into());
        request
    }

    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Search radius in meters. Ignored when ranking by distance.
    #[must_use]
    pub fn with_radius(mut self, meters: u32) -> Self {
        self.radius = Some(meters);
        self
    }

    #[must_use]
    pub fn with_rank_by(mut self, rank_by: RankBy) -> Self {
        self.rank_by = Some(rank_by);
        self
    }

    /// Restricts results to places matching at least one of `types`.
    #[must_use]
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Whether the request originates from a device with a location sensor.
    #[must_use]
    pub fn with_sensor(mut self, sensor: bool) -> Self {
        self.sensor = sensor;
        self
    }

    /// Drops results tagged with any of `types` after they are fetched.
    #[must_use]
    pub fn with_exclude<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = types.into_iter().map(Into::into).collect();
        self
    }

    /// Overrides the client's default retry policy for this request.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }

    #[must_use]
    pub const fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    #[must_use]
    pub fn exclude(&self) -> &BTreeSet<String> {
        &self.exclude
    }
}

/// Lookup of a single spot by its reference.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsRequest {
    pub(crate) reference: String,
    pub(crate) language: Option<String>,
    pub(crate) sensor: bool,
    pub(crate) retry: Option<RetryConfig>,
}

impl DetailsRequest {
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            language: None,
            sensor: false,
            retry: None,
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub fn with_sensor(mut self, sensor: bool) -> Self {
        self.sensor = sensor;
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusion_accepts_a_single_type() {
        let request = SearchRequest::text("cafe").with_exclude(["restaurant"]);
        assert_eq!(
            request.exclude().iter().collect::<Vec<_>>(),
            vec!["restaurant"]
        );
    }

    #[test]
    fn exclusion_collapses_duplicates() {
        let excluded = vec!["bar".to_owned(), "restaurant".to_owned(), "bar".to_owned()];
        let request = SearchRequest::text("cafe").with_exclude(excluded);
        assert_eq!(request.exclude().len(), 2);
    }

    #[test]
    fn endpoints_map_to_paths() {
        assert_eq!(Endpoint::NearbySearch.path(), "nearbysearch");
        assert_eq!(Endpoint::TextSearch.path(), "textsearch");
        assert_eq!(Endpoint::Autocomplete.path(), "autocomplete");
    }

    #[test]
    fn constructors_pick_endpoint() {
        let here = Location::new(1.0, 2.0);
        assert_eq!(SearchRequest::nearby(here).endpoint(), Endpoint::NearbySearch);
        assert_eq!(SearchRequest::text("q").endpoint(), Endpoint::TextSearch);
        assert_eq!(
            SearchRequest::autocomplete("pi").endpoint(),
            Endpoint::Autocomplete
        );
    }
}
