//! Query-string assembly for Places API requests.
//!
//! The builders here are pure: they never see the API key (the client adds
//! it) and never validate provider-side rules such as "ranking by distance
//! needs a keyword, name, or type".

use crate::request::{DetailsRequest, Endpoint, RankBy, SearchRequest};

/// Radius sent alongside a location when the caller gives none.
pub const DEFAULT_RADIUS_METERS: u32 = 1_000;

/// Ordered query parameters, excluding the API key.
pub type QueryParams = Vec<(&'static str, String)>;

/// Translates a [`SearchRequest`] into query parameters.
///
/// Absent or empty fields produce no parameter. The exclusion set is a
/// client-side filter and is never emitted.
#[must_use]
pub fn build_search_params(request: &SearchRequest) -> QueryParams {
    let mut params = QueryParams::new();
    let rank_by_distance = request.rank_by == Some(RankBy::Distance);

    if let Some(location) = &request.location {
        params.push(("location", location.format()));
    }

    // Autocomplete only biases by radius around a location.
    let radius_needs_location = request.endpoint == Endpoint::Autocomplete;
    if !rank_by_distance {
        let radius = match (request.radius, &request.location) {
            (Some(radius), Some(_)) => Some(radius),
            (Some(radius), None) if !radius_needs_location => Some(radius),
            (None, Some(_)) => Some(DEFAULT_RADIUS_METERS),
            _ => None,
        };
        if let Some(radius) = radius {
            params.push(("radius", radius.to_string()));
        }
    }

    if let Some(rank_by) = request.rank_by {
        params.push(("rankby", rank_by.as_str().to_owned()));
    }

    let text = non_empty(request.text.as_deref());
    if let (Some(param), Some(text)) = (request.endpoint.text_param(), text) {
        params.push((param, text.to_owned()));
    }

    if let Some(keyword) = non_empty(request.keyword.as_deref()) {
        params.push(("keyword", keyword.to_owned()));
    }

    if let Some(name) = non_empty(request.name.as_deref()) {
        params.push(("name", name.to_owned()));
    }

    if let Some(types) = join_types(&request.types) {
        params.push(("types", types));
    }

    if let Some(language) = non_empty(request.language.as_deref()) {
        params.push(("language", language.to_owned()));
    }

    params.push(("sensor", request.sensor.to_string()));
    params
}

/// Translates a [`DetailsRequest`] into query parameters.
#[must_use]
pub fn build_details_params(request: &DetailsRequest) -> QueryParams {
    let mut params = vec![("reference", request.reference.clone())];
    if let Some(language) = non_empty(request.language.as_deref()) {
        params.push(("language", language.to_owned()));
    }
    params.push(("sensor", request.sensor.to_string()));
    params
}

/// Pipe-joins the type filter, preserving order and skipping blank entries.
fn join_types(types: &[String]) -> Option<String> {
    let joined = types
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("|");
    (!joined.is_empty()).then_some(joined)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
