//! Mapping from raw Places API JSON objects to [`gplaces_core`] records.
//!
//! The mappers are total: a missing or wrongly typed field becomes `None`
//! (or an empty list), never an error.

use gplaces_core::{AddressComponent, Prediction, Review, Spot};
use serde_json::Value;

/// Which name of an address component to read.
#[derive(Debug, Clone, Copy)]
enum NameForm {
    Short,
    Long,
}

impl NameForm {
    const fn key(self) -> &'static str {
        match self {
            NameForm::Short => "short_name",
            NameForm::Long => "long_name",
        }
    }
}

/// Builds a [`Spot`] from one element of `results`, or from a details `result`.
#[must_use]
pub fn spot_from_json(value: &Value) -> Spot {
    let location = value.get("geometry").and_then(|g| g.get("location"));
    let components = value
        .get("address_components")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let url = string_field(value, "url");

    Spot {
        reference: string_field(value, "reference"),
        place_id: string_field(value, "place_id"),
        id: string_field(value, "id"),
        vicinity: string_field(value, "vicinity"),
        lat: location.and_then(|l| l.get("lat")).and_then(Value::as_f64),
        lng: location.and_then(|l| l.get("lng")).and_then(Value::as_f64),
        name: string_field(value, "name"),
        icon: string_field(value, "icon"),
        types: string_list(value.get("types")),
        formatted_phone_number: string_field(value, "formatted_phone_number"),
        international_phone_number: string_field(value, "international_phone_number"),
        formatted_address: string_field(value, "formatted_address"),
        address_components: components.iter().map(address_component_from_json).collect(),
        street_number: address_component(components, "street_number", NameForm::Short),
        street: address_component(components, "route", NameForm::Long),
        city: address_component(components, "locality", NameForm::Long),
        region: address_component(components, "administrative_area_level_1", NameForm::Long),
        postal_code: address_component(components, "postal_code", NameForm::Long),
        country: address_component(components, "country", NameForm::Long),
        rating: value.get("rating").and_then(Value::as_f64),
        cid: url.as_deref().and_then(cid_from_url),
        url,
        website: string_field(value, "website"),
        reviews: value
            .get("reviews")
            .and_then(Value::as_array)
            .map(|reviews| reviews.iter().map(review_from_json).collect())
            .unwrap_or_default(),
    }
}

/// Builds a [`Review`] from one element of a spot's `reviews`.
///
/// Only the first entry of `aspects` is read; no aspects means no rating.
#[must_use]
pub fn review_from_json(value: &Value) -> Review {
    let first_aspect = value
        .get("aspects")
        .and_then(Value::as_array)
        .and_then(|aspects| aspects.first());

    Review {
        rating: first_aspect
            .and_then(|a| a.get("rating"))
            .and_then(aspect_rating),
        aspect_type: first_aspect.and_then(|a| string_field(a, "type")),
        author_name: string_field(value, "author_name"),
        author_url: string_field(value, "author_url"),
        text: string_field(value, "text"),
        time: value.get("time").map_or(0, coerce_integer),
    }
}

/// Builds a [`Prediction`] from one element of `predictions`.
#[must_use]
pub fn prediction_from_json(value: &Value) -> Prediction {
    Prediction {
        description: string_field(value, "description"),
        id: string_field(value, "id"),
        reference: string_field(value, "reference"),
        place_id: string_field(value, "place_id"),
        types: string_list(value.get("types")),
    }
}

/// `true` when the result's `types` share at least one entry with `exclude`.
pub(crate) fn has_excluded_type(
    value: &Value,
    exclude: &std::collections::BTreeSet<String>,
) -> bool {
    if exclude.is_empty() {
        return false;
    }
    value
        .get("types")
        .and_then(Value::as_array)
        .is_some_and(|types| {
            types
                .iter()
                .filter_map(Value::as_str)
                .any(|t| exclude.contains(t))
        })
}

fn address_component_from_json(value: &Value) -> AddressComponent {
    AddressComponent {
        long_name: string_field(value, "long_name"),
        short_name: string_field(value, "short_name"),
        types: string_list(value.get("types")),
    }
}

/// Reads `form` of the first component (input order) tagged `tag`.
///
/// A first match without the requested name yields `None`; later matches
/// are not consulted.
fn address_component(components: &[Value], tag: &str, form: NameForm) -> Option<String> {
    components
        .iter()
        .find(|c| {
            c.get("types")
                .and_then(Value::as_array)
                .is_some_and(|types| types.iter().any(|t| t.as_str() == Some(tag)))
        })
        .and_then(|c| string_field(c, form.key()))
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Integer coercion: numbers are truncated, numeric strings parsed, and
/// anything else becomes `0`.
#[allow(clippy::cast_possible_truncation)]
fn coerce_integer(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => leading_integer(s),
        _ => 0,
    }
}

/// Reads the optional sign and leading digits of `raw`, ignoring anything
/// after them. `"1325376000abc"` is `1325376000`; no digits is `0`.
fn leading_integer(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return 0;
    }
    let digits_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    trimmed[..sign_len + digits_len].parse().unwrap_or(0)
}

/// An aspect rating as a whole number. Integral floats such as `2.0` are
/// accepted; fractional or negative values are not.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn aspect_rating(value: &Value) -> Option<u32> {
    if let Some(rating) = value.as_u64() {
        return u32::try_from(rating).ok();
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(f))
        .map(|f| f as u32)
}

/// Extracts the numeric `cid` query parameter from a Maps URL such as
/// `https://maps.google.com/maps/place?cid=1234567890`.
fn cid_from_url(url: &str) -> Option<u64> {
    let parsed = reqwest::Url::parse(url).ok()?;
    parsed
        .query_pairs()
        .find(|(k, _)| k == "cid")
        .and_then(|(_, v)| v.parse::<u64>().ok())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
