//! Place records returned to callers.
//!
//! Every field the provider may omit is optional; a record built from a
//! sparse or oddly shaped JSON object simply has more `None`s.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A place returned by nearby search, text search, or a details lookup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Spot {
    pub reference: Option<String>,
    pub place_id: Option<String>,
    pub id: Option<String>,
    pub vicinity: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub types: Vec<String>,
    pub formatted_phone_number: Option<String>,
    pub international_phone_number: Option<String>,
    pub formatted_address: Option<String>,
    pub address_components: Vec<AddressComponent>,
    pub street_number: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub rating: Option<f64>,
    /// Google Maps page for the place.
    pub url: Option<String>,
    /// Customer ID, taken from the `cid` query parameter of `url`.
    pub cid: Option<u64>,
    pub website: Option<String>,
    pub reviews: Vec<Review>,
}

/// One entry of a spot's `address_components`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    pub types: Vec<String>,
}

impl AddressComponent {
    #[must_use]
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Review {
    /// Rating of the first aspect, if the review has any aspects.
    pub rating: Option<u32>,
    /// Type of the first aspect (e.g. `"overall"`, `"food"`).
    pub aspect_type: Option<String>,
    pub author_name: Option<String>,
    pub author_url: Option<String>,
    pub text: Option<String>,
    /// Seconds since the Unix epoch; `0` when the provider sent nothing usable.
    pub time: i64,
}

impl Review {
    /// `time` as a UTC timestamp. `None` for the `0` placeholder or an
    /// out-of-range value.
    #[must_use]
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        if self.time == 0 {
            return None;
        }
        DateTime::<Utc>::from_timestamp(self.time, 0)
    }
}

/// An autocomplete suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Prediction {
    pub description: Option<String>,
    pub id: Option<String>,
    pub reference: Option<String>,
    pub place_id: Option<String>,
    pub types: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posted_at_converts_epoch_seconds() {
        let review = Review {
            time: 1_325_376_000,
            ..Review::default()
        };
        let ts = review.posted_at().unwrap();
        assert_eq!(ts.to_rfc3339(), "2012-01-01T00:00:00+00:00");
    }

    #[test]
    fn posted_at_is_none_for_placeholder() {
        assert!(Review::default().posted_at().is_none());
    }

    #[test]
    fn address_component_type_lookup() {
        let component = AddressComponent {
            long_name: Some("Sydney".to_owned()),
            short_name: Some("Sydney".to_owned()),
            types: vec!["locality".to_owned(), "political".to_owned()],
        };
        assert!(component.has_type("locality"));
        assert!(!component.has_type("country"));
    }
}
