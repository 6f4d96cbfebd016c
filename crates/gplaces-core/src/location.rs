use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
///
/// Both coordinates are always present; callers holding only one of them
/// have no way to build a `Location`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Formats the pair the way the Places API expects it: `"<lat>,<lng>"`.
    #[must_use]
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
