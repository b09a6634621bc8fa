//! Structured place attributes that are persisted as JSON text.
//!
//! The `places` table keeps `amenities` and `coordinates` in `TEXT` columns.
//! These types describe the decoded shape so the application layer can
//! check that an encoded value is well formed.

use serde::{Deserialize, Serialize};

/// Geographic position of a place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Decode from the stored JSON text, e.g. `{"lat":1.5,"lng":2.0}`.
    pub fn decode(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Encode into the stored JSON text.
    pub fn encode(&self) -> String {
        serde_json::json!({ "lat": self.lat, "lng": self.lng }).to_string()
    }

    /// Whether both components fall inside the valid WGS84 ranges.
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Amenity labels of a place, stored as a JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amenities(pub Vec<String>);

impl Amenities {
    pub fn decode(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn encode(&self) -> String {
        serde_json::Value::from(self.0.clone()).to_string()
    }
}
