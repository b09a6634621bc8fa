//! Place entity and repository trait.
//!
//! Maps to the `places` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::PlaceStatus;
use crate::shared::error::AppError;

/// A point of interest curated on the platform.
///
/// Maps to the `places` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name, description, location, category: TEXT NOT NULL
/// - image_url: TEXT NULL
/// - rating: DOUBLE PRECISION NOT NULL DEFAULT 0
/// - status: TEXT NOT NULL DEFAULT 'active'
/// - amenities: TEXT NULL (JSON array of strings)
/// - coordinates: TEXT NULL (JSON object `{lat, lng}`)
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub image_url: Option<String>,
    pub rating: f64,
    pub status: PlaceStatus,
    /// Encoded JSON text, see [`Amenities`](crate::domain::Amenities)
    pub amenities: Option<String>,
    /// Encoded JSON text, see [`Coordinates`](crate::domain::Coordinates)
    pub coordinates: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the caller when inserting a place.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlace {
    pub name: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub image_url: Option<String>,
    pub rating: f64,
    pub status: PlaceStatus,
    pub amenities: Option<String>,
    pub coordinates: Option<String>,
}

/// Partial update of a place. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub rating: Option<f64>,
    pub status: Option<PlaceStatus>,
    pub amenities: Option<String>,
    pub coordinates: Option<String>,
}

impl PlacePatch {
    /// Merge this patch over an existing place.
    pub fn apply_to(self, place: &mut Place) {
        if let Some(name) = self.name {
            place.name = name;
        }
        if let Some(description) = self.description {
            place.description = description;
        }
        if let Some(location) = self.location {
            place.location = location;
        }
        if let Some(category) = self.category {
            place.category = category;
        }
        if let Some(image_url) = self.image_url {
            place.image_url = Some(image_url);
        }
        if let Some(rating) = self.rating {
            place.rating = rating;
        }
        if let Some(status) = self.status {
            place.status = status;
        }
        if let Some(amenities) = self.amenities {
            place.amenities = Some(amenities);
        }
        if let Some(coordinates) = self.coordinates {
            place.coordinates = Some(coordinates);
        }
    }
}

/// Repository trait for Place data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// All places, newest first.
    async fn find_all(&self) -> Result<Vec<Place>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Place>, AppError>;

    async fn create(&self, place: NewPlace) -> Result<Place, AppError>;

    /// Merge `patch` into the stored row. A miss is `Ok(None)`.
    async fn update(&self, id: i64, patch: PlacePatch) -> Result<Option<Place>, AppError>;

    /// Delete a place. Deleting a missing ID succeeds.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
