//! Request DTOs
//!
//! Data structures for API request bodies. JSON keys are camelCase.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::{
    Amenities, Coordinates, NewPlace, NewPlaylist, NewUser, PlacePatch, PlaceStatus,
    PlaylistStatus, UserStatus, Visibility,
};

/// Create place request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaceRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: f64,

    #[serde(default)]
    pub status: PlaceStatus,

    #[validate(custom(function = "validate_amenities"))]
    pub amenities: Option<String>,

    #[validate(custom(function = "validate_coordinates"))]
    pub coordinates: Option<String>,
}

impl From<CreatePlaceRequest> for NewPlace {
    fn from(req: CreatePlaceRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            location: req.location,
            category: req.category,
            image_url: req.image_url,
            rating: req.rating,
            status: req.status,
            amenities: req.amenities,
            coordinates: req.coordinates,
        }
    }
}

/// Update place request. Absent fields keep their stored values.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlaceRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "Location cannot be empty"))]
    pub location: Option<String>,

    #[validate(length(min = 1, message = "Category cannot be empty"))]
    pub category: Option<String>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    pub rating: Option<f64>,

    pub status: Option<PlaceStatus>,

    #[validate(custom(function = "validate_amenities"))]
    pub amenities: Option<String>,

    #[validate(custom(function = "validate_coordinates"))]
    pub coordinates: Option<String>,
}

impl From<UpdatePlaceRequest> for PlacePatch {
    fn from(req: UpdatePlaceRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            location: req.location,
            category: req.category,
            image_url: req.image_url,
            rating: req.rating,
            status: req.status,
            amenities: req.amenities,
            coordinates: req.coordinates,
        }
    }
}

/// Create playlist request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 1, message = "Creator ID must be positive"))]
    pub creator_id: i64,

    #[validate(length(min = 1, message = "Creator name is required"))]
    pub creator_name: String,

    #[serde(default)]
    pub status: PlaylistStatus,

    #[serde(default)]
    #[validate(range(min = 0, message = "Places count cannot be negative"))]
    pub places_count: i32,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub visibility: Visibility,
}

impl From<CreatePlaylistRequest> for NewPlaylist {
    fn from(req: CreatePlaylistRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            creator_id: req.creator_id,
            creator_name: req.creator_name,
            status: req.status,
            places_count: req.places_count,
            is_featured: req.is_featured,
            visibility: req.visibility,
        }
    }
}

/// Create user request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default = "default_role")]
    #[validate(length(min = 1, max = 32, message = "Role must be 1-32 characters"))]
    pub role: String,

    #[serde(default)]
    pub status: UserStatus,
}

fn default_role() -> String {
    "user".to_string()
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            role: req.role,
            status: req.status,
        }
    }
}

/// Status-only update, shared by users, playlists, reviews and photos
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest<S> {
    pub status: S,
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Encoded amenities must be a JSON array of strings.
fn validate_amenities(value: &str) -> Result<(), ValidationError> {
    Amenities::decode(value)
        .map(|_| ())
        .map_err(|_| invalid("amenities", "Amenities must be a list of strings"))
}

/// Encoded coordinates must be a `{lat, lng}` object within WGS84 ranges.
fn validate_coordinates(value: &str) -> Result<(), ValidationError> {
    match Coordinates::decode(value) {
        Ok(coords) if coords.in_range() => Ok(()),
        Ok(_) => Err(invalid("coordinates", "Coordinates are out of range")),
        Err(_) => Err(invalid(
            "coordinates",
            "Coordinates must be an object with numeric lat and lng",
        )),
    }
}
