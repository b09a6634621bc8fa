//! Data Transfer Objects
//!
//! Request bodies and their normalization. Responses serialize the domain
//! entities directly.

pub mod normalize;
pub mod request;

pub use normalize::normalize_place_body;
pub use request::{
    CreatePlaceRequest, CreatePlaylistRequest, CreateUserRequest, UpdatePlaceRequest,
    UpdateStatusRequest,
};
