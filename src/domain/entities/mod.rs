//! # Domain Entities
//!
//! Records administered by the backend. All entities map directly to their
//! corresponding database tables and are independent of each other: any
//! cross references (a review's place name, a playlist's creator name) are
//! denormalized copies, not enforced foreign keys.
//!
//! ## Entities
//!
//! - **User**: platform account (status-only updates, deletable)
//! - **Place**: point of interest (partial updates, deletable)
//! - **Playlist**: curated list of places (status-only updates)
//! - **Trip**: planned journey, counted on the dashboard
//! - **Review**: user review of a place, moderated
//! - **Photo**: user upload, moderated
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod dashboard;
mod photo;
mod place;
mod playlist;
mod review;
mod trip;
mod user;

pub use dashboard::{ActivityPoint, DashboardStats};
pub use photo::{NewPhoto, Photo, PhotoRepository};
pub use place::{NewPlace, Place, PlacePatch, PlaceRepository};
pub use playlist::{NewPlaylist, Playlist, PlaylistRepository};
pub use review::{NewReview, Review, ReviewRepository};
pub use trip::{NewTrip, Trip, TripRepository};
pub use user::{NewUser, User, UserRepository};

#[cfg(test)]
pub use photo::MockPhotoRepository;
#[cfg(test)]
pub use place::MockPlaceRepository;
#[cfg(test)]
pub use playlist::MockPlaylistRepository;
#[cfg(test)]
pub use review::MockReviewRepository;
#[cfg(test)]
pub use trip::MockTripRepository;
#[cfg(test)]
pub use user::MockUserRepository;
