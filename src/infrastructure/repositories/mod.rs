//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits, plus the
//! [`Repositories`] handle that bundles one of each for the rest of the
//! application.
//!
//! ## Available Repositories
//!
//! - **PgUserRepository** - `users` table
//! - **PgPlaceRepository** - `places` table
//! - **PgPlaylistRepository** - `playlists` table
//! - **PgTripRepository** - `trips` table
//! - **PgReviewRepository** - `reviews` table
//! - **PgPhotoRepository** - `photos` table
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use travel_admin::infrastructure::repositories::Repositories;
//!
//! fn setup(pool: PgPool) -> Repositories {
//!     Repositories::postgres(pool)
//! }
//! ```

pub mod photo_repository;
pub mod place_repository;
pub mod playlist_repository;
pub mod review_repository;
pub mod trip_repository;
pub mod user_repository;

use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::{
    PhotoRepository, PlaceRepository, PlaylistRepository, ReviewRepository, TripRepository,
    UserRepository,
};

pub use photo_repository::PgPhotoRepository;
pub use place_repository::PgPlaceRepository;
pub use playlist_repository::PgPlaylistRepository;
pub use review_repository::PgReviewRepository;
pub use trip_repository::PgTripRepository;
pub use user_repository::PgUserRepository;

/// Data-access handle: one repository per entity.
///
/// Constructed once at startup and injected into handlers through
/// [`AppState`](crate::startup::AppState). Cloning only bumps reference counts.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub places: Arc<dyn PlaceRepository>,
    pub playlists: Arc<dyn PlaylistRepository>,
    pub trips: Arc<dyn TripRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
    pub photos: Arc<dyn PhotoRepository>,
}

impl Repositories {
    /// Build PostgreSQL-backed repositories sharing one pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            places: Arc::new(PgPlaceRepository::new(pool.clone())),
            playlists: Arc::new(PgPlaylistRepository::new(pool.clone())),
            trips: Arc::new(PgTripRepository::new(pool.clone())),
            reviews: Arc::new(PgReviewRepository::new(pool.clone())),
            photos: Arc::new(PgPhotoRepository::new(pool)),
        }
    }
}
