//! Common Test Utilities
//!
//! In-memory repositories and a [`TestApp`] that serves the real router over
//! them, so API tests run without PostgreSQL.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};

use travel_admin::domain::{
    ModerationStatus, NewPhoto, NewPlace, NewPlaylist, NewReview, NewTrip, NewUser, Photo,
    PhotoRepository, Place, PlacePatch, PlaceRepository, Playlist, PlaylistRepository,
    PlaylistStatus, Review, ReviewRepository, Trip, TripRepository, User, UserRepository,
    UserStatus,
};
use travel_admin::infrastructure::database::HealthProbe;
use travel_admin::infrastructure::repositories::Repositories;
use travel_admin::presentation::http::routes::create_router;
use travel_admin::shared::error::AppError;
use travel_admin::startup::AppState;

/// Rows plus an id sequence. Listing is newest first.
struct Table<T> {
    rows: Mutex<Vec<T>>,
    next_id: AtomicI64,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    fn insert(&self, row: T) -> T {
        self.rows.lock().unwrap().push(row.clone());
        row
    }

    fn all(&self) -> Vec<T> {
        self.rows.lock().unwrap().iter().rev().cloned().collect()
    }

    fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.lock().unwrap().iter().find(|r| pred(r)).cloned()
    }

    fn modify(&self, pred: impl Fn(&T) -> bool, f: impl FnOnce(&mut T)) -> Option<T> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.iter_mut().find(|r| pred(r))?;
        f(row);
        Some(row.clone())
    }

    fn remove(&self, pred: impl Fn(&T) -> bool) {
        self.rows.lock().unwrap().retain(|r| !pred(r));
    }
}

pub struct MemoryUsers(Table<User>);

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.0.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.0.find(|u| u.id == id))
    }

    async fn create(&self, user: NewUser) -> Result<User, AppError> {
        Ok(self.0.insert(User {
            id: self.0.next_id(),
            name: user.name,
            email: user.email,
            role: user.role,
            status: user.status,
            joined_at: Utc::now(),
        }))
    }

    async fn update_status(&self, id: i64, status: UserStatus) -> Result<Option<User>, AppError> {
        Ok(self.0.modify(|u| u.id == id, |u| u.status = status))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.0.remove(|u| u.id == id);
        Ok(())
    }
}

pub struct MemoryPlaces(Table<Place>);

#[async_trait]
impl PlaceRepository for MemoryPlaces {
    async fn find_all(&self) -> Result<Vec<Place>, AppError> {
        Ok(self.0.all())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Place>, AppError> {
        Ok(self.0.find(|p| p.id == id))
    }

    async fn create(&self, place: NewPlace) -> Result<Place, AppError> {
        Ok(self.0.insert(Place {
            id: self.0.next_id(),
            name: place.name,
            description: place.description,
            location: place.location,
            category: place.category,
            image_url: place.image_url,
            rating: place.rating,
            status: place.status,
            amenities: place.amenities,
            coordinates: place.coordinates,
            created_at: Utc::now(),
        }))
    }

    async fn update(&self, id: i64, patch: PlacePatch) -> Result<Option<Place>, AppError> {
        Ok(self.0.modify(|p| p.id == id, |p| patch.apply_to(p)))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.0.remove(|p| p.id == id);
        Ok(())
    }
}

pub struct MemoryPlaylists(Table<Playlist>);

#[async_trait]
impl PlaylistRepository for MemoryPlaylists {
    async fn find_all(&self) -> Result<Vec<Playlist>, AppError> {
        Ok(self.0.all())
    }

    async fn create(&self, playlist: NewPlaylist) -> Result<Playlist, AppError> {
        Ok(self.0.insert(Playlist {
            id: self.0.next_id(),
            name: playlist.name,
            description: playlist.description,
            creator_id: playlist.creator_id,
            creator_name: playlist.creator_name,
            status: playlist.status,
            places_count: playlist.places_count,
            is_featured: playlist.is_featured,
            visibility: playlist.visibility,
            created_at: Utc::now(),
        }))
    }

    async fn update_status(
        &self,
        id: i64,
        status: PlaylistStatus,
    ) -> Result<Option<Playlist>, AppError> {
        Ok(self.0.modify(|p| p.id == id, |p| p.status = status))
    }
}

pub struct MemoryTrips(Table<Trip>);

#[async_trait]
impl TripRepository for MemoryTrips {
    async fn find_all(&self) -> Result<Vec<Trip>, AppError> {
        Ok(self.0.all())
    }

    async fn create(&self, trip: NewTrip) -> Result<Trip, AppError> {
        Ok(self.0.insert(Trip {
            id: self.0.next_id(),
            user_id: trip.user_id,
            destination: trip.destination,
            status: trip.status,
        }))
    }
}

pub struct MemoryReviews(Table<Review>);

#[async_trait]
impl ReviewRepository for MemoryReviews {
    async fn find_all(&self) -> Result<Vec<Review>, AppError> {
        Ok(self.0.all())
    }

    async fn create(&self, review: NewReview) -> Result<Review, AppError> {
        Ok(self.0.insert(Review {
            id: self.0.next_id(),
            user_id: review.user_id,
            user_name: review.user_name,
            place_id: review.place_id,
            place_name: review.place_name,
            content: review.content,
            rating: review.rating,
            status: review.status,
            created_at: Utc::now(),
        }))
    }

    async fn update_status(
        &self,
        id: i64,
        status: ModerationStatus,
    ) -> Result<Option<Review>, AppError> {
        Ok(self.0.modify(|r| r.id == id, |r| r.status = status))
    }
}

pub struct MemoryPhotos(Table<Photo>);

#[async_trait]
impl PhotoRepository for MemoryPhotos {
    async fn find_all(&self) -> Result<Vec<Photo>, AppError> {
        Ok(self.0.all())
    }

    async fn create(&self, photo: NewPhoto) -> Result<Photo, AppError> {
        Ok(self.0.insert(Photo {
            id: self.0.next_id(),
            uploader_id: photo.uploader_id,
            uploader_name: photo.uploader_name,
            url: photo.url,
            caption: photo.caption,
            related_type: photo.related_type,
            related_id: photo.related_id,
            status: photo.status,
            created_at: Utc::now(),
        }))
    }

    async fn update_status(
        &self,
        id: i64,
        status: ModerationStatus,
    ) -> Result<Option<Photo>, AppError> {
        Ok(self.0.modify(|p| p.id == id, |p| p.status = status))
    }
}

/// Fresh, empty in-memory repositories.
pub fn memory_repositories() -> Repositories {
    Repositories {
        users: Arc::new(MemoryUsers(Table::new())),
        places: Arc::new(MemoryPlaces(Table::new())),
        playlists: Arc::new(MemoryPlaylists(Table::new())),
        trips: Arc::new(MemoryTrips(Table::new())),
        reviews: Arc::new(MemoryReviews(Table::new())),
        photos: Arc::new(MemoryPhotos(Table::new())),
    }
}

/// Readiness probe with a fixed answer.
pub struct StaticProbe {
    pub reachable: bool,
}

#[async_trait]
impl HealthProbe for StaticProbe {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        if self.reachable {
            Ok(())
        } else {
            Err(sqlx::Error::PoolTimedOut)
        }
    }
}

/// Test application over in-memory repositories
pub struct TestApp {
    pub server: TestServer,
    pub repos: Repositories,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_probe(StaticProbe { reachable: true })
    }

    pub fn with_probe(probe: StaticProbe) -> Self {
        let repos = memory_repositories();
        let state = AppState {
            repos: repos.clone(),
            probe: Arc::new(probe),
        };
        let server = TestServer::new(create_router(state)).expect("failed to start test server");
        Self { server, repos }
    }

    /// Create a user through the API and return its JSON.
    pub async fn create_user(&self, status: &str) -> Value {
        let name: String = Name().fake();
        let email: String = SafeEmail().fake();
        let response = self
            .server
            .post("/api/admin/users")
            .json(&json!({ "name": name, "email": email, "status": status }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json()
    }

    /// Create a place through the API and return its JSON.
    pub async fn create_place(&self, name: &str) -> Value {
        let response = self
            .server
            .post("/api/admin/places")
            .json(&place_body(name))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json()
    }
}

/// Minimal valid place body.
pub fn place_body(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Hilltop fortress with city views",
        "location": "Lisbon, Portugal",
        "category": "landmark",
        "rating": 4.5
    })
}
