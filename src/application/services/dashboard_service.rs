//! Dashboard Service
//!
//! Aggregate counts for the admin dashboard and the mocked activity chart.
//!
//! Counts come from full scans of each collection; there is no count-only
//! query path. This is linear in table size and only suitable for the small
//! data volumes of an admin demo.

use std::sync::Arc;

use rand::Rng;

use crate::domain::{
    ActivityPoint, DashboardStats, PlaceRepository, PlaylistRepository, ReviewRepository,
    TripRepository, UserRepository,
};
use crate::infrastructure::repositories::Repositories;
use crate::shared::error::AppError;

/// Period labels of the mocked activity chart.
pub const ACTIVITY_PERIODS: [&str; 6] = [
    "2024-01", "2024-02", "2024-03", "2024-04", "2024-05", "2024-06",
];

/// Dashboard aggregates over the entity repositories
pub struct DashboardService {
    users: Arc<dyn UserRepository>,
    places: Arc<dyn PlaceRepository>,
    playlists: Arc<dyn PlaylistRepository>,
    trips: Arc<dyn TripRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl DashboardService {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            users: repos.users.clone(),
            places: repos.places.clone(),
            playlists: repos.playlists.clone(),
            trips: repos.trips.clone(),
            reviews: repos.reviews.clone(),
        }
    }

    /// Scan every collection and count.
    pub async fn stats(&self) -> Result<DashboardStats, AppError> {
        let trips = self.trips.find_all().await?;
        let playlists = self.playlists.find_all().await?;
        let places = self.places.find_all().await?;
        let users = self.users.find_all().await?;
        let reviews = self.reviews.find_all().await?;

        Ok(DashboardStats {
            total_trips: trips.len(),
            total_playlists: playlists.len(),
            total_places: places.len(),
            active_users: users.iter().filter(|u| u.is_active()).count(),
            pending_reviews: reviews.iter().filter(|r| r.is_pending()).count(),
        })
    }

    /// Mocked activity series.
    ///
    /// This is placeholder data, not analytics: six fixed monthly labels with
    /// unseeded random counts (trips in 10..=59, playlists in 5..=24). Reads
    /// no repository and is not reproducible between calls.
    pub fn activity() -> Vec<ActivityPoint> {
        let mut rng = rand::rng();
        ACTIVITY_PERIODS
            .iter()
            .map(|period| ActivityPoint {
                period: (*period).to_string(),
                trips: rng.random_range(10..=59),
                playlists: rng.random_range(5..=24),
            })
            .collect()
    }
}
