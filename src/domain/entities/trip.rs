//! Trip entity and repository trait.
//!
//! Trips are only inserted (by seeding) and counted for the dashboard.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::TripStatus;
use crate::shared::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: i64,
    pub user_id: i64,
    pub destination: String,
    pub status: TripStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTrip {
    pub user_id: i64,
    pub destination: String,
    pub status: TripStatus,
}

/// Repository trait for Trip data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// All trips, in store order.
    async fn find_all(&self) -> Result<Vec<Trip>, AppError>;

    async fn create(&self, trip: NewTrip) -> Result<Trip, AppError>;
}
