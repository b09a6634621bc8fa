//! Review entity and repository trait.
//!
//! Maps to the `reviews` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ModerationStatus;
use crate::shared::error::AppError;

/// A user's review of a place.
///
/// `user_name` and `place_name` are denormalized copies kept for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub place_id: i64,
    pub place_name: String,
    pub content: String,
    pub rating: i32,
    pub status: ModerationStatus,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn is_pending(&self) -> bool {
        self.status == ModerationStatus::Pending
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub user_id: i64,
    pub user_name: String,
    pub place_id: i64,
    pub place_name: String,
    pub content: String,
    pub rating: i32,
    pub status: ModerationStatus,
}

/// Repository trait for Review data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// All reviews, newest first.
    async fn find_all(&self) -> Result<Vec<Review>, AppError>;

    async fn create(&self, review: NewReview) -> Result<Review, AppError>;

    /// Replace only the status column. A miss is `Ok(None)`.
    async fn update_status(
        &self,
        id: i64,
        status: ModerationStatus,
    ) -> Result<Option<Review>, AppError>;
}
