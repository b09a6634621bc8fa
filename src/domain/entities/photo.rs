//! Photo entity and repository trait.
//!
//! Maps to the `photos` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ModerationStatus;
use crate::shared::error::AppError;

/// A user-uploaded photo attached to a place, playlist or trip.
///
/// `related_type` names the kind of record `related_id` points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: i64,
    pub uploader_id: i64,
    pub uploader_name: String,
    pub url: String,
    pub caption: Option<String>,
    pub related_type: String,
    pub related_id: Option<i64>,
    pub status: ModerationStatus,
    pub created_at: DateTime<Utc>,
}

impl Photo {
    pub fn is_pending(&self) -> bool {
        self.status == ModerationStatus::Pending
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPhoto {
    pub uploader_id: i64,
    pub uploader_name: String,
    pub url: String,
    pub caption: Option<String>,
    pub related_type: String,
    pub related_id: Option<i64>,
    pub status: ModerationStatus,
}

/// Repository trait for Photo data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoRepository: Send + Sync {
    /// All photos, newest first.
    async fn find_all(&self) -> Result<Vec<Photo>, AppError>;

    async fn create(&self, photo: NewPhoto) -> Result<Photo, AppError>;

    /// Replace only the status column. A miss is `Ok(None)`.
    async fn update_status(
        &self,
        id: i64,
        status: ModerationStatus,
    ) -> Result<Option<Photo>, AppError>;
}
