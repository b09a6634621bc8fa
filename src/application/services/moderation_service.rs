//! Moderation Service
//!
//! Pending-item queues for reviews and photos, and their status transitions.

use std::sync::Arc;

use crate::domain::{ModerationStatus, Photo, PhotoRepository, Review, ReviewRepository};
use crate::infrastructure::repositories::Repositories;
use crate::shared::error::AppError;

pub struct ModerationService {
    reviews: Arc<dyn ReviewRepository>,
    photos: Arc<dyn PhotoRepository>,
}

impl ModerationService {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            reviews: repos.reviews.clone(),
            photos: repos.photos.clone(),
        }
    }

    /// Reviews awaiting moderation. Filtered in memory after a full fetch.
    pub async fn pending_reviews(&self) -> Result<Vec<Review>, AppError> {
        let reviews = self.reviews.find_all().await?;
        Ok(reviews.into_iter().filter(Review::is_pending).collect())
    }

    /// Photos awaiting moderation. Filtered in memory after a full fetch.
    pub async fn pending_photos(&self) -> Result<Vec<Photo>, AppError> {
        let photos = self.photos.find_all().await?;
        Ok(photos.into_iter().filter(Photo::is_pending).collect())
    }

    pub async fn set_review_status(
        &self,
        id: i64,
        status: ModerationStatus,
    ) -> Result<Review, AppError> {
        let review = self
            .reviews
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Review with id {} not found", id)))?;

        tracing::info!(review_id = id, status = %status, "Review moderated");
        Ok(review)
    }

    pub async fn set_photo_status(
        &self,
        id: i64,
        status: ModerationStatus,
    ) -> Result<Photo, AppError> {
        let photo = self
            .photos
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Photo with id {} not found", id)))?;

        tracing::info!(photo_id = id, status = %status, "Photo moderated");
        Ok(photo)
    }
}
