//! Photo Repository Implementation
//!
//! PostgreSQL implementation of the PhotoRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{ModerationStatus, NewPhoto, Photo, PhotoRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct PhotoRow {
    id: i64,
    uploader_id: i64,
    uploader_name: String,
    url: String,
    caption: Option<String>,
    related_type: String,
    related_id: Option<i64>,
    status: String,
    created_at: DateTime<Utc>,
}

impl PhotoRow {
    fn into_photo(self) -> Result<Photo, AppError> {
        Ok(Photo {
            id: self.id,
            uploader_id: self.uploader_id,
            uploader_name: self.uploader_name,
            url: self.url,
            caption: self.caption,
            related_type: self.related_type,
            related_id: self.related_id,
            status: self.status.parse()?,
            created_at: self.created_at,
        })
    }
}

/// PostgreSQL photo repository implementation.
#[derive(Clone)]
pub struct PgPhotoRepository {
    pool: PgPool,
}

impl PgPhotoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhotoRepository for PgPhotoRepository {
    async fn find_all(&self) -> Result<Vec<Photo>, AppError> {
        let rows = sqlx::query_as::<_, PhotoRow>(
            r#"
            SELECT id, uploader_id, uploader_name, url, caption, related_type,
                   related_id, status, created_at
            FROM photos
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PhotoRow::into_photo).collect()
    }

    async fn create(&self, photo: NewPhoto) -> Result<Photo, AppError> {
        let row = sqlx::query_as::<_, PhotoRow>(
            r#"
            INSERT INTO photos (uploader_id, uploader_name, url, caption,
                                related_type, related_id, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, uploader_id, uploader_name, url, caption, related_type,
                      related_id, status, created_at
            "#,
        )
        .bind(photo.uploader_id)
        .bind(&photo.uploader_name)
        .bind(&photo.url)
        .bind(&photo.caption)
        .bind(&photo.related_type)
        .bind(photo.related_id)
        .bind(photo.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        row.into_photo()
    }

    async fn update_status(
        &self,
        id: i64,
        status: ModerationStatus,
    ) -> Result<Option<Photo>, AppError> {
        let row = sqlx::query_as::<_, PhotoRow>(
            r#"
            UPDATE photos
            SET status = $2
            WHERE id = $1
            RETURNING id, uploader_id, uploader_name, url, caption, related_type,
                      related_id, status, created_at
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(PhotoRow::into_photo).transpose()
    }
}
