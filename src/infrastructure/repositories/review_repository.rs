//! Review Repository Implementation
//!
//! PostgreSQL implementation of the ReviewRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{ModerationStatus, NewReview, Review, ReviewRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct ReviewRow {
    id: i64,
    user_id: i64,
    user_name: String,
    place_id: i64,
    place_name: String,
    content: String,
    rating: i32,
    status: String,
    created_at: DateTime<Utc>,
}

impl ReviewRow {
    fn into_review(self) -> Result<Review, AppError> {
        Ok(Review {
            id: self.id,
            user_id: self.user_id,
            user_name: self.user_name,
            place_id: self.place_id,
            place_name: self.place_name,
            content: self.content,
            rating: self.rating,
            status: self.status.parse()?,
            created_at: self.created_at,
        })
    }
}

/// PostgreSQL review repository implementation.
#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn find_all(&self) -> Result<Vec<Review>, AppError> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT id, user_id, user_name, place_id, place_name, content,
                   rating, status, created_at
            FROM reviews
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ReviewRow::into_review).collect()
    }

    async fn create(&self, review: NewReview) -> Result<Review, AppError> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            INSERT INTO reviews (user_id, user_name, place_id, place_name, content, rating, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, user_name, place_id, place_name, content,
                      rating, status, created_at
            "#,
        )
        .bind(review.user_id)
        .bind(&review.user_name)
        .bind(review.place_id)
        .bind(&review.place_name)
        .bind(&review.content)
        .bind(review.rating)
        .bind(review.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        row.into_review()
    }

    async fn update_status(
        &self,
        id: i64,
        status: ModerationStatus,
    ) -> Result<Option<Review>, AppError> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            UPDATE reviews
            SET status = $2
            WHERE id = $1
            RETURNING id, user_id, user_name, place_id, place_name, content,
                      rating, status, created_at
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ReviewRow::into_review).transpose()
    }
}
