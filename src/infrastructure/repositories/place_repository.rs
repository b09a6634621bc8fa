//! Place Repository Implementation
//!
//! PostgreSQL implementation of the PlaceRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{NewPlace, Place, PlacePatch, PlaceRepository};
use crate::shared::error::AppError;

const PLACE_COLUMNS: &str = "id, name, description, location, category, image_url, rating, \
                             status, amenities, coordinates, created_at";

#[derive(Debug, sqlx::FromRow)]
struct PlaceRow {
    id: i64,
    name: String,
    description: String,
    location: String,
    category: String,
    image_url: Option<String>,
    rating: f64,
    status: String,
    amenities: Option<String>,
    coordinates: Option<String>,
    created_at: DateTime<Utc>,
}

impl PlaceRow {
    fn into_place(self) -> Result<Place, AppError> {
        Ok(Place {
            id: self.id,
            name: self.name,
            description: self.description,
            location: self.location,
            category: self.category,
            image_url: self.image_url,
            rating: self.rating,
            status: self.status.parse()?,
            amenities: self.amenities,
            coordinates: self.coordinates,
            created_at: self.created_at,
        })
    }
}

/// PostgreSQL place repository implementation.
#[derive(Clone)]
pub struct PgPlaceRepository {
    pool: PgPool,
}

impl PgPlaceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaceRepository for PgPlaceRepository {
    async fn find_all(&self) -> Result<Vec<Place>, AppError> {
        let rows = sqlx::query_as::<_, PlaceRow>(&format!(
            "SELECT {PLACE_COLUMNS} FROM places ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PlaceRow::into_place).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Place>, AppError> {
        let row = sqlx::query_as::<_, PlaceRow>(&format!(
            "SELECT {PLACE_COLUMNS} FROM places WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(PlaceRow::into_place).transpose()
    }

    async fn create(&self, place: NewPlace) -> Result<Place, AppError> {
        let row = sqlx::query_as::<_, PlaceRow>(&format!(
            r#"
            INSERT INTO places (name, description, location, category, image_url,
                                rating, status, amenities, coordinates)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {PLACE_COLUMNS}
            "#
        ))
        .bind(&place.name)
        .bind(&place.description)
        .bind(&place.location)
        .bind(&place.category)
        .bind(&place.image_url)
        .bind(place.rating)
        .bind(place.status.as_str())
        .bind(&place.amenities)
        .bind(&place.coordinates)
        .fetch_one(&self.pool)
        .await?;

        row.into_place()
    }

    /// Unset patch fields bind as NULL and COALESCE keeps the stored value.
    async fn update(&self, id: i64, patch: PlacePatch) -> Result<Option<Place>, AppError> {
        let row = sqlx::query_as::<_, PlaceRow>(&format!(
            r#"
            UPDATE places
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                location = COALESCE($4, location),
                category = COALESCE($5, category),
                image_url = COALESCE($6, image_url),
                rating = COALESCE($7, rating),
                status = COALESCE($8, status),
                amenities = COALESCE($9, amenities),
                coordinates = COALESCE($10, coordinates)
            WHERE id = $1
            RETURNING {PLACE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.description)
        .bind(&patch.location)
        .bind(&patch.category)
        .bind(&patch.image_url)
        .bind(patch.rating)
        .bind(patch.status.map(|s| s.as_str()))
        .bind(&patch.amenities)
        .bind(&patch.coordinates)
        .fetch_optional(&self.pool)
        .await?;

        row.map(PlaceRow::into_place).transpose()
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(place_id = id, "Delete matched no place");
        }

        Ok(())
    }
}
