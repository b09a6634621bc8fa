//! Trip Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{NewTrip, Trip, TripRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct TripRow {
    id: i64,
    user_id: i64,
    destination: String,
    status: String,
}

impl TripRow {
    fn into_trip(self) -> Result<Trip, AppError> {
        Ok(Trip {
            id: self.id,
            user_id: self.user_id,
            destination: self.destination,
            status: self.status.parse()?,
        })
    }
}

#[derive(Clone)]
pub struct PgTripRepository {
    pool: PgPool,
}

impl PgTripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TripRepository for PgTripRepository {
    async fn find_all(&self) -> Result<Vec<Trip>, AppError> {
        let rows = sqlx::query_as::<_, TripRow>(
            "SELECT id, user_id, destination, status FROM trips",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TripRow::into_trip).collect()
    }

    async fn create(&self, trip: NewTrip) -> Result<Trip, AppError> {
        let row = sqlx::query_as::<_, TripRow>(
            r#"
            INSERT INTO trips (user_id, destination, status)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, destination, status
            "#,
        )
        .bind(trip.user_id)
        .bind(&trip.destination)
        .bind(trip.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        row.into_trip()
    }
}
