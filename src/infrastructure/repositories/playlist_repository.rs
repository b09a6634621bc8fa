//! Playlist Repository Implementation
//!
//! PostgreSQL implementation of the PlaylistRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{NewPlaylist, Playlist, PlaylistRepository, PlaylistStatus};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct PlaylistRow {
    id: i64,
    name: String,
    description: Option<String>,
    creator_id: i64,
    creator_name: String,
    status: String,
    places_count: i32,
    is_featured: bool,
    visibility: String,
    created_at: DateTime<Utc>,
}

impl PlaylistRow {
    fn into_playlist(self) -> Result<Playlist, AppError> {
        Ok(Playlist {
            id: self.id,
            name: self.name,
            description: self.description,
            creator_id: self.creator_id,
            creator_name: self.creator_name,
            status: self.status.parse()?,
            places_count: self.places_count,
            is_featured: self.is_featured,
            visibility: self.visibility.parse()?,
            created_at: self.created_at,
        })
    }
}

/// PostgreSQL playlist repository implementation.
#[derive(Clone)]
pub struct PgPlaylistRepository {
    pool: PgPool,
}

impl PgPlaylistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaylistRepository for PgPlaylistRepository {
    async fn find_all(&self) -> Result<Vec<Playlist>, AppError> {
        let rows = sqlx::query_as::<_, PlaylistRow>(
            r#"
            SELECT id, name, description, creator_id, creator_name, status,
                   places_count, is_featured, visibility, created_at
            FROM playlists
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PlaylistRow::into_playlist).collect()
    }

    async fn create(&self, playlist: NewPlaylist) -> Result<Playlist, AppError> {
        let row = sqlx::query_as::<_, PlaylistRow>(
            r#"
            INSERT INTO playlists (name, description, creator_id, creator_name, status,
                                   places_count, is_featured, visibility)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, description, creator_id, creator_name, status,
                      places_count, is_featured, visibility, created_at
            "#,
        )
        .bind(&playlist.name)
        .bind(&playlist.description)
        .bind(playlist.creator_id)
        .bind(&playlist.creator_name)
        .bind(playlist.status.as_str())
        .bind(playlist.places_count)
        .bind(playlist.is_featured)
        .bind(playlist.visibility.as_str())
        .fetch_one(&self.pool)
        .await?;

        row.into_playlist()
    }

    async fn update_status(
        &self,
        id: i64,
        status: PlaylistStatus,
    ) -> Result<Option<Playlist>, AppError> {
        let row = sqlx::query_as::<_, PlaylistRow>(
            r#"
            UPDATE playlists
            SET status = $2
            WHERE id = $1
            RETURNING id, name, description, creator_id, creator_name, status,
                      places_count, is_featured, visibility, created_at
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(PlaylistRow::into_playlist).transpose()
    }
}
