//! Playlist entity and repository trait.
//!
//! Maps to the `playlists` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{PlaylistStatus, Visibility};
use crate::shared::error::AppError;

/// A curated list of places published by a user.
///
/// `creator_name` is a denormalized copy of the creator's name; no foreign
/// key is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub creator_id: i64,
    pub creator_name: String,
    pub status: PlaylistStatus,
    pub places_count: i32,
    pub is_featured: bool,
    pub visibility: Visibility,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the caller when inserting a playlist.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlaylist {
    pub name: String,
    pub description: Option<String>,
    pub creator_id: i64,
    pub creator_name: String,
    pub status: PlaylistStatus,
    pub places_count: i32,
    pub is_featured: bool,
    pub visibility: Visibility,
}

/// Repository trait for Playlist data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaylistRepository: Send + Sync {
    /// All playlists, newest first.
    async fn find_all(&self) -> Result<Vec<Playlist>, AppError>;

    async fn create(&self, playlist: NewPlaylist) -> Result<Playlist, AppError>;

    /// Replace only the status column. A miss is `Ok(None)`.
    async fn update_status(
        &self,
        id: i64,
        status: PlaylistStatus,
    ) -> Result<Option<Playlist>, AppError>;
}
