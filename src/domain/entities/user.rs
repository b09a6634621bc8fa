//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::UserStatus;
use crate::shared::error::AppError;

/// A user account as seen by platform administrators.
///
/// Maps to the `users` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: TEXT NOT NULL
/// - email: TEXT NOT NULL
/// - role: TEXT NOT NULL DEFAULT 'user'
/// - status: TEXT NOT NULL DEFAULT 'active'
/// - joined_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
    pub joined_at: DateTime<Utc>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

/// Fields supplied by the caller when inserting a user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

/// Repository trait for User data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, newest `joined_at` first.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// Find a user by ID. A miss is `Ok(None)`.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Insert a user and return the stored row.
    async fn create(&self, user: NewUser) -> Result<User, AppError>;

    /// Replace only the status column. A miss is `Ok(None)`.
    async fn update_status(&self, id: i64, status: UserStatus) -> Result<Option<User>, AppError>;

    /// Delete a user. Deleting a missing ID succeeds.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
