//! Dashboard aggregate shapes.
//!
//! These are read models, not stored entities.

use serde::{Deserialize, Serialize};

/// Headline counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_trips: usize,
    pub total_playlists: usize,
    pub total_places: usize,
    pub active_users: usize,
    pub pending_reviews: usize,
}

/// One point of the (mocked) activity chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPoint {
    /// Period label, `YYYY-MM`
    pub period: String,
    pub trips: u32,
    pub playlists: u32,
}
