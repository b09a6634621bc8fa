//! Application Services
//!
//! Operations that span more than one repository call.
//!
//! ## Available Services
//!
//! - **DashboardService**: aggregate counts and the mocked activity series
//! - **ModerationService**: pending review/photo queues and status transitions

pub mod dashboard_service;
pub mod moderation_service;

pub use dashboard_service::{DashboardService, ACTIVITY_PERIODS};
pub use moderation_service::ModerationService;
