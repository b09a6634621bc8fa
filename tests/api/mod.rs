//! REST API endpoint tests, one module per resource.

mod dashboard_tests;
mod health_tests;
mod moderation_tests;
mod seed_tests;
mod user_tests;
