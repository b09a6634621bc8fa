//! HTTP API
//!
//! Routes, handlers and extractors for the admin REST API.

pub mod extractors;
pub mod handlers;
pub mod routes;
