//! Application Layer
//!
//! Request DTOs, body normalization and the services that orchestrate
//! repository calls for the presentation layer.

pub mod dto;
pub mod services;
