//! # Travel Admin Library
//!
//! Administrative backend for a travel-content platform:
//! - CRUD endpoints over users, places, playlists, trips, reviews and photos
//! - Dashboard aggregate counts and a mocked activity series
//! - Moderation queues for pending reviews and photos
//! - PostgreSQL for persistent storage, seeded with demo data on first start
//!
//! ## Architecture
//!
//! - **Domain Layer**: Entities, status enums and repository traits
//! - **Application Layer**: Request DTOs and multi-repository services
//! - **Infrastructure Layer**: PostgreSQL repositories, migrations, seeding, metrics
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! travel_admin/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, repository traits
//! +-- application/    DTOs and services
//! +-- infrastructure/ Database, repositories, metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Errors and validation helpers
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
