//! # Domain Layer
//!
//! The domain layer contains the records the admin backend manages and the
//! data-access contracts for them. It is independent of any HTTP or database
//! framework.
//!
//! ## Structure
//!
//! - **entities**: User, Place, Playlist, Trip, Review, Photo and their repository traits
//! - **value_objects**: Status enums and JSON-encoded place attributes
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - A by-id miss is `Ok(None)`, never an error

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
