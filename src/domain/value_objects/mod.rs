//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **Status enums**: per-entity lifecycle states stored as lowercase text
//! - **Coordinates / Amenities**: place attributes encoded as JSON text

mod coordinates;
mod status;

pub use coordinates::*;
pub use status::*;
