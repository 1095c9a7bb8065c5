//! Domain Layer
//!
//! Entities, value objects, and error types.

pub mod entities;
pub mod errors;
pub mod value_objects;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
pub use value_objects::*;
