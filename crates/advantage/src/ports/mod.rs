//! Ports (Interfaces)
//!
//! Abstract interfaces between the stores/services and the outside
//! world. Implementations live in the adapters layer.

pub mod resources;
pub mod session;

// Re-exports
pub use resources::*;
pub use session::*;
