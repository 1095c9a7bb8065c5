//! Adapters
//!
//! Concrete implementations of the ports: the HTTP gateway client and
//! the session persistence strategies.

pub mod gateway;
pub mod session_store;

pub use gateway::Gateway;
pub use session_store::{FileSessionStore, MemorySessionStore, MirroredSessionStore};
