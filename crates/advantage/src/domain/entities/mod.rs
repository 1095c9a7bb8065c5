//! Domain Entities
//!
//! Core records held by the entity stores and the session service.

use serde::Serialize;

mod attendance;
mod employee;
mod project;
mod user;

pub use attendance::AttendanceRecord;
pub use employee::{Employee, NewEmployee};
pub use project::{NewProject, Project};
pub use user::{User, UserPatch};

/// A record an [`EntityStore`](crate::store::EntityStore) can manage:
/// keyed by an opaque identifier, with an embedded seed dataset and a
/// local-fallback constructor for failed creates.
pub trait Record: Clone + Send + Sync + 'static {
    /// Create draft: the record minus identifier and server-only fields
    type Draft: Serialize + Send + Sync;

    /// Identifier, unique within a collection snapshot
    fn id(&self) -> &str;

    /// Fixed placeholder dataset installed when the initial load fails
    fn seed() -> Vec<Self>;

    /// Fabricate a local-only record from a draft after a failed
    /// create. The identifier must be distinguishable from anything
    /// gateway-assigned.
    fn local_placeholder(draft: Self::Draft) -> Self;
}
