//! Session Store Port
//!
//! Persistence strategy for the authenticated user record. The auth
//! service owns the session lifecycle; where the record survives
//! between runs is a pluggable concern.

use crate::domain::{SessionError, User};

/// Where the authenticated user record is persisted
pub trait SessionStore: Send + Sync {
    /// Rehydrate the persisted user, if any
    fn load(&self) -> Result<Option<User>, SessionError>;

    /// Persist the user under the store's fixed key
    fn save(&self, user: &User) -> Result<(), SessionError>;

    /// Remove any persisted user
    fn clear(&self) -> Result<(), SessionError>;
}
