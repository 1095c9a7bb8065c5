//! Resource Ports
//!
//! Abstract interfaces over the remote data gateway: one CRUD surface
//! per entity collection, plus the auth endpoints. The HTTP adapter
//! lives in `adapters::gateway`; stores depend only on these traits.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::domain::{GatewayError, Project, Record, User};

/// One resource collection on the gateway: a single HTTP call per
/// operation, parsed JSON or a [`GatewayError`].
#[async_trait]
pub trait Resource<T: Record>: Send + Sync {
    /// Fetch the whole collection, gateway order preserved
    async fn list(&self) -> Result<Vec<T>, GatewayError>;

    /// Create from a draft; returns the gateway's canonical record
    /// with its assigned identifier and defaults
    async fn create(&self, draft: &T::Draft) -> Result<T, GatewayError>;

    /// Replace the record with the matching identifier
    async fn update(&self, record: &T) -> Result<(), GatewayError>;

    /// Delete the record with the given identifier
    async fn delete(&self, id: &str) -> Result<(), GatewayError>;
}

/// Project collection with the team-reassignment sub-relation
#[async_trait]
pub trait ProjectResource: Resource<Project> {
    /// Replace a project's assigned team (`PUT .../{id}/team`)
    async fn update_team(
        &self,
        project_id: &str,
        team_ids: &BTreeSet<String>,
    ) -> Result<(), GatewayError>;
}

/// Auth endpoints on the gateway
#[async_trait]
pub trait AuthResource: Send + Sync {
    /// `POST /auth/login`; returns the authenticated user record
    async fn login(&self, email: &str, pass: &str) -> Result<User, GatewayError>;

    /// `POST /auth/logout`; the response body is ignored by callers
    async fn logout(&self) -> Result<(), GatewayError>;
}
