//! Entity Store
//!
//! In-memory authoritative cache of one resource collection,
//! synchronized with the remote gateway via optimistic mutation with
//! rollback. The snapshot is an immutable `Arc<Vec<T>>` replaced
//! wholesale on every transition, so a reader holding a snapshot never
//! observes a torn write.
//!
//! Gateway failures never surface as `Err`: the store converts them
//! into the documented fallbacks (seed data on load failure, a local
//! placeholder on create failure, full snapshot rollback on
//! update/delete failure) and reports which path was taken through
//! [`Mutation`] / [`LoadOutcome`].
//!
//! Mutations are not serialized per record. Each call captures its
//! rollback snapshot at entry; when two mutations against the same
//! store are in flight, a rollback from the earlier one restores the
//! snapshot as it was before the later one's optimistic write.

use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::domain::{Employee, GatewayError, Project, Record};
use crate::ports::{ProjectResource, Resource};

/// How an initial load was satisfied
#[derive(Debug)]
pub enum LoadOutcome {
    /// Snapshot replaced with the gateway's collection (entry count)
    Fetched(usize),
    /// Gateway unavailable; the embedded seed dataset was installed
    SeedFallback(GatewayError),
}

/// Result of one mutation, reported instead of thrown.
///
/// A caller that ignores this value gets the legacy silent-fallback
/// behavior; one that inspects it can tell "synced" from
/// "failed-but-faked-locally" and "failed-and-rolled-back".
#[derive(Debug)]
pub enum Mutation<T> {
    /// The optimistic state was confirmed by the gateway
    Synced(T),
    /// Create failed; a local placeholder record was appended instead
    LocalOnly(T),
    /// The call failed and the pre-mutation snapshot was restored
    RolledBack(GatewayError),
    /// No entry matched the identifier; nothing was done
    Skipped,
}

impl<T> Mutation<T> {
    pub fn is_synced(&self) -> bool {
        matches!(self, Mutation::Synced(_))
    }

    /// The record now present in the snapshot, when the mutation left one
    pub fn record(&self) -> Option<&T> {
        match self {
            Mutation::Synced(record) | Mutation::LocalOnly(record) => Some(record),
            _ => None,
        }
    }
}

/// In-memory store for one entity collection
pub struct EntityStore<T: Record, R: Resource<T>> {
    resource: R,
    snapshot: RwLock<Arc<Vec<T>>>,
}

impl<T: Record, R: Resource<T>> EntityStore<T, R> {
    /// Create an empty store backed by `resource`
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            snapshot: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Current snapshot; a cheap handle that stays valid while the
    /// store moves on
    pub fn snapshot(&self) -> Arc<Vec<T>> {
        self.snapshot.read().expect("snapshot lock poisoned").clone()
    }

    fn install(&self, next: Vec<T>) {
        *self.snapshot.write().expect("snapshot lock poisoned") = Arc::new(next);
    }

    fn restore(&self, previous: Arc<Vec<T>>) {
        *self.snapshot.write().expect("snapshot lock poisoned") = previous;
    }

    /// Copy-on-write edit: builds the next snapshot and swaps it in
    /// under the lock.
    fn apply(&self, edit: impl FnOnce(&mut Vec<T>)) {
        let mut guard = self.snapshot.write().expect("snapshot lock poisoned");
        let mut next = guard.as_ref().clone();
        edit(&mut next);
        *guard = Arc::new(next);
    }

    /// Fetch the collection from the gateway, replacing the snapshot
    /// verbatim. One attempt, no retry; on failure the embedded seed
    /// dataset is installed so there is always something to render.
    pub async fn load(&self) -> LoadOutcome {
        match self.resource.list().await {
            Ok(records) => {
                debug!(count = records.len(), "collection loaded from gateway");
                let count = records.len();
                self.install(records);
                LoadOutcome::Fetched(count)
            }
            Err(err) => {
                warn!(error = %err, "load failed, installing seed dataset");
                self.install(T::seed());
                LoadOutcome::SeedFallback(err)
            }
        }
    }

    /// Create a record from a draft.
    ///
    /// On success the gateway's canonical record (with its assigned
    /// identifier and defaults) is appended. On failure a local
    /// placeholder is appended instead; it is never reconciled with
    /// the gateway later.
    pub async fn add(&self, draft: T::Draft) -> Mutation<T> {
        match self.resource.create(&draft).await {
            Ok(record) => {
                self.apply(|snapshot| snapshot.push(record.clone()));
                Mutation::Synced(record)
            }
            Err(err) => {
                warn!(error = %err, "create failed, appending local placeholder");
                let record = T::local_placeholder(draft);
                self.apply(|snapshot| snapshot.push(record.clone()));
                Mutation::LocalOnly(record)
            }
        }
    }

    /// Replace the entry matching `record`'s identifier, optimistically.
    ///
    /// The snapshot is updated before the gateway call resolves. On
    /// success the optimistic state is final (the response body is not
    /// re-merged); on failure the entire pre-mutation snapshot is
    /// restored. Unknown identifiers are skipped without a call.
    pub async fn update(&self, record: T) -> Mutation<T> {
        let previous = self.snapshot();
        if !previous.iter().any(|entry| entry.id() == record.id()) {
            return Mutation::Skipped;
        }

        self.apply(|snapshot| {
            if let Some(slot) = snapshot.iter_mut().find(|entry| entry.id() == record.id()) {
                *slot = record.clone();
            }
        });

        match self.resource.update(&record).await {
            Ok(()) => Mutation::Synced(record),
            Err(err) => {
                warn!(id = %record.id(), error = %err, "update failed, rolling back");
                self.restore(previous);
                Mutation::RolledBack(err)
            }
        }
    }

    /// Remove the entry with the given identifier, optimistically.
    /// Rollback restores the whole prior sequence, including order.
    pub async fn remove(&self, id: &str) -> Mutation<T> {
        let previous = self.snapshot();
        let Some(removed) = previous.iter().find(|entry| entry.id() == id).cloned() else {
            return Mutation::Skipped;
        };

        self.apply(|snapshot| snapshot.retain(|entry| entry.id() != id));

        match self.resource.delete(id).await {
            Ok(()) => Mutation::Synced(removed),
            Err(err) => {
                warn!(id = %id, error = %err, "delete failed, rolling back");
                self.restore(previous);
                Mutation::RolledBack(err)
            }
        }
    }
}

impl<R: Resource<Employee>> EntityStore<Employee, R> {
    /// Replace the snapshot with the seed dataset, unconditionally.
    /// Local-only recovery affordance; no gateway call.
    pub fn reset(&self) {
        self.install(Employee::seed());
    }
}

impl<R: ProjectResource> EntityStore<Project, R> {
    /// Reassign one project's team, optimistically. The member set is
    /// taken as given; resolving ids to real employees is the view
    /// layer's concern. Full snapshot rollback on failure.
    pub async fn set_team(
        &self,
        project_id: &str,
        team_ids: std::collections::BTreeSet<String>,
    ) -> Mutation<Project> {
        let previous = self.snapshot();
        let Some(mut updated) = previous.iter().find(|p| p.id == project_id).cloned() else {
            return Mutation::Skipped;
        };
        updated.assigned_team_ids = team_ids.clone();

        self.apply(|snapshot| {
            if let Some(slot) = snapshot.iter_mut().find(|p| p.id == project_id) {
                *slot = updated.clone();
            }
        });

        match self.resource.update_team(project_id, &team_ids).await {
            Ok(()) => Mutation::Synced(updated),
            Err(err) => {
                warn!(id = %project_id, error = %err, "team update failed, rolling back");
                self.restore(previous);
                Mutation::RolledBack(err)
            }
        }
    }
}
