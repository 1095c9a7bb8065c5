//! Auth Session Service
//!
//! Single source of truth for the authenticated user. The session has
//! an explicit lifecycle — `init` (rehydrate), `login` (set), `logout`
//! (clear) — and delegates persistence to a [`SessionStore`] strategy.
//! Persistence failures never abort an auth operation; they are logged
//! and the in-memory state stays authoritative.

use std::sync::RwLock;

use tracing::{debug, warn};

use crate::domain::{GatewayError, User, UserPatch};
use crate::ports::{AuthResource, SessionStore};

/// Owns the authenticated session for one process
pub struct AuthService<A: AuthResource> {
    resource: A,
    store: Box<dyn SessionStore>,
    current: RwLock<Option<User>>,
}

impl<A: AuthResource> AuthService<A> {
    pub fn new(resource: A, store: Box<dyn SessionStore>) -> Self {
        Self {
            resource,
            store,
            current: RwLock::new(None),
        }
    }

    /// Rehydrate a persisted session, if any. No network round trip.
    pub fn init(&self) {
        match self.store.load() {
            Ok(Some(user)) => {
                debug!(user = %user.email, "session rehydrated");
                *self.current.write().expect("session lock poisoned") = Some(user);
            }
            Ok(None) => {}
            Err(err) => warn!(error = %err, "could not rehydrate session"),
        }
    }

    /// Authenticate against the gateway. On success the user becomes
    /// the current session and is persisted; stale persisted state
    /// from a previous login is cleared first.
    pub async fn login(&self, email: &str, pass: &str) -> Result<User, GatewayError> {
        let user = self.resource.login(email, pass).await?;

        if let Err(err) = self.store.clear() {
            warn!(error = %err, "could not clear stale session state");
        }
        if let Err(err) = self.store.save(&user) {
            warn!(error = %err, "could not persist session");
        }
        *self.current.write().expect("session lock poisoned") = Some(user.clone());
        Ok(user)
    }

    /// End the session. The gateway call is fire-and-forget; the local
    /// session is cleared regardless of its result.
    pub async fn logout(&self) {
        if let Err(err) = self.resource.logout().await {
            debug!(error = %err, "logout call failed, clearing locally anyway");
        }
        *self.current.write().expect("session lock poisoned") = None;
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "could not clear persisted session");
        }
    }

    /// Merge a partial profile update into the current user and
    /// persist the result. No-op when nobody is logged in.
    pub fn update(&self, patch: UserPatch) -> Option<User> {
        let mut guard = self.current.write().expect("session lock poisoned");
        let user = guard.as_mut()?;
        user.apply(patch);

        if let Err(err) = self.store.save(user) {
            warn!(error = %err, "could not persist updated session");
        }
        Some(user.clone())
    }

    pub fn current(&self) -> Option<User> {
        self.current.read().expect("session lock poisoned").clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().expect("session lock poisoned").is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use reqwest::StatusCode;

    use super::*;
    use crate::adapters::MemorySessionStore;
    use crate::domain::UserRole;

    fn sample_user() -> User {
        User {
            id: "u1".to_string(),
            name: "Alex Vance".to_string(),
            email: "alex.vance@example.com".to_string(),
            avatar_url: "https://picsum.photos/id/64/200/200".to_string(),
            role: UserRole::Manager,
            department: "Client Services".to_string(),
        }
    }

    struct StubAuth {
        fail: Arc<AtomicBool>,
    }

    impl StubAuth {
        fn new() -> (Self, Arc<AtomicBool>) {
            let fail = Arc::new(AtomicBool::new(false));
            (Self { fail: fail.clone() }, fail)
        }
    }

    #[async_trait]
    impl AuthResource for StubAuth {
        async fn login(&self, email: &str, _pass: &str) -> Result<User, GatewayError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(GatewayError::Status {
                    status: StatusCode::UNAUTHORIZED,
                    body: "bad credentials".to_string(),
                });
            }
            let mut user = sample_user();
            user.email = email.to_string();
            Ok(user)
        }

        async fn logout(&self) -> Result<(), GatewayError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn login_sets_and_persists_the_session() {
        let (auth, _) = StubAuth::new();
        let service = AuthService::new(auth, Box::new(MemorySessionStore::new()));

        assert!(!service.is_authenticated());
        let user = service.login("alex.vance@example.com", "pw").await.unwrap();
        assert_eq!(user.email, "alex.vance@example.com");
        assert!(service.is_authenticated());
    }

    #[tokio::test]
    async fn failed_login_leaves_no_session() {
        let (auth, fail) = StubAuth::new();
        fail.store(true, Ordering::SeqCst);
        let service = AuthService::new(auth, Box::new(MemorySessionStore::new()));

        assert!(service.login("alex.vance@example.com", "pw").await.is_err());
        assert!(!service.is_authenticated());
        assert!(service.current().is_none());
    }

    #[tokio::test]
    async fn init_rehydrates_a_persisted_session() {
        let store = MemorySessionStore::new();
        store.save(&sample_user()).unwrap();

        let (auth, _) = StubAuth::new();
        let service = AuthService::new(auth, Box::new(store));
        service.init();

        assert_eq!(service.current().unwrap().id, "u1");
    }

    #[tokio::test]
    async fn logout_clears_memory_and_persistence() {
        let (auth, _) = StubAuth::new();
        let service = AuthService::new(auth, Box::new(MemorySessionStore::new()));
        service.login("alex.vance@example.com", "pw").await.unwrap();

        service.logout().await;
        assert!(!service.is_authenticated());

        // A fresh init finds nothing persisted either
        service.init();
        assert!(service.current().is_none());
    }

    #[tokio::test]
    async fn update_merges_and_returns_the_patched_user() {
        let (auth, _) = StubAuth::new();
        let service = AuthService::new(auth, Box::new(MemorySessionStore::new()));
        service.login("alex.vance@example.com", "pw").await.unwrap();

        let updated = service
            .update(UserPatch {
                department: Some("Operations".to_string()),
                ..UserPatch::default()
            })
            .unwrap();

        assert_eq!(updated.department, "Operations");
        assert_eq!(service.current().unwrap().department, "Operations");
    }

    #[tokio::test]
    async fn update_without_a_session_is_a_noop() {
        let (auth, _) = StubAuth::new();
        let service = AuthService::new(auth, Box::new(MemorySessionStore::new()));

        assert!(service.update(UserPatch::default()).is_none());
    }
}
