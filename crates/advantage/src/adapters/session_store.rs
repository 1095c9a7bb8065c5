//! Session persistence strategies
//!
//! Three [`SessionStore`] implementations: a durable JSON file under
//! the user config dir, a process-scoped in-memory slot, and a mirror
//! composing a durable and a scoped store (the analogue of writing the
//! user record to both browser storages under one fixed key).

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::domain::{SessionError, User};
use crate::ports::SessionStore;

const SESSION_DIR: &str = "advantage";
const SESSION_FILE: &str = "session.json";

/// Durable store: one JSON file under `~/.config/advantage/`
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store under the platform config directory
    pub fn new() -> Result<Self, SessionError> {
        let dir = dirs::config_dir()
            .ok_or(SessionError::MissingConfigDir)?
            .join(SESSION_DIR);
        Ok(Self {
            path: dir.join(SESSION_FILE),
        })
    }

    /// Store at an explicit path
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<User>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let user: User = serde_json::from_str(&content)?;
        Ok(Some(user))
    }

    fn save(&self, user: &User) -> Result<(), SessionError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(user)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Process-scoped store: gone when the process ends
#[derive(Default)]
pub struct MemorySessionStore {
    slot: RwLock<Option<User>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<User>, SessionError> {
        Ok(self.slot.read().expect("session slot poisoned").clone())
    }

    fn save(&self, user: &User) -> Result<(), SessionError> {
        *self.slot.write().expect("session slot poisoned") = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.slot.write().expect("session slot poisoned") = None;
        Ok(())
    }
}

/// Mirror writing to both a durable and a scoped store; reads prefer
/// the durable copy and fall back to the scoped one.
pub struct MirroredSessionStore {
    durable: Box<dyn SessionStore>,
    scoped: Box<dyn SessionStore>,
}

impl MirroredSessionStore {
    pub fn new(durable: Box<dyn SessionStore>, scoped: Box<dyn SessionStore>) -> Self {
        Self { durable, scoped }
    }
}

impl SessionStore for MirroredSessionStore {
    fn load(&self) -> Result<Option<User>, SessionError> {
        if let Some(user) = self.durable.load()? {
            return Ok(Some(user));
        }
        self.scoped.load()
    }

    fn save(&self, user: &User) -> Result<(), SessionError> {
        self.durable.save(user)?;
        self.scoped.save(user)
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.durable.clear()?;
        self.scoped.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;

    fn sample_user() -> User {
        User {
            id: "u1".to_string(),
            name: "Alex Vance".to_string(),
            email: "alex.vance@example.com".to_string(),
            avatar_url: "https://picsum.photos/id/64/200/200".to_string(),
            role: UserRole::Admin,
            department: "Management".to_string(),
        }
    }

    #[test]
    fn memory_store_round_trips_and_clears() {
        let store = MemorySessionStore::new();
        assert!(store.load().unwrap().is_none());

        store.save(&sample_user()).unwrap();
        assert_eq!(store.load().unwrap().unwrap().id, "u1");

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn file_store_round_trips_and_clears() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::at_path(dir.path().join("session.json"));

        assert!(store.load().unwrap().is_none());
        store.save(&sample_user()).unwrap();
        assert_eq!(store.load().unwrap().unwrap().email, "alex.vance@example.com");

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // Clearing an already-empty store is fine
        store.clear().unwrap();
    }

    #[test]
    fn mirror_prefers_durable_and_clears_both() {
        let dir = tempfile::tempdir().unwrap();
        let durable = FileSessionStore::at_path(dir.path().join("session.json"));
        let path = durable.path().clone();

        let mirror =
            MirroredSessionStore::new(Box::new(durable), Box::new(MemorySessionStore::new()));

        mirror.save(&sample_user()).unwrap();
        assert!(path.exists());
        assert_eq!(mirror.load().unwrap().unwrap().id, "u1");

        mirror.clear().unwrap();
        assert!(!path.exists());
        assert!(mirror.load().unwrap().is_none());
    }
}
