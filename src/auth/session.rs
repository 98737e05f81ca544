use crate::types::{AppError, AuthSession, Result, StudentProfile};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Storage key holding the opaque session token.
pub const TOKEN_KEY: &str = "studentToken";
/// Storage key holding the serialized profile snapshot.
pub const PROFILE_KEY: &str = "studentData";

/// String key-value persistence (browser local storage or a stand-in).
///
/// Each call is atomic per key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-process store for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// The only code path that touches the session keys.
#[derive(Debug, Clone)]
pub struct SessionRepository<S> {
    store: S,
}

impl<S: KeyValueStore> SessionRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persist the token and profile snapshot: one write per key.
    ///
    /// A failed write removes both keys, so a half-written session never
    /// pairs a new token with an older profile.
    pub fn save(&self, session: &AuthSession) -> Result<()> {
        let profile = serde_json::to_string(&session.student)?;
        let written = self
            .store
            .set(TOKEN_KEY, &session.token)
            .and_then(|()| self.store.set(PROFILE_KEY, &profile));
        if let Err(e) = written {
            tracing::warn!(error = %e, "session save failed, discarding partial write");
            if let Err(rollback) = self.clear() {
                tracing::error!(error = %rollback, "could not discard partial session");
            }
            return Err(e);
        }
        tracing::info!(email = %session.student.email, "session saved");
        Ok(())
    }

    /// Read the session written by an earlier sign-in.
    ///
    /// Returns `None` unless both keys are present.
    pub fn load(&self) -> Result<Option<AuthSession>> {
        let token = match self.store.get(TOKEN_KEY)? {
            Some(token) if !token.is_empty() => token,
            _ => return Ok(None),
        };
        let Some(raw) = self.store.get(PROFILE_KEY)? else {
            return Ok(None);
        };
        let student: StudentProfile = serde_json::from_str(&raw)
            .map_err(|e| AppError::Storage(format!("Corrupt profile snapshot: {}", e)))?;
        Ok(Some(AuthSession { token, student }))
    }

    /// Remove both keys. Safe to call when nothing is stored.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(PROFILE_KEY)?;
        tracing::info!("session cleared");
        Ok(())
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.load(), Ok(Some(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> AuthSession {
        AuthSession {
            token: "tok-123".to_string(),
            student: StudentProfile {
                name: "Ravi".to_string(),
                email: "ravi@college.edu".to_string(),
                usn: Some("1XX21EC042".to_string()),
                ..StudentProfile::default()
            },
        }
    }

    #[test]
    fn test_save_then_load() {
        let repo = SessionRepository::new(MemoryStore::default());
        repo.save(&session()).unwrap();

        assert_eq!(repo.store().len(), 2);
        assert_eq!(
            repo.store().get(TOKEN_KEY).unwrap().as_deref(),
            Some("tok-123")
        );
        assert_eq!(repo.load().unwrap(), Some(session()));
        assert!(repo.is_signed_in());
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let repo = SessionRepository::new(MemoryStore::default());
        repo.save(&session()).unwrap();

        repo.clear().unwrap();
        repo.clear().unwrap();

        assert!(repo.store().is_empty());
        assert_eq!(repo.load().unwrap(), None);
    }

    #[test]
    fn test_load_requires_both_keys() {
        let repo = SessionRepository::new(MemoryStore::default());
        repo.store().set(TOKEN_KEY, "tok").unwrap();
        assert_eq!(repo.load().unwrap(), None);
    }

    #[test]
    fn test_corrupt_profile_is_an_error() {
        let repo = SessionRepository::new(MemoryStore::default());
        repo.store().set(TOKEN_KEY, "tok").unwrap();
        repo.store().set(PROFILE_KEY, "{not json").unwrap();

        assert!(matches!(repo.load(), Err(AppError::Storage(_))));
        assert!(!repo.is_signed_in());
    }
}
