// src/core/store.rs — In-memory session store
//
// Owns every session for one run of the program. Sessions keep creation
// order (tab order) and the store always holds at least one: the protected
// default session refuses deletion, so the store can never empty out.

use thiserror::Error;

use super::session::{Session, DEFAULT_SESSION_KEY};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Unknown chat '{0}'")]
    UnknownSession(String),

    #[error("The first chat cannot be deleted")]
    ProtectedSession,

    #[error("Load a document before asking questions")]
    NoDocument,
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Vec<Session>,
    active: String,
    counter: u32,
    default_model: String,
}

impl SessionStore {
    /// Seed the store with the protected default session.
    pub fn new(default_model: impl Into<String>) -> Self {
        let default_model = default_model.into();
        let first = Session::with_key(DEFAULT_SESSION_KEY.to_string(), 1, &default_model);
        Self {
            active: first.key.clone(),
            sessions: vec![first],
            counter: 1,
            default_model,
        }
    }

    /// Create a session and make it active. Returns its key.
    pub fn create(&mut self) -> String {
        self.counter += 1;
        let session = Session::new(self.counter, &self.default_model);
        let key = session.key.clone();
        self.sessions.push(session);
        self.active = key.clone();
        key
    }

    /// Delete a session. Refused for the protected default session, so the
    /// store never becomes empty. The active pointer retargets to the first
    /// remaining session when it pointed at the deleted one.
    pub fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        if key == DEFAULT_SESSION_KEY {
            return Err(StoreError::ProtectedSession);
        }
        let idx = self
            .position(key)
            .ok_or_else(|| StoreError::UnknownSession(key.to_string()))?;
        self.sessions.remove(idx);
        if self.active == key {
            self.active = self.sessions[0].key.clone();
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<&Session, StoreError> {
        self.sessions
            .iter()
            .find(|s| s.key == key)
            .ok_or_else(|| StoreError::UnknownSession(key.to_string()))
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut Session, StoreError> {
        self.sessions
            .iter_mut()
            .find(|s| s.key == key)
            .ok_or_else(|| StoreError::UnknownSession(key.to_string()))
    }

    /// Change a session's model. Allowed regardless of document state.
    pub fn select_model(&mut self, key: &str, model_id: &str) -> Result<(), StoreError> {
        self.get_mut(key)?.selected_model = model_id.to_string();
        Ok(())
    }

    /// Record a successful upload: the session's history becomes exactly the
    /// summary message.
    pub fn record_upload_result(
        &mut self,
        key: &str,
        backend_session_id: &str,
        summary: &str,
    ) -> Result<(), StoreError> {
        self.get_mut(key)?.record_upload(backend_session_id, summary);
        Ok(())
    }

    /// Append one question/answer exchange. Refused until the session has a
    /// backend session id.
    pub fn append_exchange(
        &mut self,
        key: &str,
        question: &str,
        answer: &str,
    ) -> Result<(), StoreError> {
        let session = self.get_mut(key)?;
        if !session.can_ask() {
            return Err(StoreError::NoDocument);
        }
        session.append_exchange(question, answer);
        Ok(())
    }

    pub fn set_active(&mut self, key: &str) -> Result<(), StoreError> {
        if self.position(key).is_none() {
            return Err(StoreError::UnknownSession(key.to_string()));
        }
        self.active = key.to_string();
        Ok(())
    }

    /// The active session. The active pointer always names a live session.
    pub fn active(&self) -> &Session {
        self.sessions
            .iter()
            .find(|s| s.key == self.active)
            .unwrap_or(&self.sessions[0])
    }

    pub fn active_key(&self) -> &str {
        &self.active
    }

    /// Sessions in creation order.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.sessions.iter().position(|s| s.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_default() {
        let store = SessionStore::new("m");
        assert_eq!(store.len(), 1);
        assert_eq!(store.active_key(), DEFAULT_SESSION_KEY);
        assert_eq!(store.active().display_name, "Chat 1");
    }

    #[test]
    fn test_create_retargets_active() {
        let mut store = SessionStore::new("m");
        let key = store.create();
        assert_eq!(store.len(), 2);
        assert_eq!(store.active_key(), key);
        assert_eq!(store.active().display_name, "Chat 2");
    }

    #[test]
    fn test_delete_default_refused() {
        let mut store = SessionStore::new("m");
        store.create();
        assert_eq!(
            store.delete(DEFAULT_SESSION_KEY),
            Err(StoreError::ProtectedSession)
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_active_retargets_to_first() {
        let mut store = SessionStore::new("m");
        let key = store.create();
        assert_eq!(store.active_key(), key);

        store.delete(&key).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.active_key(), DEFAULT_SESSION_KEY);
    }

    #[test]
    fn test_delete_inactive_keeps_active() {
        let mut store = SessionStore::new("m");
        let second = store.create();
        let third = store.create();
        assert_eq!(store.active_key(), third);

        store.delete(&second).unwrap();
        assert_eq!(store.active_key(), third);
    }

    #[test]
    fn test_append_exchange_requires_document() {
        let mut store = SessionStore::new("m");
        assert_eq!(
            store.append_exchange(DEFAULT_SESSION_KEY, "q", "a"),
            Err(StoreError::NoDocument)
        );
        assert!(store.active().chat_history.is_empty());
    }

    #[test]
    fn test_counter_is_monotonic_across_deletes() {
        let mut store = SessionStore::new("m");
        let second = store.create();
        store.delete(&second).unwrap();
        store.create();
        // "Chat 2" was deleted; the next label never reuses its number
        assert_eq!(store.active().display_name, "Chat 3");
    }
}
