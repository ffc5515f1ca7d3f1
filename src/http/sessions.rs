//! In-memory registry of interactive sessions.
//!
//! Each browser context gets one session, keyed by a generated id. Sessions
//! are process-local and reset on restart; no cross-session state is shared.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::Session;

/// In-memory session registry.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a new session in its initial state and return its id.
    pub fn create(&self) -> (String, Session) {
        let session_id = Uuid::new_v4().to_string();
        let session = Session::default();
        self.sessions.write().insert(session_id.clone(), session);
        (session_id, session)
    }

    /// Snapshot of a session.
    pub fn get(&self, session_id: &str) -> Option<Session> {
        self.sessions.read().get(session_id).copied()
    }

    /// Apply `f` to a session under the write lock, so each user action is
    /// processed to completion before the next.
    pub fn update<F, R>(&self, session_id: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut sessions = self.sessions.write();
        sessions.get_mut(session_id).map(f)
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Page;

    #[test]
    fn test_create_and_get() {
        let registry = SessionRegistry::new();
        let (id, session) = registry.create();
        assert_eq!(session.page, Page::Home);
        assert_eq!(registry.get(&id), Some(session));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_unknown_session() {
        let registry = SessionRegistry::new();
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn test_update_isolated_per_session() {
        let registry = SessionRegistry::new();
        let (first, _) = registry.create();
        let (second, _) = registry.create();

        registry.update(&first, |session| session.page = Page::Map);

        assert_eq!(registry.get(&first).unwrap().page, Page::Map);
        assert_eq!(registry.get(&second).unwrap().page, Page::Home);
    }
}
