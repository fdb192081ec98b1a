//! Session store trait and in-memory implementation.
//!
//! Sessions are durable across turns, keyed by conversation identity.
//! Access is inherently serialized per conversation, so implementations
//! need no locking beyond their own interior mutability.

use super::model::TriageSession;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// An abstract store for session state, keyed by conversation identity.
///
/// This trait decouples the triage service from the storage mechanism
/// (in-memory map, TOML files, a database). There are no hidden globals:
/// every session is retrieved and persisted explicitly by its key.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Finds the session for a conversation key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(session))`: session found
    /// - `Ok(None)`: no session stored for this key
    /// - `Err(_)`: storage failure
    async fn get(&self, key: &str) -> Result<Option<TriageSession>>;

    /// Persists the session for a conversation key, replacing any
    /// previous state.
    async fn put(&self, key: &str, session: &TriageSession) -> Result<()>;

    /// Removes the session for a conversation key, if present.
    async fn delete(&self, key: &str) -> Result<()>;
}

/// In-memory session store.
///
/// The default store for tests and single-process use; sessions live for
/// the lifetime of the process.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, TriageSession>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<TriageSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(key).cloned())
    }

    async fn put(&self, key: &str, session: &TriageSession) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(key.to_string(), session.clone());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let store = InMemorySessionStore::new();
        assert!(store.get("conv-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_then_get_round_trips() {
        let store = InMemorySessionStore::new();
        let session = TriageSession::new();

        store.put("conv-1", &session).await.unwrap();
        let loaded = store.get("conv-1").await.unwrap().unwrap();

        assert_eq!(loaded, session);
    }

    #[tokio::test]
    async fn test_delete_removes_the_session() {
        let store = InMemorySessionStore::new();
        store.put("conv-1", &TriageSession::new()).await.unwrap();

        store.delete("conv-1").await.unwrap();

        assert!(store.get("conv-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let store = InMemorySessionStore::new();
        let a = TriageSession::new();
        let b = TriageSession::new();

        store.put("conv-a", &a).await.unwrap();
        store.put("conv-b", &b).await.unwrap();

        assert_eq!(store.get("conv-a").await.unwrap().unwrap().id, a.id);
        assert_eq!(store.get("conv-b").await.unwrap().unwrap().id, b.id);
    }
}
