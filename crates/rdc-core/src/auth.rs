//! Bearer token lookup.
//!
//! The executor asks for the current token before every attempt. Providers
//! never fail: a missing token is a normal state and simply means the request
//! goes out unauthenticated. Refresh is the caller's business.

use async_trait::async_trait;
use std::sync::Arc;

use crate::session_store::SessionStore;

#[async_trait]
pub trait AuthTokenProvider: Send + Sync {
    async fn token(&self) -> Option<String>;
}

/// Fixed token (or none). Handy for tests and one-off tools.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

#[async_trait]
impl AuthTokenProvider for StaticToken {
    async fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Reads the token from a durable session store under a fixed key.
#[derive(Clone)]
pub struct StoredTokenProvider {
    store: Arc<dyn SessionStore>,
    key: String,
}

impl StoredTokenProvider {
    pub fn new(store: Arc<dyn SessionStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

#[async_trait]
impl AuthTokenProvider for StoredTokenProvider {
    async fn token(&self) -> Option<String> {
        match self.store.get(&self.key).await {
            Ok(Some(token)) if !token.is_empty() => Some(token),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(key = %self.key, "token read failed, continuing without: {:#}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session_store::{JsonFileStore, MemoryStore};
    use tempfile::tempdir;

    #[tokio::test]
    async fn static_token() {
        assert_eq!(StaticToken::new("t0k").token().await.as_deref(), Some("t0k"));
        assert_eq!(StaticToken::none().token().await, None);
    }

    #[tokio::test]
    async fn stored_token_present() {
        let store = Arc::new(MemoryStore::new());
        store.set("auth_token", "jwt-value").await.unwrap();
        let provider = StoredTokenProvider::new(store, "auth_token");
        assert_eq!(provider.token().await.as_deref(), Some("jwt-value"));
    }

    #[tokio::test]
    async fn stored_token_missing_or_empty_is_absent() {
        let store = Arc::new(MemoryStore::new());
        let provider = StoredTokenProvider::new(store.clone(), "auth_token");
        assert_eq!(provider.token().await, None);
        store.set("auth_token", "").await.unwrap();
        assert_eq!(provider.token().await, None);
    }

    #[tokio::test]
    async fn unreadable_store_is_absent_not_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{ broken").unwrap();
        let provider = StoredTokenProvider::new(Arc::new(JsonFileStore::new(path)), "auth_token");
        assert_eq!(provider.token().await, None);
    }
}
