//! Explicit server-side session lifecycle.
//!
//! Login inserts a session keyed by the access token's SHA-256 hash, the
//! auth middleware requires the session to still exist, and logout removes
//! it. This replaces ambient client-side session state with an object owned
//! by `AppState` and passed through dependency injection.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auth::jwt::hash_token;

#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, raw_token: &str, user_id: Uuid) {
        let mut sessions = self.inner.write().await;
        sessions.insert(
            hash_token(raw_token),
            Session {
                user_id,
                created_at: Utc::now(),
            },
        );
    }

    pub async fn contains(&self, raw_token: &str) -> bool {
        let sessions = self.inner.read().await;
        sessions.contains_key(&hash_token(raw_token))
    }

    /// Returns true if a session existed for this token.
    pub async fn remove(&self, raw_token: &str) -> bool {
        let mut sessions = self.inner.write().await;
        sessions.remove(&hash_token(raw_token)).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn session_lifecycle() {
        let registry = SessionRegistry::new();
        let user_id = Uuid::new_v4();

        assert!(!registry.contains("tok").await);
        registry.insert("tok", user_id).await;
        assert!(registry.contains("tok").await);
        assert!(!registry.contains("other").await);

        assert!(registry.remove("tok").await);
        assert!(!registry.contains("tok").await);
        assert!(!registry.remove("tok").await);
    }
}
