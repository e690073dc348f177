use crate::session::interface::TokenProvider;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Shared, mutable holder of the signed-in user's token
///
/// Clones share the same slot: the UI keeps one handle to sign in and out,
/// the client keeps another to read it.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionStore {
    /// Creates an empty (signed out) store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `token`
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.into()))),
        }
    }

    /// Replaces the current token
    pub async fn set_token(&self, token: impl Into<String>) {
        *self.token.write().await = Some(token.into());
        debug!("Session token updated");
    }

    /// Signs out
    pub async fn clear(&self) {
        *self.token.write().await = None;
        debug!("Session token cleared");
    }
}

#[async_trait]
impl TokenProvider for SessionStore {
    async fn current_token(&self) -> Option<String> {
        self.token
            .read()
            .await
            .clone()
            .filter(|token| !token.is_empty())
    }
}
