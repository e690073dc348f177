use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
/// Source of the bearer token attached to outgoing requests
///
/// The client reads the token once per request, right before sending it, so
/// a login or logout elsewhere takes effect on the next call.
pub trait TokenProvider: Send + Sync {
    /// Returns the current session token, or `None` when signed out
    async fn current_token(&self) -> Option<String>;
}

#[async_trait]
impl<T: TokenProvider + ?Sized> TokenProvider for Arc<T> {
    async fn current_token(&self) -> Option<String> {
        (**self).current_token().await
    }
}

/// Provider for anonymous clients; never yields a token
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSession;

#[async_trait]
impl TokenProvider for NoSession {
    async fn current_token(&self) -> Option<String> {
        None
    }
}
