use crate::error::AppError;
use crate::model::pagination::ApiResponse;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
/// Account operations against the identity service
///
/// Form values are forwarded as-is; the returned user normally carries the
/// token to hand to a [`crate::session::SessionStore`].
pub trait IdentityService: Send + Sync {
    /// Signs in with the submitted form values
    async fn login(&self, values: &Value) -> Result<ApiResponse, AppError>;

    /// Creates an account from the submitted form values
    async fn register(&self, values: &Value) -> Result<ApiResponse, AppError>;

    /// Gets the user the current token belongs to
    async fn current_user(&self) -> Result<ApiResponse, AppError>;
}
