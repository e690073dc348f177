use crate::error::AppError;
use crate::model::pagination::ApiResponse;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
/// Order operations for the signed-in user
pub trait OrderService: Send + Sync {
    /// Lists the user's orders
    async fn list_orders(&self) -> Result<ApiResponse, AppError>;

    /// Places an order from the submitted values
    async fn create_order(&self, values: &Value) -> Result<ApiResponse, AppError>;
}
