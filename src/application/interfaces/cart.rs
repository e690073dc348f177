use crate::error::AppError;
use crate::model::pagination::ApiResponse;
use async_trait::async_trait;

#[async_trait]
/// Shopping cart operations for the signed-in user
pub trait CartService: Send + Sync {
    /// Gets the items in the cart
    async fn get_cart(&self) -> Result<ApiResponse, AppError>;

    /// Adds one unit of a product
    async fn add_item(&self, product_id: &str) -> Result<ApiResponse, AppError>;

    /// Removes a cart line
    async fn remove_item(&self, cart_id: &str) -> Result<ApiResponse, AppError>;

    /// Decreases the quantity of a cart line by one
    async fn reduce_quantity(&self, cart_id: &str) -> Result<ApiResponse, AppError>;

    /// Removes every line
    async fn clear_cart(&self) -> Result<ApiResponse, AppError>;
}
