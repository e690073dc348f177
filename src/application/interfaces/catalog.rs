use crate::error::AppError;
use crate::model::pagination::ApiResponse;
use async_trait::async_trait;

#[async_trait]
/// Product catalog operations
pub trait CatalogService: Send + Sync {
    /// Lists products; the body is usually paginated
    async fn list(&self, params: &[(String, String)]) -> Result<ApiResponse, AppError>;

    /// Gets the details of one product
    async fn details(&self, id: &str) -> Result<ApiResponse, AppError>;

    /// Gets the filters (brands, types, ...) the catalog can be narrowed by
    async fn fetch_filters(&self) -> Result<ApiResponse, AppError>;
}
