use serde::{Deserialize, Serialize};

/// Body of the cart's add-item call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItemRequest {
    /// Product to add
    #[serde(rename = "pId")]
    pub product_id: String,
}

impl AddItemRequest {
    /// Creates a request adding `product_id`
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
        }
    }
}
