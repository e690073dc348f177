/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client facade for the storefront services
//!
//! [`Client`] implements the catalog, cart, identity and order interfaces on
//! top of one shared [`HttpClient`]. Each operation is a row of the route
//! table in [`crate::application::routes`].
//!
//! # Example
//! ```ignore
//! use std::sync::Arc;
//! use storefront_client::prelude::*;
//!
//! let session = Arc::new(SessionStore::new());
//! let client = Client::builder(Config::new())
//!     .token_provider(session.clone())
//!     .notifier(Arc::new(TracingNotifier))
//!     .build()?;
//!
//! let user = client.login(&serde_json::json!({"email": "a@b.c", "password": "pw"})).await?;
//! ```

use crate::application::interfaces::cart::CartService;
use crate::application::interfaces::catalog::CatalogService;
use crate::application::interfaces::effects::{
    Navigator, Notifier, TracingNavigator, TracingNotifier,
};
use crate::application::interfaces::identity::IdentityService;
use crate::application::interfaces::order::OrderService;
use crate::application::routes::Operation;
use crate::config::Config;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::pagination::ApiResponse;
use crate::model::requests::AddItemRequest;
use crate::session::interface::{NoSession, TokenProvider};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Facade over the four storefront services
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Starts building a client for `config`
    #[must_use]
    pub fn builder(config: Config) -> ClientBuilder {
        ClientBuilder::new(config)
    }

    /// Creates an anonymous client with logging-only hooks
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self, AppError> {
        Self::builder(config).build()
    }

    /// Wraps an existing transport
    #[must_use]
    pub fn from_http_client(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Underlying transport, for calls outside the route table
    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http_client
    }

    async fn send(
        &self,
        operation: Operation,
        id: Option<&str>,
        params: Option<&[(String, String)]>,
        body: Option<&Value>,
    ) -> Result<ApiResponse, AppError> {
        self.http_client.dispatch(operation, id, params, body).await
    }
}

/// Builder wiring the injected collaborators into a [`Client`]
///
/// Defaults: no session token, notifications and navigation only logged.
pub struct ClientBuilder {
    config: Config,
    tokens: Arc<dyn TokenProvider>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl ClientBuilder {
    /// Creates a builder with the default collaborators
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            tokens: Arc::new(NoSession),
            notifier: Arc::new(TracingNotifier),
            navigator: Arc::new(TracingNavigator),
        }
    }

    /// Source of the bearer token
    #[must_use]
    pub fn token_provider(mut self, tokens: Arc<dyn TokenProvider>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Sink for 400/401 notifications
    #[must_use]
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Target of the 500 redirect
    #[must_use]
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    /// Builds the client
    ///
    /// # Errors
    /// * `AppError::Config` if a base URL is invalid
    /// * `AppError::Http` if the HTTP client cannot be built
    pub fn build(self) -> Result<Client, AppError> {
        let http_client =
            HttpClient::new(self.config, self.tokens, self.notifier, self.navigator)?;
        Ok(Client::from_http_client(Arc::new(http_client)))
    }
}

#[async_trait]
impl CatalogService for Client {
    async fn list(&self, params: &[(String, String)]) -> Result<ApiResponse, AppError> {
        info!("Listing products");
        let result = self
            .send(Operation::CatalogList, None, Some(params), None)
            .await?;
        if let Some(meta) = result.pagination() {
            debug!(
                "Product page {:?} of {:?} obtained (more: {})",
                meta.current_page(),
                meta.total_pages(),
                meta.has_next()
            );
        }
        Ok(result)
    }

    async fn details(&self, id: &str) -> Result<ApiResponse, AppError> {
        info!("Getting product details: {}", id);
        self.send(Operation::CatalogDetails, Some(id), None, None)
            .await
    }

    async fn fetch_filters(&self) -> Result<ApiResponse, AppError> {
        debug!("Fetching catalog filters");
        self.send(Operation::CatalogFilters, None, None, None).await
    }
}

#[async_trait]
impl CartService for Client {
    async fn get_cart(&self) -> Result<ApiResponse, AppError> {
        debug!("Getting cart items");
        self.send(Operation::CartGet, None, None, None).await
    }

    async fn add_item(&self, product_id: &str) -> Result<ApiResponse, AppError> {
        info!("Adding product {} to cart", product_id);
        let body = serde_json::to_value(AddItemRequest::new(product_id))?;
        self.send(Operation::CartAddItem, None, None, Some(&body))
            .await
    }

    async fn remove_item(&self, cart_id: &str) -> Result<ApiResponse, AppError> {
        info!("Removing cart line {}", cart_id);
        self.send(Operation::CartRemoveItem, Some(cart_id), None, None)
            .await
    }

    async fn reduce_quantity(&self, cart_id: &str) -> Result<ApiResponse, AppError> {
        info!("Reducing quantity of cart line {}", cart_id);
        self.send(Operation::CartReduceQuantity, Some(cart_id), None, None)
            .await
    }

    async fn clear_cart(&self) -> Result<ApiResponse, AppError> {
        info!("Clearing cart");
        self.send(Operation::CartClear, None, None, None).await
    }
}

#[async_trait]
impl IdentityService for Client {
    async fn login(&self, values: &Value) -> Result<ApiResponse, AppError> {
        info!("Logging in");
        self.send(Operation::IdentityLogin, None, None, Some(values))
            .await
    }

    async fn register(&self, values: &Value) -> Result<ApiResponse, AppError> {
        info!("Registering user");
        self.send(Operation::IdentityRegister, None, None, Some(values))
            .await
    }

    async fn current_user(&self) -> Result<ApiResponse, AppError> {
        debug!("Getting current user");
        self.send(Operation::IdentityCurrentUser, None, None, None)
            .await
    }
}

#[async_trait]
impl OrderService for Client {
    async fn list_orders(&self) -> Result<ApiResponse, AppError> {
        debug!("Listing orders");
        self.send(Operation::OrdersList, None, None, None).await
    }

    async fn create_order(&self, values: &Value) -> Result<ApiResponse, AppError> {
        info!("Creating order");
        self.send(Operation::OrdersCreate, None, None, Some(values))
            .await
    }
}
