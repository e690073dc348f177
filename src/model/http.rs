/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Transport behind the client facade.
//!
//! [`HttpClient`] sends one request per call and runs it through the
//! interceptors: bearer token on the way out, pagination unwrapping on
//! success, classification plus a single side effect on failure. There are
//! no retries, timeouts or request coalescing.

use crate::application::interfaces::effects::{Navigator, Notifier};
use crate::application::routes::Operation;
use crate::config::Config;
use crate::constants::REQUEST_ID_HEADER;
use crate::error::AppError;
use crate::model::interceptors::{
    SideEffect, authorize, classify_failure, decode_value, normalize_response,
};
use crate::model::pagination::ApiResponse;
use crate::session::interface::TokenProvider;
use crate::utils::id::request_id;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// HTTP transport with the request/response pipeline applied to every call
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
    tokens: Arc<dyn TokenProvider>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl HttpClient {
    /// Creates a new transport
    ///
    /// # Arguments
    /// * `config` - Service base URLs and user agent
    /// * `tokens` - Source of the bearer token, read before each request
    /// * `notifier` - Receives 400/401 notifications
    /// * `navigator` - Receives the 500 redirect
    ///
    /// # Errors
    /// * `AppError::Config` if a base URL is invalid
    /// * `AppError::Http` if the underlying client cannot be built
    pub fn new(
        config: Config,
        tokens: Arc<dyn TokenProvider>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, AppError> {
        config.validate()?;

        let http_client = Client::builder().user_agent(&config.user_agent).build()?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
            tokens,
            notifier,
            navigator,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Makes a GET request with optional query parameters
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        params: Option<&[(String, String)]>,
    ) -> Result<ApiResponse<T>, AppError> {
        self.request(Method::GET, url, params, None::<&()>).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<ApiResponse<T>, AppError> {
        self.request(Method::POST, url, None, Some(body)).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<ApiResponse<T>, AppError> {
        self.request(Method::PUT, url, None, Some(body)).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, url: &str) -> Result<ApiResponse<T>, AppError> {
        self.request(Method::DELETE, url, None, None::<&()>).await
    }

    /// Sends a named operation, resolving its route from the route table
    ///
    /// # Arguments
    /// * `operation` - Operation to send
    /// * `id` - Identifier for routes with an `{id}` segment
    /// * `params` - Query parameters
    /// * `body` - JSON body
    pub async fn dispatch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        operation: Operation,
        id: Option<&str>,
        params: Option<&[(String, String)]>,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, AppError> {
        let route = operation.route();
        let url = route.url(&self.config, id)?;
        debug!("Dispatching {}", operation);
        self.request(route.method, url.as_str(), params, body).await
    }

    /// Sends one request through the pipeline
    ///
    /// # Returns
    /// * `Ok(ApiResponse)` - Body of a 2xx response, paginated when the
    ///   `pagination` header was present
    /// * `Err(AppError::Api)` - The service answered with any other status; the
    ///   matching side effect has already fired
    /// * `Err(AppError::Http)` - No response was received; nothing fired
    pub async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        params: Option<&[(String, String)]>,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, AppError> {
        let request_id = request_id();
        debug!("{} {} [{}]", method, url, request_id);

        let mut request = self
            .http_client
            .request(method, url)
            .header(REQUEST_ID_HEADER, &request_id)
            .header(ACCEPT, "application/json");

        if let Some(params) = params.filter(|p| !p.is_empty()) {
            request = request.query(params);
        }

        if let Some(b) = body {
            request = request.json(b);
        }

        let token = self.tokens.current_token().await;
        request = authorize(request, token.as_deref());

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {} [{}]", status, request_id);

        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return normalize_response(&headers, &bytes);
        }

        Err(self.handle_failure(status, &bytes, &request_id))
    }

    fn handle_failure(&self, status: StatusCode, body: &[u8], request_id: &str) -> AppError {
        let (api_error, effect) = classify_failure(status, decode_value(body));
        warn!(
            "Request {} failed ({:?}): {}",
            request_id,
            api_error.category(),
            api_error
        );
        self.fire(effect);
        AppError::Api(api_error)
    }

    fn fire(&self, effect: SideEffect) {
        match effect {
            SideEffect::None => {}
            SideEffect::Notify(message) => self.notifier.notify_error(&message),
            SideEffect::Navigate { path, state } => {
                error!("Server error, navigating to {}", path);
                self.navigator.navigate_to(&path, state);
            }
        }
    }
}
