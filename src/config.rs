/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::routes::Service;
use crate::constants::{
    DEFAULT_API_PREFIX, DEFAULT_CART_URL, DEFAULT_CATALOG_URL, DEFAULT_IDENTITY_URL,
    DEFAULT_ORDERS_URL, USER_AGENT,
};
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_url_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Base URLs of the four storefront services
pub struct ServicesConfig {
    /// Catalog (products, filters) service
    pub catalog: String,
    /// Cart service
    pub cart: String,
    /// Identity (login, registration) service
    pub identity: String,
    /// Orders service
    pub orders: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the storefront client
pub struct Config {
    /// Base URL per service
    pub services: ServicesConfig,
    /// Versioned REST prefix appended to every base URL
    pub api_prefix: String,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment.
    ///
    /// A `.env` file is loaded first when present. Each service URL can be
    /// overridden with `STOREFRONT_CATALOG_URL`, `STOREFRONT_CART_URL`,
    /// `STOREFRONT_IDENTITY_URL` and `STOREFRONT_ORDERS_URL`; the REST prefix
    /// with `STOREFRONT_API_PREFIX`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            services: ServicesConfig {
                catalog: get_env_url_or_default("STOREFRONT_CATALOG_URL", DEFAULT_CATALOG_URL),
                cart: get_env_url_or_default("STOREFRONT_CART_URL", DEFAULT_CART_URL),
                identity: get_env_url_or_default("STOREFRONT_IDENTITY_URL", DEFAULT_IDENTITY_URL),
                orders: get_env_url_or_default("STOREFRONT_ORDERS_URL", DEFAULT_ORDERS_URL),
            },
            api_prefix: get_env_or_default("STOREFRONT_API_PREFIX", DEFAULT_API_PREFIX.to_string())
                .trim_matches('/')
                .to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Creates a configuration that sends every service to the same host
    ///
    /// Handy for local gateways and mock servers. The environment is not read.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Config {
            services: ServicesConfig {
                catalog: base_url.clone(),
                cart: base_url.clone(),
                identity: base_url.clone(),
                orders: base_url,
            },
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Returns the base URL configured for `service`
    #[must_use]
    pub fn base_url(&self, service: Service) -> &str {
        match service {
            Service::Catalog => &self.services.catalog,
            Service::Cart => &self.services.cart,
            Service::Identity => &self.services.identity,
            Service::Orders => &self.services.orders,
        }
    }

    /// Checks that every base URL is an absolute http(s) URL
    ///
    /// # Errors
    /// Returns `AppError::Config` naming the first offending service.
    pub fn validate(&self) -> Result<(), AppError> {
        for service in Service::ALL {
            let url = self.base_url(service);
            if url.trim().is_empty() {
                return Err(AppError::Config(format!("{service} base URL is empty")));
            }
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::Config(format!(
                    "{service} base URL must start with http:// or https://, got {url}"
                )));
            }
        }
        Ok(())
    }
}
