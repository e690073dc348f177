/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Route table for every named operation.
//!
//! Each operation maps to a service, an HTTP method and a path relative to the
//! service's versioned prefix. A `{id}` segment in the path is filled with the
//! caller's identifier, percent-encoded as a single segment.

use crate::config::Config;
use crate::error::AppError;
use reqwest::{Method, Url};
use serde::{Deserialize, Serialize};
use std::fmt;

const ID_PLACEHOLDER: &str = "{id}";

/// Backend services reached by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    /// Products and filters
    Catalog,
    /// Shopping cart
    Cart,
    /// Users and sessions
    Identity,
    /// Orders
    Orders,
}

impl Service {
    /// Every service, in declaration order
    pub const ALL: [Service; 4] = [
        Service::Catalog,
        Service::Cart,
        Service::Identity,
        Service::Orders,
    ];

    /// Lowercase service name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Service::Catalog => "catalog",
            Service::Cart => "cart",
            Service::Identity => "identity",
            Service::Orders => "orders",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named operations exposed by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// List products, paginated
    CatalogList,
    /// Details of one product
    CatalogDetails,
    /// Available product filters
    CatalogFilters,
    /// Items in the cart
    CartGet,
    /// Add a product to the cart
    CartAddItem,
    /// Remove a cart line
    CartRemoveItem,
    /// Decrease the quantity of a cart line by one
    CartReduceQuantity,
    /// Empty the cart
    CartClear,
    /// Sign in
    IdentityLogin,
    /// Create an account
    IdentityRegister,
    /// The signed-in user
    IdentityCurrentUser,
    /// Orders of the signed-in user
    OrdersList,
    /// Place an order
    OrdersCreate,
}

/// Where and how an operation is sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Target service
    pub service: Service,
    /// HTTP method
    pub method: Method,
    /// Path below the versioned prefix; may contain `{id}`
    pub path: &'static str,
}

impl Operation {
    /// Every operation, grouped by service
    pub const ALL: [Operation; 13] = [
        Operation::CatalogList,
        Operation::CatalogDetails,
        Operation::CatalogFilters,
        Operation::CartGet,
        Operation::CartAddItem,
        Operation::CartRemoveItem,
        Operation::CartReduceQuantity,
        Operation::CartClear,
        Operation::IdentityLogin,
        Operation::IdentityRegister,
        Operation::IdentityCurrentUser,
        Operation::OrdersList,
        Operation::OrdersCreate,
    ];

    /// Route of this operation
    #[must_use]
    pub fn route(self) -> Route {
        use Operation::*;
        use Service::*;

        let (service, method, path) = match self {
            CatalogList => (Catalog, Method::GET, "products"),
            // product details live directly under the prefix, not under products/
            CatalogDetails => (Catalog, Method::GET, "{id}"),
            CatalogFilters => (Catalog, Method::GET, "filters"),
            CartGet => (Cart, Method::GET, "cart/items"),
            CartAddItem => (Cart, Method::POST, "cart/add"),
            CartRemoveItem => (Cart, Method::DELETE, "cart/delete/{id}"),
            CartReduceQuantity => (Cart, Method::DELETE, "cart/reduce/{id}"),
            CartClear => (Cart, Method::DELETE, "cart/clearAll"),
            IdentityLogin => (Identity, Method::POST, "user/login"),
            IdentityRegister => (Identity, Method::POST, "user/register"),
            IdentityCurrentUser => (Identity, Method::GET, "user/currentuser"),
            OrdersList => (Orders, Method::GET, "order/items"),
            OrdersCreate => (Orders, Method::POST, "order/product"),
        };

        Route {
            service,
            method,
            path,
        }
    }

    /// Dotted name used in logs, e.g. `cart.remove_item`
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Operation::CatalogList => "catalog.list",
            Operation::CatalogDetails => "catalog.details",
            Operation::CatalogFilters => "catalog.fetch_filters",
            Operation::CartGet => "cart.get",
            Operation::CartAddItem => "cart.add_item",
            Operation::CartRemoveItem => "cart.remove_item",
            Operation::CartReduceQuantity => "cart.reduce_quantity",
            Operation::CartClear => "cart.clear",
            Operation::IdentityLogin => "identity.login",
            Operation::IdentityRegister => "identity.register",
            Operation::IdentityCurrentUser => "identity.current_user",
            Operation::OrdersList => "orders.list",
            Operation::OrdersCreate => "orders.create",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Route {
    /// Whether the path needs an identifier
    #[must_use]
    pub fn takes_id(&self) -> bool {
        self.path.split('/').any(|segment| segment == ID_PLACEHOLDER)
    }

    /// Builds the absolute URL of this route
    ///
    /// # Errors
    /// * `AppError::InvalidInput` when `id` is missing, empty, `.` or `..`, or
    ///   given to a route without `{id}`
    /// * `AppError::Config` when the service's base URL cannot be parsed
    pub fn url(&self, config: &Config, id: Option<&str>) -> Result<Url, AppError> {
        match (self.takes_id(), id) {
            (true, None) => {
                return Err(AppError::InvalidInput(format!(
                    "{} requires an identifier",
                    self.path
                )));
            }
            (true, Some(id)) if id.trim().is_empty() => {
                return Err(AppError::InvalidInput(
                    "identifier must not be empty".to_string(),
                ));
            }
            // dot segments are dropped by URL normalization
            (true, Some(id @ ("." | ".."))) => {
                return Err(AppError::InvalidInput(format!(
                    "identifier {id} is not a valid path segment"
                )));
            }
            (false, Some(id)) => {
                return Err(AppError::InvalidInput(format!(
                    "{} takes no identifier, got {id}",
                    self.path
                )));
            }
            _ => {}
        }

        let base = config.base_url(self.service);
        let mut url = Url::parse(base)
            .map_err(|e| AppError::Config(format!("invalid {} base URL {base}: {e}", self.service)))?;

        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                AppError::Config(format!("{} base URL {base} cannot hold a path", self.service))
            })?;
            segments.pop_if_empty();
            segments.extend(config.api_prefix.split('/').filter(|s| !s.is_empty()));
            for segment in self.path.split('/') {
                match (segment, id) {
                    (ID_PLACEHOLDER, Some(id)) => segments.push(id),
                    _ => segments.push(segment),
                };
            }
        }

        Ok(url)
    }
}
