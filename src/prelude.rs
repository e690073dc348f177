/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Storefront Client Prelude
//!
//! Brings the client, its collaborators and the service traits into scope.
//!
//! ## Usage
//!
//! ```rust
//! use storefront_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:8080");
//! let client = Client::new(config).expect("valid config");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the storefront client
pub use crate::config::{Config, ServicesConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types
pub use crate::error::{ApiError, ApiErrorKind, AppError, ErrorCategory, ErrorResponse};

// ============================================================================
// CLIENT AND COLLABORATORS
// ============================================================================

/// Client facade and its builder
pub use crate::application::client::{Client, ClientBuilder};

/// Notification and navigation hooks
pub use crate::application::interfaces::effects::{
    Navigator, Notifier, TracingNavigator, TracingNotifier,
};

/// Session token sources
pub use crate::session::{NoSession, SessionStore, TokenProvider};

/// Transport
pub use crate::model::http::HttpClient;

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

/// Service traits implemented by `Client`
pub use crate::application::interfaces::cart::CartService;
pub use crate::application::interfaces::catalog::CatalogService;
pub use crate::application::interfaces::identity::IdentityService;
pub use crate::application::interfaces::order::OrderService;

/// Route table
pub use crate::application::routes::{Operation, Route, Service};

// ============================================================================
// MODELS
// ============================================================================

/// Response wrappers
pub use crate::model::pagination::{ApiResponse, PaginatedResponse, PaginationMetadata};

/// Request bodies
pub use crate::model::requests::AddItemRequest;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;
