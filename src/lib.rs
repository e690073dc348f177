/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Storefront Client
//!
//! A client facade for the four services behind the storefront: catalog, cart,
//! identity and orders. Every call goes through one pipeline that:
//!
//! - attaches the current session token as a bearer credential,
//! - unwraps the JSON body, rewrapping it as a page when the service sends a
//!   `pagination` header,
//! - classifies failures, fires the matching user-facing side effect once
//!   (notification or navigation) and rejects with a single [`error::ApiError`].
//!
//! The session token, the notification sink and the navigator are injected,
//! so nothing here reads process-wide state.
//!
//! ```ignore
//! use std::sync::Arc;
//! use storefront_client::prelude::*;
//!
//! let session = Arc::new(SessionStore::new());
//! let client = Client::builder(Config::new()).token_provider(session.clone()).build()?;
//!
//! let page = client.list(&[("pageNumber".into(), "1".into())]).await?;
//! if let Some(meta) = page.pagination() {
//!     println!("page {:?} of {:?}", meta.current_page(), meta.total_pages());
//! }
//! ```

/// Application layer: route table, service interfaces and the client facade
pub mod application;
/// Client configuration
pub mod config;
/// Constants shared across the crate
pub mod constants;
/// Error types
pub mod error;
/// Transport, interceptors and response models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Session token sources
pub mod session;
/// Utility helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
