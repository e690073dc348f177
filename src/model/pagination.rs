/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Paging metadata sent by list endpoints in the `pagination` header
///
/// The header's JSON object is kept as received; the accessors read the
/// well-known keys from it without rejecting other value types.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct PaginationMetadata {
    fields: Map<String, Value>,
}

impl PaginationMetadata {
    /// Parses the raw header value
    ///
    /// # Errors
    /// Returns `AppError::Json` when the header is not a JSON object.
    pub fn from_header(raw: &[u8]) -> Result<Self, AppError> {
        Ok(serde_json::from_slice(raw)?)
    }

    /// Raw value of `key`, as sent by the service
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Every key sent by the service, in header order
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consumes the metadata, returning the header's object
    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    /// One-based index of the page in the body
    #[must_use]
    pub fn current_page(&self) -> Option<u64> {
        self.number("currentPage")
    }

    /// Number of pages available
    #[must_use]
    pub fn total_pages(&self) -> Option<u64> {
        self.number("totalPages")
    }

    /// Items per page
    #[must_use]
    pub fn page_size(&self) -> Option<u64> {
        self.number("pageSize")
    }

    /// Items across all pages
    #[must_use]
    pub fn total_count(&self) -> Option<u64> {
        self.number("totalCount")
    }

    /// Whether another page follows this one
    #[must_use]
    pub fn has_next(&self) -> bool {
        match (self.current_page(), self.total_pages()) {
            (Some(current), Some(total)) => current < total,
            _ => false,
        }
    }

    // numeric strings count, negatives and other types read as absent
    fn number(&self, key: &str) -> Option<u64> {
        match self.fields.get(key)? {
            Value::Number(n) => n.as_u64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for PaginationMetadata {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// A page of results together with its metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginatedResponse<T> {
    /// The body as returned by the service
    pub items: T,
    /// Metadata parsed from the `pagination` header
    #[serde(rename = "metaData")]
    pub meta_data: PaginationMetadata,
}

impl<T> PaginatedResponse<T> {
    /// Wraps a body with its metadata
    pub fn new(items: T, meta_data: PaginationMetadata) -> Self {
        Self { items, meta_data }
    }
}

/// Unwrapped body of a successful call
///
/// Bodies of responses without a `pagination` header come back as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse<T = Value> {
    /// Body of a response without pagination
    Plain(T),
    /// Body of a response that carried a `pagination` header
    Paginated(PaginatedResponse<T>),
}

impl<T> ApiResponse<T> {
    /// The body, whichever shape it arrived in
    pub fn data(&self) -> &T {
        match self {
            ApiResponse::Plain(data) => data,
            ApiResponse::Paginated(page) => &page.items,
        }
    }

    /// Consumes the response, returning the body
    pub fn into_data(self) -> T {
        match self {
            ApiResponse::Plain(data) => data,
            ApiResponse::Paginated(page) => page.items,
        }
    }

    /// Pagination metadata, when the service sent any
    pub fn pagination(&self) -> Option<&PaginationMetadata> {
        match self {
            ApiResponse::Plain(_) => None,
            ApiResponse::Paginated(page) => Some(&page.meta_data),
        }
    }

    /// Whether the body arrived as a page
    pub fn is_paginated(&self) -> bool {
        matches!(self, ApiResponse::Paginated(_))
    }

    /// Applies `f` to the body, keeping the metadata
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        match self {
            ApiResponse::Plain(data) => ApiResponse::Plain(f(data)),
            ApiResponse::Paginated(page) => {
                ApiResponse::Paginated(PaginatedResponse::new(f(page.items), page.meta_data))
            }
        }
    }
}

impl ApiResponse<Value> {
    /// Deserializes the JSON body into a concrete model, keeping the metadata
    ///
    /// # Errors
    /// Returns `AppError::Json` when the body does not match `U`.
    pub fn decode<U: DeserializeOwned>(self) -> Result<ApiResponse<U>, AppError> {
        Ok(match self {
            ApiResponse::Plain(data) => ApiResponse::Plain(serde_json::from_value(data)?),
            ApiResponse::Paginated(page) => ApiResponse::Paginated(PaginatedResponse::new(
                serde_json::from_value(page.items)?,
                page.meta_data,
            )),
        })
    }
}
