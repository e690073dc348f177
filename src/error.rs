/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types returned by every client call.
//!
//! A failed HTTP response always rejects with [`AppError::Api`], whichever
//! side effect it triggered. The [`ApiError::kind`] tag tells a validation
//! rejection (flattened field messages) from a plain HTTP failure; both keep
//! the raw [`ErrorResponse`].

use pretty_simple_display::DisplaySimple;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum AppError {
    /// Transport failure before any response was received
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// JSON encoding or decoding failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),
    /// Invalid argument passed by the caller
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A service answered with a non-success status
    #[error("api error: {0}")]
    Api(ApiError),
}

impl From<ApiError> for AppError {
    fn from(error: ApiError) -> Self {
        AppError::Api(error)
    }
}

impl AppError {
    /// Returns the API rejection, if this error is one
    #[must_use]
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            AppError::Api(error) => Some(error),
            _ => None,
        }
    }

    /// Returns the flattened validation messages when the call failed validation
    #[must_use]
    pub fn validation_messages(&self) -> Option<&[String]> {
        self.as_api()
            .filter(|error| error.kind == ApiErrorKind::Validation)
            .map(|error| error.messages.as_slice())
    }
}

/// Tag distinguishing the two rejection shapes of a failed call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApiErrorKind {
    /// 400 carrying field-level errors
    Validation,
    /// Any other failed response
    HttpError,
}

/// Classification of a failed call by status and body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// 400 with field errors, surfaced as a message list
    ValidationErrors,
    /// 400 without field errors, user notified
    ClientRequestError,
    /// 401, user notified
    AuthenticationError,
    /// 500, navigated to the server error view
    ServerError,
    /// Anything else, no side effect
    Unclassified,
}

/// Raw failed response as received from the service
#[derive(DisplaySimple, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,
    /// Decoded body; non-JSON text is kept as a string, an empty body is `null`
    pub body: Value,
}

impl ErrorResponse {
    /// Creates a new error response
    #[must_use]
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self {
            status: status.as_u16(),
            body,
        }
    }

    /// Returns the `title` field of the body when it is a non-empty string
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.body
            .get("title")
            .and_then(Value::as_str)
            .filter(|title| !title.is_empty())
    }
}

/// Rejection of a call that reached a service and failed
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// Shape of the rejection
    pub kind: ApiErrorKind,
    /// Flattened field messages; empty unless `kind` is `Validation`
    pub messages: Vec<String>,
    /// The failed response
    pub response: ErrorResponse,
}

impl ApiError {
    /// Creates a validation rejection
    #[must_use]
    pub fn validation(messages: Vec<String>, response: ErrorResponse) -> Self {
        Self {
            kind: ApiErrorKind::Validation,
            messages,
            response,
        }
    }

    /// Creates a plain HTTP rejection
    #[must_use]
    pub fn http(response: ErrorResponse) -> Self {
        Self {
            kind: ApiErrorKind::HttpError,
            messages: Vec::new(),
            response,
        }
    }

    /// Status code of the failed response
    #[must_use]
    pub fn status(&self) -> u16 {
        self.response.status
    }

    /// Maps the rejection onto the error taxonomy
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match (self.kind, self.response.status) {
            (ApiErrorKind::Validation, _) => ErrorCategory::ValidationErrors,
            (_, 400) => ErrorCategory::ClientRequestError,
            (_, 401) => ErrorCategory::AuthenticationError,
            (_, 500) => ErrorCategory::ServerError,
            _ => ErrorCategory::Unclassified,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ApiErrorKind::Validation => write!(
                f,
                "validation failed ({}): {}",
                self.response.status,
                self.messages.join("; ")
            ),
            ApiErrorKind::HttpError => match self.response.title() {
                Some(title) => write!(f, "status {}: {}", self.response.status, title),
                None => write!(f, "status {}", self.response.status),
            },
        }
    }
}

impl std::error::Error for ApiError {}
