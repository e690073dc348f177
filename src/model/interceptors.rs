/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Request and response interceptors shared by every call.
//!
//! These are pure functions; [`crate::model::http::HttpClient`] wires them
//! around the transport and fires the side effects they return.

use crate::constants::{
    BAD_REQUEST_MESSAGE, PAGINATION_HEADER, SERVER_ERROR_ROUTE, UNAUTHORISED_MESSAGE,
};
use crate::error::{ApiError, AppError, ErrorResponse};
use crate::model::pagination::{ApiResponse, PaginatedResponse, PaginationMetadata};
use reqwest::header::HeaderMap;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// User-facing reaction to a failed call
#[derive(Debug, Clone, PartialEq)]
pub enum SideEffect {
    /// Nothing to do
    None,
    /// Show an error notification with this text
    Notify(String),
    /// Move the user to `path`, handing over `state`
    Navigate {
        /// Target route
        path: String,
        /// State handed to the target view
        state: Value,
    },
}

/// Attaches `token` as a bearer credential; an absent or empty token leaves
/// the request untouched.
pub fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) if !token.is_empty() => request.bearer_auth(token),
        _ => request,
    }
}

/// Decodes a successful body, wrapping it as a page when `headers` carry a
/// non-empty `pagination` header.
///
/// # Errors
/// Returns `AppError::Json` when the body does not decode as `T` or the
/// header is not valid pagination JSON.
pub fn normalize_response<T: DeserializeOwned>(
    headers: &HeaderMap,
    body: &[u8],
) -> Result<ApiResponse<T>, AppError> {
    let data: T = decode_body(body)?;

    match headers.get(PAGINATION_HEADER) {
        Some(raw) if !raw.as_bytes().is_empty() => {
            let meta_data = PaginationMetadata::from_header(raw.as_bytes())?;
            Ok(ApiResponse::Paginated(PaginatedResponse::new(data, meta_data)))
        }
        _ => Ok(ApiResponse::Plain(data)),
    }
}

/// Decodes a successful body: JSON is decoded as `T`, other text is handed
/// to `T` as a JSON string, an empty body as `null`.
///
/// # Errors
/// Returns `AppError::Json` when the body does not decode as `T`.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    Ok(serde_json::from_value(decode_value(body))?)
}

/// Decodes a body without ever failing: JSON stays JSON, other text becomes
/// a JSON string, an empty body becomes `null`.
#[must_use]
pub fn decode_value(body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

/// Classifies a failed response into the rejection returned to the caller
/// and the side effect to fire.
///
/// * 400 with `errors`: validation rejection, no side effect
/// * 400 otherwise: notify with `title` or a generic message
/// * 401: notify with `title` or "Unauthorised"
/// * 500: navigate to the server error route with `{ "error": body }`
/// * anything else: no side effect
#[must_use]
pub fn classify_failure(status: StatusCode, body: Value) -> (ApiError, SideEffect) {
    let response = ErrorResponse::new(status, body);

    match status {
        StatusCode::BAD_REQUEST => {
            if let Some(errors) = response.body.get("errors").filter(|e| is_truthy(e)) {
                let messages = flatten_errors(errors);
                return (ApiError::validation(messages, response), SideEffect::None);
            }
            let message = response.title().unwrap_or(BAD_REQUEST_MESSAGE).to_string();
            (ApiError::http(response), SideEffect::Notify(message))
        }
        StatusCode::UNAUTHORIZED => {
            let message = response.title().unwrap_or(UNAUTHORISED_MESSAGE).to_string();
            (ApiError::http(response), SideEffect::Notify(message))
        }
        StatusCode::INTERNAL_SERVER_ERROR => {
            let state = json!({ "error": response.body.clone() });
            (
                ApiError::http(response),
                SideEffect::Navigate {
                    path: SERVER_ERROR_ROUTE.to_string(),
                    state,
                },
            )
        }
        _ => (ApiError::http(response), SideEffect::None),
    }
}

/// Flattens field-level errors into messages, in the order the service sent
/// the fields.
///
/// Empty entries (`null`, `false`, `0`, `""`) are skipped. Arrays are
/// flattened one level and keep every element; a `null` element reads as
/// `"null"`. A bare string counts as one message.
#[must_use]
pub fn flatten_errors(errors: &Value) -> Vec<String> {
    let entries: Vec<&Value> = match errors {
        Value::Object(fields) => fields.values().collect(),
        Value::Array(items) => items.iter().collect(),
        Value::String(message) => return vec![message.clone()],
        _ => return Vec::new(),
    };

    let mut messages = Vec::new();
    for entry in entries.into_iter().filter(|e| is_truthy(e)) {
        match entry {
            Value::Array(items) => messages.extend(items.iter().map(to_message)),
            other => messages.push(to_message(other)),
        }
    }
    messages
}

fn to_message(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
