use crate::common::harness;
use assert_json_diff::assert_json_eq;
use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;
use storefront_client::prelude::*;

#[tokio::test]
async fn test_bearer_token_attached_when_signed_in() {
    let mut h = harness().await;
    h.session.set_token("token-123").await;

    let mock = h
        .server
        .mock("GET", "/api/rest/v1/user/currentuser")
        .match_header("authorization", "Bearer token-123")
        .match_header("x-request-id", Matcher::Regex("^[A-Z0-9]{30}$".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"email":"a@b.c","token":"token-123"}"#)
        .create_async()
        .await;

    let user = h.client.current_user().await.expect("request should succeed");
    assert_json_eq!(user.into_data(), json!({"email": "a@b.c", "token": "token-123"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_no_authorization_header_when_signed_out() {
    let mut h = harness().await;

    let mock = h
        .server
        .mock("GET", "/api/rest/v1/filters")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"brands":[],"types":[]}"#)
        .create_async()
        .await;

    h.client.fetch_filters().await.expect("request should succeed");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_token_is_read_at_send_time() {
    let mut h = harness().await;

    let signed_in = h
        .server
        .mock("GET", "/api/rest/v1/cart/items")
        .match_header("authorization", "Bearer second")
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    h.session.set_token("first").await;
    h.session.set_token("second").await;
    h.client.get_cart().await.expect("signed-in request should succeed");
    signed_in.assert_async().await;

    let signed_out = h
        .server
        .mock("GET", "/api/rest/v1/order/items")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    h.session.clear().await;
    h.client.list_orders().await.expect("signed-out request should succeed");
    signed_out.assert_async().await;
}

#[tokio::test]
async fn test_validation_errors_reject_with_messages() {
    let mut h = harness().await;
    let mock = h
        .server
        .mock("POST", "/api/rest/v1/user/register")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"errors":{"name":["required"]}}"#)
        .create_async()
        .await;

    let err = h
        .client
        .register(&json!({"email": "a@b.c"}))
        .await
        .expect_err("should fail validation");

    assert_eq!(err.validation_messages(), Some(&["required".to_string()][..]));
    let api = err.as_api().expect("api error");
    assert_eq!(api.kind, ApiErrorKind::Validation);
    assert_eq!(api.category(), ErrorCategory::ValidationErrors);
    assert_json_eq!(api.response.body.clone(), json!({"errors": {"name": ["required"]}}));
    h.assert_no_side_effects();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_bad_request_notifies_title() {
    let mut h = harness().await;
    let _mock = h
        .server
        .mock("POST", "/api/rest/v1/order/product")
        .with_status(400)
        .with_body(r#"{"title":"Bad input"}"#)
        .create_async()
        .await;

    let err = h
        .client
        .create_order(&json!({"address": null}))
        .await
        .expect_err("should fail");

    assert_eq!(h.notifier.messages(), vec!["Bad input".to_string()]);
    assert!(h.navigator.calls().is_empty());
    let api = err.as_api().expect("api error");
    assert_eq!(api.kind, ApiErrorKind::HttpError);
    assert_eq!(api.status(), 400);
    assert_eq!(api.category(), ErrorCategory::ClientRequestError);
}

#[tokio::test]
async fn test_bad_request_without_title_uses_generic_message() {
    let mut h = harness().await;
    let _mock = h
        .server
        .mock("GET", "/api/rest/v1/products")
        .with_status(400)
        .create_async()
        .await;

    let err = h.client.list(&[]).await.expect_err("should fail");
    assert_eq!(h.notifier.messages(), vec!["400 bad request".to_string()]);
    assert_eq!(err.as_api().map(|e| e.response.body.clone()), Some(json!(null)));
}

#[tokio::test]
async fn test_unauthorised_notifies() {
    let mut h = harness().await;
    let _mock = h
        .server
        .mock("GET", "/api/rest/v1/cart/items")
        .with_status(401)
        .with_body("{}")
        .create_async()
        .await;

    let err = h.client.get_cart().await.expect_err("should fail");
    assert_eq!(h.notifier.messages(), vec!["Unauthorised".to_string()]);
    assert!(h.navigator.calls().is_empty());
    let api = err.as_api().expect("api error");
    assert_eq!(api.status(), 401);
    assert_eq!(api.category(), ErrorCategory::AuthenticationError);
    assert_json_eq!(api.response.body.clone(), json!({}));
}

#[tokio::test]
async fn test_server_error_navigates_with_payload() {
    let mut h = harness().await;
    let _mock = h
        .server
        .mock("GET", "/api/rest/v1/order/items")
        .with_status(500)
        .with_body(r#"{"title":"Boom"}"#)
        .create_async()
        .await;

    let err = h.client.list_orders().await.expect_err("should fail");

    let calls = h.navigator.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "/server-error");
    assert_json_eq!(calls[0].1.clone(), json!({"error": {"title": "Boom"}}));
    assert!(h.notifier.messages().is_empty());
    assert_eq!(err.as_api().map(ApiError::category), Some(ErrorCategory::ServerError));
}

#[tokio::test]
async fn test_not_found_has_no_side_effect() {
    let mut h = harness().await;
    let _mock = h
        .server
        .mock("GET", "/api/rest/v1/missing-product")
        .with_status(404)
        .with_body("Not Found")
        .create_async()
        .await;

    let err = h.client.details("missing-product").await.expect_err("should fail");
    h.assert_no_side_effects();

    let api = err.as_api().expect("api error");
    assert_eq!(api.kind, ApiErrorKind::HttpError);
    assert_eq!(api.status(), 404);
    assert_eq!(api.category(), ErrorCategory::Unclassified);
    assert_eq!(api.response.body, json!("Not Found"));
}

#[tokio::test]
async fn test_side_effect_fires_once_per_failed_call() {
    let mut h = harness().await;
    let _mock = h
        .server
        .mock("DELETE", "/api/rest/v1/cart/clearAll")
        .with_status(401)
        .expect(2)
        .create_async()
        .await;

    assert!(h.client.clear_cart().await.is_err());
    assert_eq!(h.notifier.messages().len(), 1);
    assert!(h.client.clear_cart().await.is_err());
    assert_eq!(h.notifier.messages().len(), 2);
}

#[tokio::test]
async fn test_transport_failure_fires_nothing() {
    let notifier = Arc::new(crate::common::RecordingNotifier::default());
    let navigator = Arc::new(crate::common::RecordingNavigator::default());
    let client = Client::builder(Config::with_base_url("http://127.0.0.1:1"))
        .notifier(notifier.clone())
        .navigator(navigator.clone())
        .build()
        .expect("Failed to build client");

    let err = client.fetch_filters().await.expect_err("connection should fail");
    assert!(matches!(err, AppError::Http(_)));
    assert!(notifier.messages().is_empty());
    assert!(navigator.calls().is_empty());
}

#[tokio::test]
async fn test_invalid_config_is_rejected_at_build() {
    let result = Client::builder(Config::with_base_url("localhost:8080")).build();
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[tokio::test]
async fn test_put_through_transport() {
    let mut h = harness().await;
    let mock = h
        .server
        .mock("PUT", "/api/rest/v1/cart/items")
        .match_body(Matcher::Json(json!({"quantity": 2})))
        .with_status(200)
        .with_body(r#"{"updated":true}"#)
        .create_async()
        .await;

    let url = format!("{}/api/rest/v1/cart/items", h.server.url());
    let result: ApiResponse = h
        .client
        .http()
        .put(&url, &json!({"quantity": 2}))
        .await
        .expect("put should succeed");
    assert_json_eq!(result.into_data(), json!({"updated": true}));
    mock.assert_async().await;
}
