use crate::common::harness;
use assert_json_diff::assert_json_eq;
use mockito::Matcher;
use serde_json::json;
use storefront_client::prelude::*;

#[tokio::test]
async fn test_list_orders() {
    let mut h = harness().await;
    h.session.set_token("jwt").await;
    let mock = h
        .server
        .mock("GET", "/api/rest/v1/order/items")
        .match_header("authorization", "Bearer jwt")
        .with_status(200)
        .with_body(r#"[{"orderId":1,"total":5500}]"#)
        .create_async()
        .await;

    let orders = h.client.list_orders().await.expect("orders should load");
    assert!(!orders.is_paginated());
    assert_json_eq!(orders.into_data(), json!([{"orderId": 1, "total": 5500}]));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_order_forwards_values() {
    let mut h = harness().await;
    let values = json!({
        "saveAddress": true,
        "shippingAddress": {"fullName": "Bob", "city": "Leeds"}
    });
    let mock = h
        .server
        .mock("POST", "/api/rest/v1/order/product")
        .match_body(Matcher::Json(values.clone()))
        .with_status(201)
        .with_body(r#"{"orderId":2}"#)
        .create_async()
        .await;

    let created = h.client.create_order(&values).await.expect("order should be created");
    assert_eq!(created.data()["orderId"], json!(2));
    mock.assert_async().await;
}
