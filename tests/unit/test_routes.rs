use reqwest::Method;
use storefront_client::application::routes::{Operation, Service};
use storefront_client::config::{Config, ServicesConfig};
use storefront_client::error::AppError;

fn config() -> Config {
    Config {
        services: ServicesConfig {
            catalog: "https://catalog.test".to_string(),
            cart: "https://cart.test".to_string(),
            identity: "https://identity.test/gateway".to_string(),
            orders: "https://orders.test".to_string(),
        },
        api_prefix: "api/rest/v1".to_string(),
        user_agent: "test".to_string(),
    }
}

fn url(operation: Operation, id: Option<&str>) -> String {
    operation.route().url(&config(), id).unwrap().to_string()
}

#[test]
fn test_catalog_routes() {
    assert_eq!(url(Operation::CatalogList, None), "https://catalog.test/api/rest/v1/products");
    assert_eq!(url(Operation::CatalogDetails, Some("42")), "https://catalog.test/api/rest/v1/42");
    assert_eq!(url(Operation::CatalogFilters, None), "https://catalog.test/api/rest/v1/filters");
}

#[test]
fn test_cart_routes() {
    assert_eq!(url(Operation::CartGet, None), "https://cart.test/api/rest/v1/cart/items");
    assert_eq!(url(Operation::CartAddItem, None), "https://cart.test/api/rest/v1/cart/add");
    assert_eq!(url(Operation::CartRemoveItem, Some("7")), "https://cart.test/api/rest/v1/cart/delete/7");
    assert_eq!(url(Operation::CartReduceQuantity, Some("7")), "https://cart.test/api/rest/v1/cart/reduce/7");
    assert_eq!(url(Operation::CartClear, None), "https://cart.test/api/rest/v1/cart/clearAll");
}

#[test]
fn test_identity_and_order_routes() {
    assert_eq!(
        url(Operation::IdentityLogin, None),
        "https://identity.test/gateway/api/rest/v1/user/login"
    );
    assert_eq!(
        url(Operation::IdentityCurrentUser, None),
        "https://identity.test/gateway/api/rest/v1/user/currentuser"
    );
    assert_eq!(url(Operation::OrdersList, None), "https://orders.test/api/rest/v1/order/items");
    assert_eq!(url(Operation::OrdersCreate, None), "https://orders.test/api/rest/v1/order/product");
}

#[test]
fn test_methods() {
    assert_eq!(Operation::CatalogList.route().method, Method::GET);
    assert_eq!(Operation::CartAddItem.route().method, Method::POST);
    assert_eq!(Operation::CartRemoveItem.route().method, Method::DELETE);
    assert_eq!(Operation::CartClear.route().method, Method::DELETE);
    assert_eq!(Operation::IdentityRegister.route().method, Method::POST);
    assert_eq!(Operation::OrdersCreate.route().method, Method::POST);
}

#[test]
fn test_every_operation_targets_its_service() {
    for operation in Operation::ALL {
        let service = operation.route().service;
        assert!(
            operation.name().starts_with(match service {
                Service::Catalog => "catalog.",
                Service::Cart => "cart.",
                Service::Identity => "identity.",
                Service::Orders => "orders.",
            }),
            "{operation} routed to {service}"
        );
    }
}

#[test]
fn test_identifier_is_encoded_as_one_segment() {
    assert_eq!(
        url(Operation::CartRemoveItem, Some("a b/c")),
        "https://cart.test/api/rest/v1/cart/delete/a%20b%2Fc"
    );
}

#[test]
fn test_identifier_validation() {
    let route = Operation::CartRemoveItem.route();
    assert!(route.takes_id());
    assert!(matches!(route.url(&config(), None), Err(AppError::InvalidInput(_))));
    assert!(matches!(route.url(&config(), Some(" ")), Err(AppError::InvalidInput(_))));

    let route = Operation::CartClear.route();
    assert!(!route.takes_id());
    assert!(matches!(route.url(&config(), Some("1")), Err(AppError::InvalidInput(_))));
}

#[test]
fn test_invalid_base_url() {
    let mut config = config();
    config.services.orders = "not a url".to_string();
    let result = Operation::OrdersList.route().url(&config, None);
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_dot_segment_identifiers_are_rejected() {
    let route = Operation::CartRemoveItem.route();
    for id in [".", ".."] {
        match route.url(&config(), Some(id)) {
            Err(AppError::InvalidInput(message)) => assert!(message.contains(id)),
            other => panic!("expected InvalidInput for {id:?}, got {other:?}"),
        }
    }
    assert_eq!(
        url(Operation::CatalogDetails, Some("..a")),
        "https://catalog.test/api/rest/v1/..a"
    );
}
