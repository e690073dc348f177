/// User agent string used in HTTP requests to identify this client to the storefront services
pub const USER_AGENT: &str = "storefront-client/0.1.0";
/// Response header carrying the JSON-encoded pagination descriptor
pub const PAGINATION_HEADER: &str = "pagination";
/// Request header carrying the per-call correlation id
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";
/// Route the navigator is sent to when a service answers 500
pub const SERVER_ERROR_ROUTE: &str = "/server-error";
/// Notification text for a 400 response without a `title`
pub const BAD_REQUEST_MESSAGE: &str = "400 bad request";
/// Notification text for a 401 response without a `title`
pub const UNAUTHORISED_MESSAGE: &str = "Unauthorised";
/// Versioned REST prefix shared by every service
pub const DEFAULT_API_PREFIX: &str = "api/rest/v1";
/// Default base URL of the catalog service
pub const DEFAULT_CATALOG_URL: &str = "https://product1827.azurewebsites.net";
/// Default base URL of the cart service
pub const DEFAULT_CART_URL: &str = "https://cart1827.azurewebsites.net";
/// Default base URL of the identity service
pub const DEFAULT_IDENTITY_URL: &str = "https://identity1827.azurewebsites.net";
/// Default base URL of the orders service
pub const DEFAULT_ORDERS_URL: &str = "https://order1827.azurewebsites.net";
/// Length of the generated request correlation id
pub const REQUEST_ID_LENGTH: usize = 30;
