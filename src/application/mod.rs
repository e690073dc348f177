/// Client facade implementing every service interface
pub mod client;
/// Service and side-effect interfaces
pub mod interfaces;
/// Route table for the named operations
pub mod routes;
