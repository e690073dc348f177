/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// HTTP transport with the interceptor pipeline
pub mod http;
/// Request and response interceptors
pub mod interceptors;
/// Pagination metadata and response wrappers
pub mod pagination;
/// Request bodies sent by the service groups
pub mod requests;
