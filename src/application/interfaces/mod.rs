/// Cart service interface
pub mod cart;
/// Catalog service interface
pub mod catalog;
/// Notification and navigation hooks
pub mod effects;
/// Identity service interface
pub mod identity;
/// Orders service interface
pub mod order;
