/// Token provider trait
pub mod interface;
/// In-memory session token store
pub mod store;

pub use interface::*;
pub use store::*;
