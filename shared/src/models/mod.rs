//! Data models
//!
//! Shared between the storefront and anything that reads its order history.
//! JSON field names follow the history format written by the storefront
//! page (camelCase, `price` for the unit price).

pub mod customer;
pub mod line_item;
pub mod order;

// Re-exports
pub use customer::*;
pub use line_item::*;
pub use order::*;
