//! Shared types for the Sweet Treats storefront
//!
//! Domain types used by both the message-composition crate and the
//! storefront itself: line items, customer details, order records,
//! the unified error system and a few id/time helpers.

pub mod error;
pub mod models;
pub mod money;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{CustomerInfo, LineItem, OrderRecord};
pub use serde::{Deserialize, Serialize};
