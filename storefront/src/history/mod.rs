//! Local order history
//!
//! Completed orders are appended to a single `orders` key holding a JSON
//! array, read-modify-append in one write transaction. Nothing is ever
//! removed: growth is unbounded, as it always has been for this store.

pub mod storage;

pub use storage::{HistoryError, HistoryResult, ORDERS_KEY, OrderHistory};
