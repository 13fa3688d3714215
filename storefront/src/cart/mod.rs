//! Cart module
//!
//! - **state**: the owned [`Cart`] value and its pure operations
//! - **totals**: derived item count / price
//! - **manager**: [`CartManager`], which applies operations and broadcasts
//!   a [`CartEvent`] for every change
//!
//! ```text
//! UI event → CartManager → Cart (mutate) → CartEvent
//!                                              ↓
//!                                      Storefront refresh + subscribers
//! ```

pub mod manager;
pub mod state;
pub mod totals;

pub use manager::{CartEvent, CartManager};
pub use state::{Cart, CartError};
pub use totals::CartTotals;
