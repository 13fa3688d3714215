//! Cart state
//!
//! Pure data + operations; nothing here knows about rendering.

use shared::error::{AppError, ErrorCode};
use shared::LineItem;
use shared::money::try_to_decimal;
use thiserror::Error;

use super::totals::CartTotals;

/// Cart operation errors
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    #[error("price must be a non-negative finite number, got {0}")]
    InvalidPrice(f64),

    #[error("cart totals would overflow if {id} changed")]
    TotalOutOfRange { id: String },
}

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::InvalidPrice(p) => {
                AppError::with_message(ErrorCode::InvalidPrice, err.to_string())
                    .with_detail("price", p)
            }
            CartError::TotalOutOfRange { ref id } => {
                AppError::with_message(ErrorCode::ValueOutOfRange, err.to_string())
                    .with_detail("id", id.clone())
            }
        }
    }
}

/// Result of a quantity change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// Item still in the cart with this quantity
    Updated(i32),
    /// Quantity reached zero or below; item removed
    Removed,
}

/// Session cart: line items in insertion order
///
/// Invariant: every item has `quantity >= 1`, ids are unique, and the item
/// count and total price fit their types.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Add one unit of a product
    ///
    /// Merges by id: an existing line gets `quantity + 1`, otherwise a new
    /// line with quantity 1 is appended. Returns the new quantity.
    pub fn add(&mut self, id: &str, name: &str, unit_price: f64) -> Result<i32, CartError> {
        if !unit_price.is_finite() || unit_price < 0.0 || try_to_decimal(unit_price).is_none() {
            return Err(CartError::InvalidPrice(unit_price));
        }

        if let Some(index) = self.position(id) {
            let quantity = self.items[index]
                .quantity
                .checked_add(1)
                .ok_or_else(|| out_of_range(id))?;
            return self.set_quantity(index, quantity).map(|_| quantity);
        }

        self.items.push(LineItem::new(id, name, unit_price));
        if CartTotals::try_compute(&self.items).is_none() {
            self.items.pop();
            return Err(out_of_range(id));
        }
        Ok(1)
    }

    /// Apply `delta` to an item's quantity
    ///
    /// `Ok(None)` when the id is not in the cart. A result of zero or less
    /// removes the line instead of keeping a non-positive quantity. A change
    /// that would overflow the totals is refused and leaves the cart as is.
    pub fn update_quantity(
        &mut self,
        id: &str,
        delta: i32,
    ) -> Result<Option<QuantityChange>, CartError> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };
        let quantity = self.items[index].quantity.saturating_add(delta);

        if quantity <= 0 {
            self.items.remove(index);
            return Ok(Some(QuantityChange::Removed));
        }

        self.set_quantity(index, quantity)?;
        Ok(Some(QuantityChange::Updated(quantity)))
    }

    /// Remove a line by id; returns whether anything was removed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Drop every line
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(&self.items)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Set a line's quantity, rolling back if the totals stop fitting
    fn set_quantity(&mut self, index: usize, quantity: i32) -> Result<(), CartError> {
        let previous = std::mem::replace(&mut self.items[index].quantity, quantity);
        if CartTotals::try_compute(&self.items).is_none() {
            self.items[index].quantity = previous;
            return Err(out_of_range(&self.items[index].id));
        }
        Ok(())
    }
}

fn out_of_range(id: &str) -> CartError {
    CartError::TotalOutOfRange { id: id.to_string() }
}
