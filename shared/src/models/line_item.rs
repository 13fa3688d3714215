//! Line Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money;

/// One product entry in the cart
///
/// Identity is `id`: adding the same product again bumps `quantity`
/// instead of appending a second line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product ID
    pub id: String,
    /// Product name (display)
    pub name: String,
    /// Unit price in currency unit
    #[serde(rename = "price")]
    pub unit_price: f64,
    /// Quantity, always >= 1 while the item is in a cart
    pub quantity: i32,
}

impl LineItem {
    /// New line with quantity 1
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity: 1,
        }
    }

    /// unit_price × quantity, rounded to cents (saturating)
    pub fn line_total(&self) -> Decimal {
        money::line_total(self.unit_price, self.quantity)
    }

    /// unit_price × quantity, `None` when it does not fit a `Decimal`
    pub fn checked_line_total(&self) -> Option<Decimal> {
        money::checked_line_total(self.unit_price, self.quantity)
    }
}
