//! Cart view model
//!
//! Rebuilt from scratch on every change; there is no diffing.

use shared::LineItem;
use shared::money::format_money;

use crate::cart::CartTotals;

/// Placeholder shown instead of rows when the cart is empty
pub const EMPTY_CART_PLACEHOLDER: &str = "Your cart is empty";

/// A control the host wires to a button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    UpdateQuantity { id: String, delta: i32 },
    Remove { id: String },
}

/// One rendered cart line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub id: String,
    pub name: String,
    /// e.g. `R25.00 each`
    pub price_label: String,
    pub quantity: i32,
    /// `-` button
    pub decrement: CartAction,
    /// `+` button
    pub increment: CartAction,
    /// `Remove` button
    pub remove: CartAction,
}

impl CartRow {
    fn from_item(item: &LineItem, currency_symbol: &str) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price_label: format!(
                "{} each",
                format_money(currency_symbol, shared::money::to_decimal(item.unit_price))
            ),
            quantity: item.quantity,
            decrement: CartAction::UpdateQuantity {
                id: item.id.clone(),
                delta: -1,
            },
            increment: CartAction::UpdateQuantity {
                id: item.id.clone(),
                delta: 1,
            },
            remove: CartAction::Remove {
                id: item.id.clone(),
            },
        }
    }
}

/// Item list region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartListView {
    Empty { placeholder: &'static str },
    Rows(Vec<CartRow>),
}

/// Everything the surface needs to redraw the cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Badge on the cart icon
    pub item_count: i32,
    /// Total with two decimals, shown in both the cart and checkout panels
    pub total: String,
    pub list: CartListView,
    /// Whether the checkout button is shown
    pub checkout_visible: bool,
}

impl CartView {
    pub fn build(items: &[LineItem], totals: &CartTotals, currency_symbol: &str) -> Self {
        let list = if items.is_empty() {
            CartListView::Empty {
                placeholder: EMPTY_CART_PLACEHOLDER,
            }
        } else {
            CartListView::Rows(
                items
                    .iter()
                    .map(|item| CartRow::from_item(item, currency_symbol))
                    .collect(),
            )
        };

        Self {
            item_count: totals.item_count,
            total: totals.total_display(),
            checkout_visible: !items.is_empty(),
            list,
        }
    }
}
