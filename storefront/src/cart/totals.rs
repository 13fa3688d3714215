//! Derived cart totals

use rust_decimal::Decimal;
use shared::LineItem;
use shared::money::{self, format_amount};

/// Item count and total price, recomputed from the items every time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartTotals {
    /// Σ quantity
    pub item_count: i32,
    /// Σ unit_price × quantity, rounded to cents
    pub total: Decimal,
}

impl CartTotals {
    /// Compute totals over a slice of line items
    ///
    /// Saturates instead of overflowing. A [`Cart`](super::Cart) never
    /// holds items whose totals do not fit, see [`try_compute`](Self::try_compute).
    pub fn compute(items: &[LineItem]) -> Self {
        let (item_count, total) = items.iter().fold((0i32, Decimal::ZERO), |(n, sum), item| {
            (
                n.saturating_add(item.quantity),
                sum.saturating_add(item.line_total()),
            )
        });
        Self {
            item_count,
            total: money::round_cents(total),
        }
    }

    /// Compute totals, `None` if the count or the price overflows
    pub fn try_compute(items: &[LineItem]) -> Option<Self> {
        let mut item_count = 0i32;
        let mut total = Decimal::ZERO;
        for item in items {
            item_count = item_count.checked_add(item.quantity)?;
            total = total.checked_add(item.checked_line_total()?)?;
        }
        Some(Self {
            item_count,
            total: money::round_cents(total),
        })
    }

    /// Total with exactly two decimals, e.g. `90.00`
    pub fn total_display(&self) -> String {
        format_amount(self.total)
    }

    /// Total as f64 for storage
    pub fn total_f64(&self) -> f64 {
        money::to_f64(self.total)
    }
}
