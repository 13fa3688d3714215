//! Money calculation utilities using rust_decimal for precision
//!
//! Prices travel as `f64` (the format the order history has always been
//! written in) but every sum and product goes through `Decimal` first.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
///
/// Values `Decimal` cannot hold become zero; check with [`try_to_decimal`]
/// before accepting a price.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    try_to_decimal(value).unwrap_or_default()
}

/// Convert f64 to Decimal, `None` for NaN, infinities and values beyond
/// `Decimal`'s range (about ±7.9e28)
#[inline]
pub fn try_to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Round a Decimal to cents
#[inline]
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_cents(value).to_f64().unwrap_or_default()
}

/// Line total: unit price × quantity, `None` on overflow
pub fn checked_line_total(unit_price: f64, quantity: i32) -> Option<Decimal> {
    try_to_decimal(unit_price)?
        .checked_mul(Decimal::from(quantity))
        .map(round_cents)
}

/// Line total: unit price × quantity
///
/// Saturates at `Decimal::MAX` instead of panicking.
pub fn line_total(unit_price: f64, quantity: i32) -> Decimal {
    checked_line_total(unit_price, quantity).unwrap_or(Decimal::MAX)
}

/// Format an amount with exactly two decimals, no currency symbol
///
/// ```
/// use rust_decimal::Decimal;
/// use shared::money::format_amount;
///
/// assert_eq!(format_amount(Decimal::new(5, 0)), "5.00");
/// assert_eq!(format_amount(Decimal::new(12345, 3)), "12.35");
/// ```
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_cents(value))
}

/// Format an amount prefixed with a currency symbol, e.g. `R25.00`
pub fn format_money(symbol: &str, value: Decimal) -> String {
    format!("{}{}", symbol, format_amount(value))
}
