//! # Bill Totals
//!
//! Subtotal, tip and grand total for the whole bill.
//!
//! ```text
//! items ──► subtotal (exact) ──► tip = round1(subtotal × rate)
//!                │                        │
//!                └──────► total = round1(subtotal + tip)
//! ```

use rust_decimal::Decimal;

use crate::money::Money;
use crate::types::{BillItem, TipRate};

/// Sums every item price, shared and personal alike, in input order.
pub fn subtotal(items: &[BillItem]) -> Decimal {
    items.iter().map(|item| item.price).sum()
}

/// Tip on the whole bill, rounded to the sub-unit.
#[inline]
pub fn tip(subtotal: Decimal, rate: TipRate) -> Money {
    Money::calculate_tip(subtotal, rate)
}

/// Grand total, rounded to the sub-unit.
///
/// `tip` is already rounded, so this only rounds away the subtotal's extra
/// precision (e.g. 12.34 + 1.9 = 14.24 → 14.2).
#[inline]
pub fn grand_total(subtotal: Decimal, tip: Money) -> Money {
    Money::round_from(subtotal + tip.to_decimal())
}
