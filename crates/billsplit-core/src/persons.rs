//! # Person Resolution
//!
//! Finds everyone who owes money: the distinct owners of personal items, in
//! the order they first appear on the receipt.

use std::collections::HashSet;

use crate::types::BillItem;

/// Returns the distinct persons named by personal items, first occurrence
/// first.
///
/// Shared items name nobody, so a bill with only shared items resolves to an
/// empty list.
///
/// ## Example
/// ```rust
/// use billsplit_core::persons::resolve_persons;
/// use billsplit_core::types::BillItem;
/// use rust_decimal::Decimal;
///
/// let items = vec![
///     BillItem::personal("rice", Decimal::from(20), "Bob"),
///     BillItem::shared("tea", Decimal::from(10)),
///     BillItem::personal("noodles", Decimal::from(15), "Alice"),
///     BillItem::personal("beer", Decimal::from(8), "Bob"),
/// ];
/// assert_eq!(resolve_persons(&items), vec!["Bob", "Alice"]);
/// ```
pub fn resolve_persons(items: &[BillItem]) -> Vec<&str> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(BillItem::person)
        .filter(|person| seen.insert(*person))
        .collect()
}
