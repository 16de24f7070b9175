//! # Per-Person Shares
//!
//! Computes what each person owes before reconciliation.
//!
//! ## Share Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  persons         = number of distinct persons                          │
//! │                                                                         │
//! │  personal(p)     = Σ price of p's personal items                       │
//! │  shared          = Σ (price / persons) over shared items               │
//! │  raw(p)          = personal(p) + shared                                │
//! │  tip(p)          = round1(raw(p) × rate)                               │
//! │  amount(p)       = round1(raw(p) + tip(p))                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every person's tip is rounded on its own, so the shares can drift a few
//! sub-units away from the bill's grand total. [`crate::reconcile`] removes
//! that drift.
//!
//! `shared` is usually a repeating fraction (10 / 3). Tip and amount are
//! therefore computed on `raw(p) × persons` and divided by `persons` once, as
//! the last step before rounding, so an exact midpoint such as 0.15 / 3 is
//! never truncated to just below 0.05.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::persons::resolve_persons;
use crate::types::{BillItem, PersonShare, TipRate};

/// Every intermediate value of one person's share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShareBreakdown {
    pub name: String,

    /// Personal items only.
    #[serde(with = "rust_decimal::serde::float")]
    #[ts(type = "number")]
    pub personal: Decimal,

    /// This person's slice of the shared items.
    #[serde(with = "rust_decimal::serde::float")]
    #[ts(type = "number")]
    pub shared: Decimal,

    /// `personal + shared`, unrounded.
    #[serde(with = "rust_decimal::serde::float")]
    #[ts(type = "number")]
    pub raw: Decimal,

    #[ts(type = "number")]
    pub tip: Money,

    /// Rounded amount before reconciliation.
    #[ts(type = "number")]
    pub amount: Money,
}

impl ShareBreakdown {
    /// Drops the intermediate values.
    pub fn to_share(&self) -> PersonShare {
        PersonShare::new(self.name.clone(), self.amount)
    }
}

/// Computes the breakdown for every person, in first-appearance order.
///
/// Returns an empty list when no item is personal; shared cost is then not
/// allocated to anyone.
pub fn share_breakdowns(items: &[BillItem], rate: TipRate) -> Vec<ShareBreakdown> {
    let persons = resolve_persons(items);
    if persons.is_empty() {
        return Vec::new();
    }

    let headcount = Decimal::from(persons.len());
    let shared_total: Decimal = items
        .iter()
        .filter(|item| item.is_shared())
        .map(|item| item.price)
        .sum();
    let shared = shared_total / headcount;

    persons
        .into_iter()
        .map(|name| {
            let personal: Decimal = items
                .iter()
                .filter(|item| item.is_owned_by(name))
                .map(|item| item.price)
                .sum();
            // raw(p) × headcount, exact
            let scaled_raw = personal * headcount + shared_total;
            let tip = Money::round_from(scaled_raw * rate.fraction() / headcount);
            let amount =
                Money::round_from((scaled_raw + tip.to_decimal() * headcount) / headcount);

            ShareBreakdown {
                name: name.to_string(),
                personal,
                shared,
                raw: personal + shared,
                tip,
                amount,
            }
        })
        .collect()
}

/// Computes each person's rounded share, in first-appearance order.
pub fn person_shares(items: &[BillItem], rate: TipRate) -> Vec<PersonShare> {
    share_breakdowns(items, rate)
        .iter()
        .map(ShareBreakdown::to_share)
        .collect()
}
