//! # Rounding Reconciliation
//!
//! Nudges rounded shares so they add up to the rounded grand total.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  difference = total − Σ shares            (exact, in sub-units)        │
//! │                                                                         │
//! │  difference == 0 ──► done                                              │
//! │                                                                         │
//! │  otherwise step = ±0.1 (sign of difference)                            │
//! │                                                                         │
//! │    persons:   Alice    Bob     Carol    Dave                           │
//! │                 │       │        │                                      │
//! │               +step   +step    (difference now 0, stop)                │
//! │                                                                         │
//! │  • at most one step per person                                         │
//! │  • earliest persons absorb the correction                              │
//! │  • drift larger than the headcount is left as `residual`               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use billsplit_core::money::Money;
//! use billsplit_core::reconcile::reconcile;
//! use billsplit_core::types::PersonShare;
//!
//! let shares = vec![
//!     PersonShare::new("Alice", Money::from_sub_units(121)),
//!     PersonShare::new("Bob", Money::from_sub_units(121)),
//! ];
//! let result = reconcile(Money::from_sub_units(241), shares);
//!
//! assert_eq!(result.shares[0].amount, Money::from_sub_units(120));
//! assert_eq!(result.shares[1].amount, Money::from_sub_units(121));
//! assert!(result.is_balanced());
//! ```

use tracing::{trace, warn};

use crate::money::Money;
use crate::types::PersonShare;

/// Outcome of [`reconcile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Corrected shares, same order as the input.
    pub shares: Vec<PersonShare>,

    /// How many persons received a ±0.1 step.
    pub adjusted: usize,

    /// `total − Σ shares` after reconciliation. Zero unless the drift
    /// exceeded one sub-unit per person.
    pub residual: Money,
}

impl Reconciliation {
    /// Checks that the shares sum exactly to the total.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.residual.is_zero()
    }
}

/// Reconciles rounded shares against the rounded grand total.
///
/// Shares are already whole sub-units, so every comparison here is exact.
/// With no shares the whole total is reported as residual.
pub fn reconcile(total: Money, shares: Vec<PersonShare>) -> Reconciliation {
    let sum: Money = shares.iter().map(|share| share.amount).sum();
    let mut difference = total - sum;

    if difference.is_zero() {
        return Reconciliation {
            shares,
            adjusted: 0,
            residual: Money::zero(),
        };
    }

    let step = Money::one_sub_unit() * difference.signum();
    let mut adjusted = 0;

    let shares: Vec<PersonShare> = shares
        .into_iter()
        .map(|mut share| {
            if !difference.is_zero() {
                share.amount += step;
                difference -= step;
                adjusted += 1;
                trace!(
                    person = %share.name,
                    amount = %share.amount,
                    remaining = %difference,
                    "Adjusted share"
                );
            }
            share
        })
        .collect();

    if !difference.is_zero() && !shares.is_empty() {
        warn!(
            residual = %difference,
            persons = shares.len(),
            "Rounding drift exceeds one sub-unit per person; shares left unbalanced"
        );
    }

    Reconciliation {
        shares,
        adjusted,
        residual: difference,
    }
}
