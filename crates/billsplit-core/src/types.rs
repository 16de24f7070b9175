//! # Domain Types
//!
//! Core domain types used throughout Billsplit.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUT                                 OUTPUT                           │
//! │  ┌─────────────────┐                   ┌─────────────────┐             │
//! │  │   BillInput     │                   │   BillOutput    │             │
//! │  │  ─────────────  │                   │  ─────────────  │             │
//! │  │  date           │  ──► split ──►    │  date (年月日)  │             │
//! │  │  location       │                   │  location       │             │
//! │  │  tipPercentage  │                   │  subTotal       │             │
//! │  │  items[]        │                   │  tip            │             │
//! │  └────────┬────────┘                   │  totalAmount    │             │
//! │           │                            │  items[]        │             │
//! │  ┌────────▼────────┐                   └────────┬────────┘             │
//! │  │    BillItem     │                   ┌────────▼────────┐             │
//! │  │  name, price    │                   │  PersonShare    │             │
//! │  │  owner:         │                   │  name, amount   │             │
//! │  │   Shared |      │                   └─────────────────┘             │
//! │  │   Personal(who) │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! Items travel as [`BillItemRecord`] (`{ name, price, isShared, person? }`)
//! and are converted into [`BillItem`] on deserialization, so a personal item
//! without a person never reaches the splitter.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Tip Rate
// =============================================================================

/// Tip rate as a percentage (`10` means 10%).
///
/// Any value is accepted, including negative rates and rates above 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TipRate(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl TipRate {
    /// Creates a tip rate from a percentage.
    #[inline]
    pub const fn from_percentage(pct: Decimal) -> Self {
        TipRate(pct)
    }

    /// Returns the rate as a percentage.
    #[inline]
    pub const fn percentage(&self) -> Decimal {
        self.0
    }

    /// Returns the rate as a multiplier (`10%` → `0.1`).
    #[inline]
    pub fn fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    /// Zero tip rate.
    #[inline]
    pub const fn zero() -> Self {
        TipRate(Decimal::ZERO)
    }

    /// Checks if tip rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for TipRate {
    fn default() -> Self {
        TipRate::zero()
    }
}

// =============================================================================
// Bill Item
// =============================================================================

/// Who pays for a line item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemOwner {
    /// Split equally among every person on the bill.
    Shared,
    /// Paid in full by one named person.
    Personal(String),
}

/// A line item on the bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BillItemRecord", into = "BillItemRecord")]
pub struct BillItem {
    /// Display name (e.g., "Milk tea").
    pub name: String,

    /// Unrounded price.
    pub price: Decimal,

    /// Shared or personal.
    pub owner: ItemOwner,
}

impl BillItem {
    /// Creates an item split among everyone.
    pub fn shared(name: impl Into<String>, price: Decimal) -> Self {
        BillItem {
            name: name.into(),
            price,
            owner: ItemOwner::Shared,
        }
    }

    /// Creates an item owned by one person.
    pub fn personal(name: impl Into<String>, price: Decimal, person: impl Into<String>) -> Self {
        BillItem {
            name: name.into(),
            price,
            owner: ItemOwner::Personal(person.into()),
        }
    }

    /// Checks if the item is split among everyone.
    #[inline]
    pub fn is_shared(&self) -> bool {
        matches!(self.owner, ItemOwner::Shared)
    }

    /// Returns the owner's name for personal items.
    #[inline]
    pub fn person(&self) -> Option<&str> {
        match &self.owner {
            ItemOwner::Shared => None,
            ItemOwner::Personal(person) => Some(person),
        }
    }

    /// Checks if this is a personal item owned by `name`.
    #[inline]
    pub fn is_owned_by(&self, name: &str) -> bool {
        self.person() == Some(name)
    }
}

/// Wire representation of a [`BillItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillItemRecord {
    pub name: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[ts(type = "number")]
    pub price: Decimal,

    pub is_shared: bool,

    /// Required when `is_shared` is false, ignored otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub person: Option<String>,
}

impl TryFrom<BillItemRecord> for BillItem {
    type Error = ValidationError;

    fn try_from(record: BillItemRecord) -> Result<Self, Self::Error> {
        if record.is_shared {
            return Ok(BillItem::shared(record.name, record.price));
        }

        match record.person {
            Some(person) => Ok(BillItem::personal(record.name, record.price, person)),
            None => Err(ValidationError::Required {
                field: format!("person of personal item '{}'", record.name),
            }),
        }
    }
}

impl From<BillItem> for BillItemRecord {
    fn from(item: BillItem) -> Self {
        let (is_shared, person) = match item.owner {
            ItemOwner::Shared => (true, None),
            ItemOwner::Personal(person) => (false, Some(person)),
        };
        BillItemRecord {
            name: item.name,
            price: item.price,
            is_shared,
            person,
        }
    }
}

// =============================================================================
// Bill Input
// =============================================================================

/// Everything needed to split one bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillInput {
    /// Bill date as `YYYY-MM-DD`.
    pub date: String,

    /// Where the meal happened.
    pub location: String,

    #[ts(type = "number")]
    pub tip_percentage: TipRate,

    /// Line items in the order they appear on the receipt.
    #[ts(as = "Vec<BillItemRecord>")]
    pub items: Vec<BillItem>,
}

impl BillInput {
    /// Creates a bill with no items.
    pub fn new(date: impl Into<String>, location: impl Into<String>, tip_percentage: TipRate) -> Self {
        BillInput {
            date: date.into(),
            location: location.into(),
            tip_percentage,
            items: Vec::new(),
        }
    }

    /// Appends an item, keeping receipt order.
    pub fn with_item(mut self, item: BillItem) -> Self {
        self.items.push(item);
        self
    }
}

// =============================================================================
// Bill Output
// =============================================================================

/// The amount one person owes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PersonShare {
    pub name: String,
    #[ts(type = "number")]
    pub amount: Money,
}

impl PersonShare {
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        PersonShare {
            name: name.into(),
            amount,
        }
    }
}

/// The split bill.
///
/// ## Invariants
/// - `total_amount == round1(sub_total + tip)`
/// - `items` sum to `total_amount` whenever reconciliation had enough
///   persons to absorb the rounding drift
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillOutput {
    /// Date rendered as `YYYY年M月D日`.
    pub date: String,

    pub location: String,

    /// Sum of all item prices, not rounded.
    #[serde(with = "rust_decimal::serde::float")]
    #[ts(type = "number")]
    pub sub_total: Decimal,

    #[ts(type = "number")]
    pub tip: Money,

    #[ts(type = "number")]
    pub total_amount: Money,

    /// One entry per person, in first-appearance order.
    pub items: Vec<PersonShare>,
}

impl BillOutput {
    /// Sum of every person's share.
    pub fn shares_total(&self) -> Money {
        self.items.iter().map(|share| share.amount).sum()
    }

    /// Looks up a person's share by name.
    pub fn share_of(&self, name: &str) -> Option<Money> {
        self.items
            .iter()
            .find(|share| share.name == name)
            .map(|share| share.amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
