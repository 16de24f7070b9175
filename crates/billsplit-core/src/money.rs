//! # Money Module
//!
//! Provides the `Money` type for rounded monetary values.
//!
//! ## Two Kinds of Amounts
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UNROUNDED (rust_decimal::Decimal)      ROUNDED (Money)                 │
//! │  ─────────────────────────────────      ───────────────────────────     │
//! │  item prices                            tip                             │
//! │  subtotal                               grand total                     │
//! │  raw per-person totals (10 / 3 ...)     per-person shares               │
//! │                                                                         │
//! │  Exact decimal math, no floats.         Integer count of sub-units.     │
//! │                                         One sub-unit = 0.1 unit.        │
//! │                                                                         │
//! │              Decimal ──► Money::round_from ──► Money                    │
//! │              (round half away from zero at 0.1)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Once an amount is `Money`, every sum and difference is exact integer
//! arithmetic. That is what lets reconciliation compare a sum of shares with
//! the grand total using `==` instead of a float tolerance.
//!
//! ## Usage
//! ```rust
//! use billsplit_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let share = Money::round_from(Decimal::new(1234, 2)); // 12.34
//! assert_eq!(share.sub_units(), 123);                  // 12.3
//! assert_eq!(share.to_string(), "12.3");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::TipRate;
use crate::SUB_UNITS_PER_UNIT;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value counted in sub-units (0.1 of the currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values appear as reconciliation deltas and
///   with negative tip percentages
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde as a JSON number**: `Money::from_sub_units(330)` is `33.0` on the
///   wire, the shape the calling UI already consumes
///
/// ## Where Money is Used
/// ```text
/// subtotal (Decimal) ──► calculate_tip ──► tip (Money)
///        │                                    │
///        └──────────────► round_from ◄────────┘ ──► grand total (Money)
///
/// raw share (Decimal) ──► calculate_tip ──► round_from ──► share (Money)
///                                                             │
///                                      reconcile(total, shares)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from sub-units.
    ///
    /// ## Example
    /// ```rust
    /// use billsplit_core::money::Money;
    ///
    /// let tip = Money::from_sub_units(33); // 3.3
    /// assert_eq!(tip.sub_units(), 33);
    /// ```
    #[inline]
    pub const fn from_sub_units(sub_units: i64) -> Self {
        Money(sub_units)
    }

    /// Rounds an exact decimal to the nearest sub-unit, half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use billsplit_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Money::round_from(Decimal::new(125, 2)).sub_units(), 13);   //  1.25 →  1.3
    /// assert_eq!(Money::round_from(Decimal::new(-125, 2)).sub_units(), -13); // -1.25 → -1.3
    /// assert_eq!(Money::round_from(Decimal::new(124, 2)).sub_units(), 12);   //  1.24 →  1.2
    /// ```
    ///
    /// Amounts beyond the i64 range saturate; input validation keeps bills
    /// far below that.
    pub fn round_from(amount: Decimal) -> Money {
        let rounded = amount.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        // After round_dp(1) the scale is 0 or 1.
        let mantissa = if rounded.scale() == 0 {
            rounded.mantissa() * i128::from(SUB_UNITS_PER_UNIT)
        } else {
            rounded.mantissa()
        };
        let sub_units = i64::try_from(mantissa).unwrap_or(if mantissa < 0 {
            i64::MIN
        } else {
            i64::MAX
        });
        Money(sub_units)
    }

    /// Converts an exact decimal that is already a multiple of 0.1.
    ///
    /// Returns `None` when rounding would change the value.
    pub fn from_decimal_exact(amount: Decimal) -> Option<Money> {
        let money = Money::round_from(amount);
        (money.to_decimal() == amount).then_some(money)
    }

    /// Calculates a tip on an unrounded amount, rounded to the sub-unit.
    ///
    /// ## Example
    /// ```rust
    /// use billsplit_core::money::Money;
    /// use billsplit_core::types::TipRate;
    /// use rust_decimal::Decimal;
    ///
    /// let rate = TipRate::from_percentage(Decimal::from(15));
    /// // 12.34 × 15% = 1.851 → 1.9
    /// let tip = Money::calculate_tip(Decimal::new(1234, 2), rate);
    /// assert_eq!(tip.sub_units(), 19);
    /// ```
    pub fn calculate_tip(amount: Decimal, rate: TipRate) -> Money {
        Money::round_from(amount * rate.fraction())
    }

    /// Returns the value in sub-units.
    #[inline]
    pub const fn sub_units(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / SUB_UNITS_PER_UNIT
    }

    /// Returns the sub-unit digit (always 0-9).
    #[inline]
    pub const fn sub_unit_part(&self) -> i64 {
        (self.0 % SUB_UNITS_PER_UNIT).abs()
    }

    /// Returns the value as an exact decimal with one fractional digit.
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 1)
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// The smallest adjustable amount (0.1).
    #[inline]
    pub const fn one_sub_unit() -> Self {
        Money(1)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `1`, `0` or `-1` following the sign of the value.
    #[inline]
    pub const fn signum(&self) -> i64 {
        self.0.signum()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Fixed formatting with one fractional digit and no currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{}", sign, self.units().abs(), self.sub_unit_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (used for signed sub-unit steps).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, factor: i64) -> Self {
        Money(self.0 * factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.to_decimal(), serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Money::from_decimal_exact(amount).ok_or_else(|| {
            serde::de::Error::custom(format!("{amount} is not a multiple of 0.1"))
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
