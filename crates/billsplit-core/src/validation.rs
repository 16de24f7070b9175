//! # Validation Module
//!
//! Input validation for bills, run before any arithmetic.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field               Rule                           Error               │
//! │  ─────────────────   ────────────────────────────   ─────────────────   │
//! │  items               at most MAX_BILL_ITEMS         OutOfRange          │
//! │  items[i].price      >= 0                           MustBeNonNegative   │
//! │  items[i].price      <= MAX_ITEM_PRICE              OutOfRange          │
//! │  items[i].person     not blank (personal items)     Required            │
//! │  tipPercentage       |pct| <= MAX_TIP_PERCENTAGE    OutOfRange          │
//! │  location            <= max_location_len chars      TooLong             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tip percentages outside 0-100 are fine; the limit only keeps the
//! arithmetic far from overflow. The first failing rule is reported.
//!
//! ## Usage
//! ```rust
//! use billsplit_core::validation::validate_price;
//! use rust_decimal::Decimal;
//!
//! assert!(validate_price(0, Decimal::from(12)).is_ok());
//! assert!(validate_price(0, Decimal::from(-1)).is_err());
//! ```

use rust_decimal::Decimal;

use crate::config::ValidationConfig;
use crate::error::ValidationError;
use crate::types::{BillInput, ItemOwner, TipRate};
use crate::{MAX_BILL_ITEMS, MAX_ITEM_PRICE, MAX_TIP_PERCENTAGE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a whole bill.
pub fn validate_bill(input: &BillInput, config: &ValidationConfig) -> ValidationResult<()> {
    validate_item_count(input.items.len())?;
    validate_location(&input.location, config.max_location_len)?;
    validate_tip_rate(input.tip_percentage)?;

    for (index, item) in input.items.iter().enumerate() {
        validate_price(index, item.price)?;
        if let ItemOwner::Personal(person) = &item.owner {
            validate_person(index, person)?;
        }
    }

    Ok(())
}

/// Validates an item price.
pub fn validate_price(index: usize, price: Decimal) -> ValidationResult<()> {
    let field = format!("items[{index}].price");

    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::MustBeNonNegative { field, value: price });
    }

    if price > MAX_ITEM_PRICE {
        return Err(ValidationError::OutOfRange {
            field,
            min: Decimal::ZERO,
            max: MAX_ITEM_PRICE,
        });
    }

    Ok(())
}

/// Validates the owner of a personal item.
pub fn validate_person(index: usize, person: &str) -> ValidationResult<()> {
    if person.trim().is_empty() {
        return Err(ValidationError::Required {
            field: format!("items[{index}].person"),
        });
    }

    Ok(())
}

/// Validates the tip percentage against the overflow guard.
pub fn validate_tip_rate(rate: TipRate) -> ValidationResult<()> {
    if rate.percentage().abs() > MAX_TIP_PERCENTAGE {
        return Err(ValidationError::OutOfRange {
            field: "tipPercentage".to_string(),
            min: -MAX_TIP_PERCENTAGE,
            max: MAX_TIP_PERCENTAGE,
        });
    }

    Ok(())
}

/// Validates the location length (in characters, not bytes).
pub fn validate_location(location: &str, max: usize) -> ValidationResult<()> {
    if location.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: "location".to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates the number of line items.
pub fn validate_item_count(count: usize) -> ValidationResult<()> {
    if count > MAX_BILL_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "items".to_string(),
            min: Decimal::ZERO,
            max: Decimal::from(MAX_BILL_ITEMS),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
