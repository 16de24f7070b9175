//! # Error Types
//!
//! Domain-specific error types for billsplit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  SplitError          - Anything that stops a split                     │
//! │  ├── InvalidDateFormat  - strict date parsing failed                   │
//! │  ├── Validation         - wraps ValidationError                        │
//! │  ├── Config             - TOML / env configuration unusable            │
//! │  └── Json               - wire payload could not be (de)serialized     │
//! │                                                                         │
//! │  ValidationError     - Input rule violations (per field)               │
//! │                                                                         │
//! │  Flow: ValidationError → SplitError → caller (UI / API layer)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, input, etc.)
//! 3. Errors are enum variants, never String
//! 4. A split either fully succeeds or returns exactly one error

use rust_decimal::Decimal;
use thiserror::Error;

// =============================================================================
// Split Error
// =============================================================================

/// Errors returned by the bill splitting pipeline.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The bill date is not in `YYYY-MM-DD` form.
    ///
    /// ## When This Occurs
    /// - Wrong number of `-` separated components
    /// - A component is empty or not made of digits
    /// - Calendar checking is enabled and the date does not exist
    #[error("Invalid date format '{input}': {reason}")]
    InvalidDateFormat { input: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration could not be parsed or contains unknown values.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A JSON payload did not match the bill wire shape.
    #[error("Invalid bill payload: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a bill doesn't meet the input rules.
/// Validation runs before any arithmetic.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A monetary field is negative.
    #[error("{field} must not be negative (got {value})")]
    MustBeNonNegative { field: String, value: Decimal },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: Decimal,
        max: Decimal,
    },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with SplitError.
pub type SplitResult<T> = Result<T, SplitError>;

// =============================================================================
// Unit Tests
// =============================================================================
