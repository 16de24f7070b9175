//! # billsplit-core: Pure Bill Splitting Logic
//!
//! Splits a shared restaurant bill into per-person amounts that add up
//! exactly to the rounded grand total. Everything here is a pure function
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Billsplit Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Caller (UI / API layer, not in this repo)          │   │
//! │  │      Receipt entry ──► BillInput JSON ──► Summary screen        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ split / split_json                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ billsplit-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   share   │  │ reconcile │  │   │
//! │  │   │ BillInput │  │   Money   │  │ breakdown │  │  ±0.1     │  │   │
//! │  │   │ BillOutput│  │  round1   │  │ per-tip   │  │  steps    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Bill input/output types and their JSON wire shape
//! - [`money`] - Money type counted in 0.1 sub-units
//! - [`error`] - Domain error types
//! - [`config`] - Splitter configuration (TOML, env overrides)
//! - [`validation`] - Input rules
//! - [`date`] - `YYYY-MM-DD` → `YYYY年M月D日`
//! - [`aggregate`] - Subtotal, tip, grand total
//! - [`persons`] - Who is on the bill
//! - [`share`] - Per-person shares before reconciliation
//! - [`reconcile`] - Make the shares add up
//! - [`splitter`] - The full pipeline
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, no shared state
//! 2. **No Floats**: prices are exact decimals, rounded amounts are integers
//! 3. **Round Half Away From Zero** at 0.1, at fixed points in the pipeline
//! 4. **Earliest Persons Absorb Drift**: deterministic, order-dependent
//!
//! ## Example Usage
//!
//! ```rust
//! use billsplit_core::{split_bill, BillInput, BillItem, TipRate};
//! use rust_decimal::Decimal;
//!
//! let input = BillInput::new("2024-03-21", "Taipei", TipRate::from_percentage(Decimal::ZERO))
//!     .with_item(BillItem::personal("rice", Decimal::from(10), "Alice"))
//!     .with_item(BillItem::personal("noodles", Decimal::from(10), "Bob"))
//!     .with_item(BillItem::shared("tea", Decimal::from(10)));
//!
//! let output = split_bill(&input).unwrap();
//! assert_eq!(output.total_amount.to_string(), "30.0");
//! assert_eq!(output.items[0].amount.to_string(), "15.0");
//! assert_eq!(output.items[1].amount.to_string(), "15.0");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregate;
pub mod config;
pub mod date;
pub mod error;
pub mod money;
pub mod persons;
pub mod reconcile;
pub mod share;
pub mod splitter;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::{DateMode, SplitConfig};
pub use error::{SplitError, SplitResult, ValidationError};
pub use money::Money;
pub use reconcile::{reconcile, Reconciliation};
pub use share::ShareBreakdown;
pub use splitter::{split_bill, BillSplitter};
pub use types::*;

use rust_decimal::Decimal;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sub-units per currency unit. Every rounded amount is a multiple of
/// `1 / SUB_UNITS_PER_UNIT` = 0.1.
pub const SUB_UNITS_PER_UNIT: i64 = 10;

/// Maximum line items on one bill.
pub const MAX_BILL_ITEMS: usize = 10_000;

/// Maximum price of a single item (1,000,000,000).
///
/// Together with [`MAX_BILL_ITEMS`] and [`MAX_TIP_PERCENTAGE`] this keeps
/// every total well inside `Money`'s i64 sub-units.
pub const MAX_ITEM_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Maximum absolute tip percentage accepted.
pub const MAX_TIP_PERCENTAGE: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);
