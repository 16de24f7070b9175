//! # Bill Splitter
//!
//! The pipeline that turns a [`BillInput`] into a [`BillOutput`].
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BillInput                                                              │
//! │      │                                                                  │
//! │      ├──► validate_bill ──────────────► ValidationError? stop           │
//! │      ├──► format_bill_date ───────────► InvalidDateFormat? stop         │
//! │      ├──► subtotal ──► tip ──► grand_total                              │
//! │      ├──► share_breakdowns (resolve persons, per-person tip)            │
//! │      └──► reconcile(grand_total, shares)                                │
//! │                │                                                        │
//! │                ▼                                                        │
//! │           BillOutput                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use billsplit_core::{split_bill, BillInput, BillItem, Money, TipRate};
//! use rust_decimal::Decimal;
//!
//! let input = BillInput::new("2024-03-21", "Taipei", TipRate::from_percentage(Decimal::from(10)))
//!     .with_item(BillItem::shared("tea", Decimal::from(10)))
//!     .with_item(BillItem::personal("rice", Decimal::from(20), "Alice"));
//!
//! let output = split_bill(&input).unwrap();
//! assert_eq!(output.date, "2024年3月21日");
//! assert_eq!(output.total_amount, Money::from_sub_units(330));
//! assert_eq!(output.share_of("Alice"), Some(Money::from_sub_units(330)));
//! ```

use tracing::{debug, warn};

use crate::aggregate::{grand_total, subtotal, tip};
use crate::config::SplitConfig;
use crate::date::format_bill_date;
use crate::error::SplitResult;
use crate::reconcile::reconcile;
use crate::share::{share_breakdowns, ShareBreakdown};
use crate::types::{BillInput, BillOutput};
use crate::validation::validate_bill;

/// Splits bills with a fixed configuration.
///
/// Holds no state besides its configuration; one splitter can serve any
/// number of callers.
#[derive(Debug, Clone, Default)]
pub struct BillSplitter {
    config: SplitConfig,
}

impl BillSplitter {
    pub fn new(config: SplitConfig) -> Self {
        BillSplitter { config }
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Splits a bill.
    ///
    /// ## Errors
    /// - [`crate::SplitError::Validation`] when an input rule fails
    /// - [`crate::SplitError::InvalidDateFormat`] when the date cannot be
    ///   parsed in strict mode
    pub fn split(&self, input: &BillInput) -> SplitResult<BillOutput> {
        validate_bill(input, &self.config.validation)?;
        let date = format_bill_date(&input.date, &self.config.date)?;

        let sub_total = subtotal(&input.items);
        let tip = tip(sub_total, input.tip_percentage);
        let total_amount = grand_total(sub_total, tip);

        let shares = share_breakdowns(&input.items, input.tip_percentage)
            .iter()
            .map(ShareBreakdown::to_share)
            .collect::<Vec<_>>();

        debug!(
            items = input.items.len(),
            persons = shares.len(),
            %sub_total,
            %tip,
            %total_amount,
            "Splitting bill"
        );

        if shares.is_empty() && input.items.iter().any(|item| item.is_shared()) {
            warn!(
                location = %input.location,
                "Bill has shared items but no persons; shared cost is not allocated"
            );
        }

        let reconciliation = reconcile(total_amount, shares);

        debug!(
            adjusted = reconciliation.adjusted,
            residual = %reconciliation.residual,
            "Bill split"
        );

        Ok(BillOutput {
            date,
            location: input.location.clone(),
            sub_total,
            tip,
            total_amount,
            items: reconciliation.shares,
        })
    }

    /// Returns every person's intermediate values, before reconciliation.
    ///
    /// Rejects the same bills as [`BillSplitter::split`].
    pub fn breakdown(&self, input: &BillInput) -> SplitResult<Vec<ShareBreakdown>> {
        validate_bill(input, &self.config.validation)?;
        format_bill_date(&input.date, &self.config.date)?;
        Ok(share_breakdowns(&input.items, input.tip_percentage))
    }

    /// Splits a bill received as JSON and returns the output as JSON.
    pub fn split_json(&self, input: &str) -> SplitResult<String> {
        let input: BillInput = serde_json::from_str(input)?;
        let output = self.split(&input)?;
        Ok(serde_json::to_string(&output)?)
    }
}

/// Splits a bill with the default configuration.
pub fn split_bill(input: &BillInput) -> SplitResult<BillOutput> {
    BillSplitter::default().split(input)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DateMode;
    use crate::error::SplitError;
    use crate::money::Money;
    use crate::types::{BillItem, PersonShare, TipRate};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn bill(tip_pct: Decimal) -> BillInput {
        BillInput::new("2024-03-21", "Taipei", TipRate::from_percentage(tip_pct))
    }

    fn money(sub_units: i64) -> Money {
        Money::from_sub_units(sub_units)
    }

    #[test]
    fn test_single_person_with_shared_item() {
        let input = bill(dec!(10))
            .with_item(BillItem::shared("tea", dec!(10)))
            .with_item(BillItem::personal("rice", dec!(20), "Alice"));

        let output = split_bill(&input).unwrap();

        assert_eq!(output.date, "2024年3月21日");
        assert_eq!(output.location, "Taipei");
        assert_eq!(output.sub_total, dec!(30));
        assert_eq!(output.tip, money(30));
        assert_eq!(output.total_amount, money(330));
        assert_eq!(output.items, vec![PersonShare::new("Alice", money(330))]);
    }

    #[test]
    fn test_two_people_no_tip() {
        let input = bill(dec!(0))
            .with_item(BillItem::personal("rice", dec!(10), "Alice"))
            .with_item(BillItem::personal("noodles", dec!(10), "Bob"))
            .with_item(BillItem::shared("tea", dec!(10)));

        let output = split_bill(&input).unwrap();

        assert_eq!(output.sub_total, dec!(30));
        assert!(output.tip.is_zero());
        assert_eq!(output.total_amount, money(300));
        assert_eq!(output.share_of("Alice"), Some(money(150)));
        assert_eq!(output.share_of("Bob"), Some(money(150)));
    }

    #[test]
    fn test_first_person_absorbs_tip_rounding_drift() {
        // bill:   21.1 + tip 3.165 → 3.2 = 24.3
        // person: 10.55 + tip 1.5825 → 1.6 = 12.15 → 12.2, Σ = 24.4
        let input = bill(dec!(15))
            .with_item(BillItem::personal("a", dec!(10.5), "Alice"))
            .with_item(BillItem::personal("b", dec!(10.5), "Bob"))
            .with_item(BillItem::shared("napkins", dec!(0.1)));

        let output = split_bill(&input).unwrap();

        assert_eq!(output.total_amount, money(243));
        assert_eq!(
            output.items,
            vec![
                PersonShare::new("Alice", money(121)),
                PersonShare::new("Bob", money(122)),
            ]
        );
        assert_eq!(output.shares_total(), output.total_amount);
    }

    #[test]
    fn test_three_way_split_gains_a_sub_unit() {
        // 10 / 3 = 3.333.. → 3.3 each, Σ 9.9 vs total 10.0
        let input = bill(dec!(0))
            .with_item(BillItem::shared("pizza", dec!(10)))
            .with_item(BillItem::personal("x", dec!(0), "A"))
            .with_item(BillItem::personal("y", dec!(0), "B"))
            .with_item(BillItem::personal("z", dec!(0), "C"));

        let output = split_bill(&input).unwrap();

        assert_eq!(output.total_amount, money(100));
        let amounts: Vec<Money> = output.items.iter().map(|s| s.amount).collect();
        assert_eq!(amounts, vec![money(34), money(33), money(33)]);
    }

    #[test]
    fn test_exact_midpoint_of_shared_items() {
        // 0.15 / 3 = 0.05 → 0.1 each, Σ 0.3 vs total 0.2
        let input = bill(dec!(0))
            .with_item(BillItem::shared("a", dec!(0.01)))
            .with_item(BillItem::shared("b", dec!(0.07)))
            .with_item(BillItem::shared("c", dec!(0.07)))
            .with_item(BillItem::personal("x", dec!(0), "A"))
            .with_item(BillItem::personal("y", dec!(0), "B"))
            .with_item(BillItem::personal("z", dec!(0), "C"));

        let output = split_bill(&input).unwrap();

        assert_eq!(output.total_amount, money(2));
        let amounts: Vec<Money> = output.items.iter().map(|s| s.amount).collect();
        assert_eq!(amounts, vec![money(0), money(1), money(1)]);
    }

    #[test]
    fn test_empty_bill() {
        let output = split_bill(&bill(dec!(10))).unwrap();
        assert_eq!(output.sub_total, Decimal::ZERO);
        assert!(output.tip.is_zero());
        assert!(output.total_amount.is_zero());
        assert!(output.items.is_empty());
    }

    #[test]
    fn test_shared_only_bill_has_no_shares() {
        let input = bill(dec!(10)).with_item(BillItem::shared("tea", dec!(10)));
        let output = split_bill(&input).unwrap();
        assert_eq!(output.total_amount, money(110));
        assert!(output.items.is_empty());
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let mut input = bill(dec!(10));
        input.date = "21/03/2024".to_string();
        assert!(matches!(
            split_bill(&input),
            Err(SplitError::InvalidDateFormat { .. })
        ));
    }

    #[test]
    fn test_lenient_date_mode() {
        let mut input = bill(dec!(10));
        input.date = "2024-03".to_string();
        let splitter = BillSplitter::new(SplitConfig::lenient());
        assert_eq!(splitter.config().date.mode, DateMode::Lenient);
        assert_eq!(splitter.split(&input).unwrap().date, "2024年3月?日");
    }

    #[test]
    fn test_validation_runs_first() {
        let mut input = bill(dec!(10)).with_item(BillItem::shared("refund", dec!(-1)));
        input.date = "not a date".to_string();
        assert!(matches!(split_bill(&input), Err(SplitError::Validation(_))));
    }

    #[test]
    fn test_breakdown() {
        let input = bill(dec!(10))
            .with_item(BillItem::shared("tea", dec!(10)))
            .with_item(BillItem::personal("rice", dec!(20), "Alice"));
        let breakdown = BillSplitter::default().breakdown(&input).unwrap();
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].raw, dec!(30));
        assert_eq!(breakdown[0].tip, money(30));
    }

    #[test]
    fn test_breakdown_rejects_invalid_date() {
        let mut input = bill(dec!(10)).with_item(BillItem::personal("rice", dec!(20), "Alice"));
        input.date = "21/03/2024".to_string();
        assert!(matches!(
            BillSplitter::default().breakdown(&input),
            Err(SplitError::InvalidDateFormat { .. })
        ));

        let lenient = BillSplitter::new(SplitConfig::lenient());
        assert_eq!(lenient.breakdown(&input).unwrap().len(), 1);
    }

    #[test]
    fn test_split_json() {
        let json = r#"{
            "date": "2024-03-21",
            "location": "Taipei",
            "tipPercentage": 10,
            "items": [
                { "name": "tea", "price": 10, "isShared": true },
                { "name": "rice", "price": 20, "isShared": false, "person": "Alice" }
            ]
        }"#;
        let output = BillSplitter::default().split_json(json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["date"], "2024年3月21日");
        assert_eq!(value["subTotal"], serde_json::json!(30.0));
        assert_eq!(value["tip"], serde_json::json!(3.0));
        assert_eq!(value["totalAmount"], serde_json::json!(33.0));
        assert_eq!(
            value["items"],
            serde_json::json!([{ "name": "Alice", "amount": 33.0 }])
        );
    }

    #[test]
    fn test_split_json_rejects_bad_payload() {
        let err = BillSplitter::default().split_json("{}").unwrap_err();
        assert!(matches!(err, SplitError::Json(_)));
    }
}
