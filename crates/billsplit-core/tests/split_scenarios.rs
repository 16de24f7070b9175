//! End-to-end scenarios through the public API, with logging enabled.
//!
//! Run with `RUST_LOG=billsplit_core=trace` to see reconciliation steps.

use billsplit_core::{
    BillInput, BillItem, BillSplitter, Money, PersonShare, SplitConfig, SplitError, TipRate,
};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn money(sub_units: i64) -> Money {
    Money::from_sub_units(sub_units)
}

#[test]
fn test_dinner_for_four() {
    init_tracing();

    let input = BillInput::new("2024-11-02", "Tainan", TipRate::from_percentage(dec!(10)))
        .with_item(BillItem::shared("hot pot base", dec!(380)))
        .with_item(BillItem::personal("beef", dec!(260), "Mei"))
        .with_item(BillItem::personal("lamb", dec!(240), "Jun"))
        .with_item(BillItem::personal("tofu", dec!(90), "Hao"))
        .with_item(BillItem::personal("beer", dec!(120), "Mei"))
        .with_item(BillItem::personal("tea", dec!(45), "Lin"))
        .with_item(BillItem::shared("rice", dec!(40)));

    let output = BillSplitter::default().split(&input).unwrap();

    assert_eq!(output.date, "2024年11月2日");
    assert_eq!(output.sub_total, dec!(1175));
    assert_eq!(output.tip, money(1175));
    assert_eq!(output.total_amount, money(12925));

    // shared 420 / 4 = 105 per person
    assert_eq!(
        output.items,
        vec![
            PersonShare::new("Mei", money(5335)), // (260 + 120 + 105) × 1.1
            PersonShare::new("Jun", money(3795)), // 345 × 1.1
            PersonShare::new("Hao", money(2145)), // 195 × 1.1
            PersonShare::new("Lin", money(1650)), // 150 × 1.1
        ]
    );
    assert_eq!(output.shares_total(), output.total_amount);
}

#[test]
fn test_config_from_toml_drives_date_mode() {
    init_tracing();

    let config = SplitConfig::from_toml_str("[date]\nmode = \"lenient\"\n").unwrap();
    let splitter = BillSplitter::new(config);

    let input = BillInput::new("2024/11/02", "Tainan", TipRate::zero())
        .with_item(BillItem::personal("tea", dec!(45), "Lin"));

    assert_eq!(splitter.split(&input).unwrap().date, "2024/11/02年?月?日");
    assert!(matches!(
        BillSplitter::default().split(&input),
        Err(SplitError::InvalidDateFormat { .. })
    ));
}

#[test]
fn test_calendar_check_from_toml() {
    let config = SplitConfig::from_toml_str("[date]\ncheck_calendar = true\n").unwrap();
    let input = BillInput::new("2023-02-29", "Tainan", TipRate::zero());

    assert!(BillSplitter::new(config).split(&input).is_err());
    assert!(BillSplitter::default().split(&input).is_ok());
}

#[test]
fn test_location_limit_from_toml() {
    let config = SplitConfig::from_toml_str("[validation]\nmax_location_len = 3\n").unwrap();
    let input = BillInput::new("2024-11-02", "Tainan", TipRate::zero());

    assert!(matches!(
        BillSplitter::new(config).split(&input),
        Err(SplitError::Validation(_))
    ));
}

#[test]
fn test_json_round_trip_through_wire_shape() {
    init_tracing();

    let json = r#"{
        "date": "2024-03-21",
        "location": "Taipei",
        "tipPercentage": 15,
        "items": [
            { "name": "a", "price": 10.5, "isShared": false, "person": "Alice" },
            { "name": "b", "price": 10.5, "isShared": false, "person": "Bob" },
            { "name": "napkins", "price": 0.1, "isShared": true }
        ]
    }"#;

    let output = BillSplitter::default().split_json(json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["totalAmount"], serde_json::json!(24.3));
    assert_eq!(
        value["items"],
        serde_json::json!([
            { "name": "Alice", "amount": 12.1 },
            { "name": "Bob", "amount": 12.2 }
        ])
    );
}
