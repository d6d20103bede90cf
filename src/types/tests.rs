use super::Rate;
use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_rate_from_counts_computes_percentage() -> Result<()> {
    let rate = Rate::from_counts(1, 2);
    let percent = rate.percent().ok_or_else(|| anyhow!("rate should be defined"))?;

    assert!((percent - 50.0).abs() < 1e-9);
    assert_eq!(rate.to_string(), "50.000%");

    Ok(())
}

#[test]
fn test_rate_with_zero_denominator_is_undefined() {
    assert_eq!(Rate::from_counts(0, 0), Rate::Undefined);
    assert_eq!(Rate::from_counts(5, 0), Rate::Undefined);
    assert_eq!(Rate::from_amounts(Decimal::ZERO, Decimal::ZERO), Rate::Undefined);
    assert!(!Rate::Undefined.is_defined());
    assert_eq!(Rate::Undefined.to_string(), "undefined");
}

#[test]
fn test_rate_from_amounts_uses_decimal_division() -> Result<()> {
    let rate = Rate::from_amounts(Decimal::from_str("25.5")?, Decimal::from_str("102")?);
    let percent = rate.percent().ok_or_else(|| anyhow!("rate should be defined"))?;

    assert!((percent - 25.0).abs() < 1e-9);

    Ok(())
}

#[test]
fn test_rate_display_honours_requested_precision() {
    let rate = Rate::from_counts(1, 3);

    assert_eq!(rate.to_string(), "33.333%");
    assert_eq!(format!("{:.1}", rate), "33.3%");
}

#[test]
fn test_zero_part_is_a_defined_zero_rate() {
    assert_eq!(Rate::from_counts(0, 10), Rate::Percent(0.0));
    assert_eq!(Rate::from_counts(0, 10).to_string(), "0.000%");
}
