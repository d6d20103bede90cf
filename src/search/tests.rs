use super::{search, EntityReport, EntityStatus};

use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::models::{Table, Transaction, TransactionType};
use crate::types::Rate;

fn create_transaction(step: u32, origin: &str, destination: &str, amount: &str, is_fraud: bool) -> Result<Transaction> {
    Ok(Transaction::new(step, TransactionType::Transfer, Decimal::from_str(amount)?, origin, destination, is_fraud, false))
}

fn create_ledger() -> Result<Table> {
    Ok(Table::new(vec![
        create_transaction(1, "C100", "C200", "10.00", false)?,
        create_transaction(2, "C300", "C100", "20.00", true)?,
        create_transaction(3, "C400", "C500", "30.00", false)?,
        create_transaction(4, "C100", "C600", "40.00", false)?,
        create_transaction(5, "C200", "C700", "50.00", false)?,
    ]))
}

#[test]
fn test_search_matches_origin_and_destination_in_table_order() -> Result<()> {
    let results = search(&create_ledger()?, "C100");
    let steps: Vec<u32> = results.iter().map(|row| row.step).collect();

    assert_eq!(steps, vec![1, 2, 4]);
    assert!(results.iter().any(|row| row.name_orig == "C100"));

    Ok(())
}

#[test]
fn test_search_is_exact_match_only() -> Result<()> {
    let table = create_ledger()?;

    assert!(search(&table, "C10").is_empty());
    assert!(search(&table, "c100").is_empty());
    assert!(search(&table, " C100").is_empty());
    assert!(search(&table, "C999").is_empty());

    Ok(())
}

#[test]
fn test_empty_query_returns_no_rows() -> Result<()> {
    assert!(search(&create_ledger()?, "").is_empty());

    Ok(())
}

#[test]
fn test_entity_report_scopes_statistics_to_entity() -> Result<()> {
    let report = EntityReport::investigate(&create_ledger()?, "C100");

    assert_eq!(report.ledger.len(), 3);
    assert_eq!(report.stats.count, 3);
    assert_eq!(report.stats.amount, Decimal::from(70));
    assert_eq!(report.stats.fraud_count, 1);
    assert_eq!(report.status(), EntityStatus::Linked { fraud_events: 1 });

    Ok(())
}

#[test]
fn test_entity_report_distinguishes_clean_and_unknown_entities() -> Result<()> {
    let table = create_ledger()?;

    let clean = EntityReport::investigate(&table, "C200");

    assert_eq!(clean.status(), EntityStatus::Clean);
    assert_eq!(clean.stats.fraud_rate_by_count(), Rate::Percent(0.0));

    let unknown = EntityReport::investigate(&table, "C999");

    assert_eq!(unknown.status(), EntityStatus::NotFound);
    assert_eq!(unknown.stats.fraud_rate_by_count(), Rate::Undefined);

    Ok(())
}
