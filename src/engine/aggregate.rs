use std::cmp::Ordering;
use std::collections::HashMap;

use crate::engine::{GroupBy, GroupKey, Stats};
use crate::models::Table;

/// Measure used to rank groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Count,
    Amount,
    FraudCount,
    FraudAmount,
    FraudRate
}

impl Measure {
    fn compare(&self, left: &Stats, right: &Stats) -> Ordering {
        match self {
            Measure::Count => left.count.cmp(&right.count),
            Measure::Amount => left.amount.cmp(&right.amount),
            Measure::FraudCount => left.fraud_count.cmp(&right.fraud_count),
            Measure::FraudAmount => left.fraud_amount.cmp(&right.fraud_amount),
            Measure::FraudRate => left.fraud_rate_by_count().sort_key()
                .total_cmp(&right.fraud_rate_by_count().sort_key())
        }
    }
}

/// Ordering of aggregated groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Grouping key ascending, e.g. a time series by step.
    KeyAscending,
    /// Largest measure first; equal measures fall back to key ascending.
    Descending(Measure)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRow {
    pub key: GroupKey,
    pub stats: Stats
}

/// Groups the table in a single pass and orders the groups as requested.
pub fn aggregate(table: &Table, group_by: GroupBy, order: SortOrder) -> Vec<GroupRow> {
    let mut groups: HashMap<GroupKey, Stats> = HashMap::new();

    for row in table {
        groups.entry(group_by.key_of(row)).or_default().add(row);
    }

    let mut rows: Vec<GroupRow> = groups.into_iter()
        .map(|(key, stats)| GroupRow { key, stats })
        .collect();

    match order {
        SortOrder::KeyAscending => rows.sort_by(|left, right| left.key.cmp(&right.key)),
        SortOrder::Descending(measure) => rows.sort_by(|left, right| {
            measure.compare(&right.stats, &left.stats).then_with(|| left.key.cmp(&right.key))
        })
    }

    rows
}

/// Totals over the whole table or any filtered subset of it.
pub fn summarize(table: &Table) -> Stats {
    Stats::of(table)
}
