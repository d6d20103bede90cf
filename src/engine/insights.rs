use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::engine::{aggregate, Dimension, GroupBy, GroupRow, Measure, SortOrder, Stats};
use crate::models::Table;
use crate::types::Rate;

pub const DEFAULT_HISTOGRAM_BINS: usize = 50;
/// Upper bound on histogram buckets; larger requests are clamped.
pub const MAX_HISTOGRAM_BINS: usize = 1000;

/// Count and volume per transaction type, largest volume first.
pub fn volume_by_type(table: &Table) -> Vec<GroupRow> {
    aggregate(table, GroupBy::One(Dimension::Type), SortOrder::Descending(Measure::Amount))
}

/// Fraud rate per transaction type, riskiest first.
pub fn risk_by_type(table: &Table) -> Vec<GroupRow> {
    aggregate(table, GroupBy::One(Dimension::Type), SortOrder::Descending(Measure::FraudRate))
}

/// Transaction load per (day, hour) cell, in calendar order.
pub fn load_heatmap(table: &Table) -> Vec<GroupRow> {
    aggregate(table, GroupBy::Pair(Dimension::Day, Dimension::Hour), SortOrder::KeyAscending)
}

/// Fraud cases per transaction type, most common first.
pub fn fraud_methods(table: &Table) -> Vec<GroupRow> {
    aggregate(&table.fraudulent(), GroupBy::One(Dimension::Type), SortOrder::Descending(Measure::Count))
}

/// Fraud cases per step, in time order.
pub fn fraud_timeline(table: &Table) -> Vec<GroupRow> {
    aggregate(&table.fraudulent(), GroupBy::One(Dimension::Step), SortOrder::KeyAscending)
}

/// How many fraudulent transactions the detection system flagged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionBreakdown {
    pub flagged: u64,
    pub missed: u64,
    pub detection_rate: Rate
}

pub fn detection_breakdown(table: &Table) -> DetectionBreakdown {
    let stats = Stats::of(table.iter().filter(|row| row.is_fraud));

    DetectionBreakdown {
        flagged: stats.flagged_count,
        missed: stats.count - stats.flagged_count,
        detection_rate: stats.flagged_rate_by_count()
    }
}

/// One equal-width amount bucket; `upper` is inclusive only for the last bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramBin {
    pub lower: Decimal,
    pub upper: Decimal,
    pub count: u64
}

/// Equal-width histogram of amounts between the table's minimum and maximum.
///
/// An empty table or zero bins yields no buckets. Identical amounts, or a range too narrow to
/// split at decimal precision, collapse into one bucket. `bins` is clamped to
/// [`MAX_HISTOGRAM_BINS`].
pub fn amount_histogram(table: &Table, bins: usize) -> Vec<HistogramBin> {
    let mut amounts = table.iter().map(|row| row.amount);

    let Some(first) = amounts.next() else {
        return Vec::new();
    };

    if bins == 0 {
        return Vec::new();
    }

    let bins = bins.min(MAX_HISTOGRAM_BINS);
    let (min, max) = amounts.fold((first, first), |(min, max), amount| (min.min(amount), max.max(amount)));
    let width = (max - min) / Decimal::from(bins);

    if width.is_zero() {
        return vec![HistogramBin { lower: min, upper: max, count: table.len() as u64 }];
    }

    let last = bins - 1;

    let mut histogram: Vec<HistogramBin> = (0..bins)
        .map(|index| {
            let lower = min + width * Decimal::from(index);
            let upper = if index == last { max } else { lower + width };
            HistogramBin { lower, upper, count: 0 }
        })
        .collect();

    for row in table {
        let offset = ((row.amount - min) / width).floor();
        let index = offset.to_usize().unwrap_or(last).min(last);
        histogram[index].count += 1;
    }

    histogram
}
