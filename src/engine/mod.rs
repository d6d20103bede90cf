//! Grouped statistics over a loaded [`Table`](crate::models::Table).
//!
//! Every call scans the table it is given; nothing is cached here.

mod aggregate;
mod dimension;
mod insights;
mod stats;

pub use aggregate::{aggregate, summarize, GroupRow, Measure, SortOrder};
pub use dimension::{Dimension, GroupBy, GroupKey, KeyValue};
pub use insights::{
    amount_histogram, detection_breakdown, fraud_methods, fraud_timeline, load_heatmap, risk_by_type,
    volume_by_type, DetectionBreakdown, HistogramBin, DEFAULT_HISTOGRAM_BINS, MAX_HISTOGRAM_BINS
};
pub use stats::Stats;
