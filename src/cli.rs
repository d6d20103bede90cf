//! Command-line interface argument parsing.

use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use fraudsense::config::{DEFAULT_DATA_DIR, DEFAULT_ROWS_PER_PARTITION};
use fraudsense::engine::{DEFAULT_HISTOGRAM_BINS, MAX_HISTOGRAM_BINS};

/// FraudSense - fraud analytics over a static transaction dataset
///
/// Reads `<data-dir>/fraud_data_chunks/part_NNN.csv` when present, otherwise
/// `<data-dir>/final.csv`, and renders reports to stdout. Logs go to stderr.
///
/// Examples:
///   fraudsense overview
///   fraudsense --data-dir ./data investigate C1231006815
///   fraudsense split --rows-per-partition 500000
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Directory holding `fraud_data_chunks/` or `final.csv`
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR, env = "FRAUDSENSE_DATA_DIR", value_name = "DIR")]
    pub data_dir: PathBuf,

    /// Log level written to stderr: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "error", env = "FRAUDSENSE_LOG_LEVEL", value_name = "LEVEL")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Report whether a data source is available and how large it is
    Status,

    /// Headline KPIs, volume and risk by type, and the load heatmap
    Overview,

    /// Fraud methods, amount distribution, detection rate, and timeline
    Fraud {
        /// Number of equal-width buckets in the amount histogram
        #[arg(
            long,
            default_value_t = DEFAULT_HISTOGRAM_BINS,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_HISTOGRAM_BINS as u64)
        )]
        bins: usize
    },

    /// Trace every transaction an account took part in
    Investigate {
        /// Account identifier matched exactly against nameOrig and nameDest
        entity_id: String
    },

    /// Render status, overview, and fraud views from a single load
    Report,

    /// Split a consolidated dataset into numbered partition files
    Split {
        /// Consolidated input file (defaults to `<data-dir>/final.csv`)
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Destination directory (defaults to `<data-dir>/fraud_data_chunks`)
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Maximum rows written to each partition
        #[arg(long, default_value_t = DEFAULT_ROWS_PER_PARTITION, value_name = "ROWS")]
        rows_per_partition: usize
    }
}
