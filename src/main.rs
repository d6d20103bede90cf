mod cli;
mod views;

use std::io::{stderr, stdout, Write};
use std::path::Path;
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tokio::task::spawn_blocking;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use fraudsense::config::DataSourceConfig;
use fraudsense::engine::DEFAULT_HISTOGRAM_BINS;
use fraudsense::storage::{Dataset, PartitionSet, SingleFile, Splitter};

use crate::cli::{Args, Command};
use crate::views::View;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(parse_log_level(&args.log_level));

    let config = DataSourceConfig::from_data_dir(&args.data_dir);

    let views = match args.command {
        Command::Split { input, output_dir, rows_per_partition } => {
            let input = input.unwrap_or_else(|| config.fallback_file.clone());
            let output_dir = output_dir.unwrap_or_else(|| config.chunk_dir.clone());
            let splitter = Splitter::new(config.naming.clone(), rows_per_partition)?;

            spawn_blocking(move || run_split(&splitter, &input, &output_dir)).await??;

            return Ok(());
        }
        Command::Status => vec![View::Status],
        Command::Overview => vec![View::Overview],
        Command::Fraud { bins } => vec![View::Fraud { bins }],
        Command::Investigate { entity_id } => vec![View::Investigate { entity_id }],
        Command::Report => vec![View::Status, View::Overview, View::Fraud { bins: DEFAULT_HISTOGRAM_BINS }]
    };

    let dataset = Arc::new(Dataset::new(config));
    let failures = render_views(dataset, views).await?;

    if failures > 0 {
        exit(1);
    }

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Reports are written to stdout, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn run_split(splitter: &Splitter, input: &Path, output_dir: &Path) -> Result<()> {
    let table = SingleFile::new(input).load_all()?;
    let written = splitter.split(&table, output_dir)?;

    let mut output = stdout().lock();

    for partition in &written {
        writeln!(output, "Saved {} ({} rows)", partition.path.display(), partition.rows)?;
    }

    writeln!(output, "Split {} rows into {} partition(s)", table.len(), written.len())?;
    output.flush()?;

    Ok(())
}

/// Renders each view on the blocking pool; a failing view is logged and counted without
/// stopping the rest. Returns the number of failed views.
async fn render_views(dataset: Arc<Dataset>, views: Vec<View>) -> Result<usize> {
    let mut failures = 0;

    for view in views {
        let name = view.name();
        let dataset = dataset.clone();
        let timer = Instant::now();

        match spawn_blocking(move || render_view(&dataset, &view)).await {
            Ok(Ok(rendered)) => {
                let mut output = stdout().lock();
                output.write_all(&rendered)?;
                output.flush()?;
                info!("Rendered view [{name}] in {:?}", timer.elapsed());
            }
            Ok(Err(error)) => {
                error!("View [{name}] failed: {error:#}");
                failures += 1;
            }
            Err(error) => {
                error!("View [{name}] aborted: {error}");
                failures += 1;
            }
        }
    }

    Ok(failures)
}

fn render_view(dataset: &Dataset, view: &View) -> Result<Vec<u8>> {
    let mut output = Vec::new();

    match dataset.load()? {
        Some(table) => view.render(&mut output, &table)?,
        None => view.render_unavailable(&mut output)?
    }

    Ok(output)
}
