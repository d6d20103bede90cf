use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use anyhow::{anyhow, Result};
use tempfile::TempDir;

fn run(data_dir: &Path, args: &[&str]) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_fraudsense");

    let output = Command::new(binary_path)
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env_remove("FRAUDSENSE_LOG_LEVEL")
        .output()?;

    Ok(output)
}

fn run_successfully(data_dir: &Path, args: &[&str]) -> Result<String> {
    let output = run(data_dir, args)?;

    if !output.status.success() {
        return Err(anyhow!("command {args:?} failed: {}", String::from_utf8_lossy(&output.stderr)));
    }

    Ok(String::from_utf8(output.stdout)?)
}

fn metric_value(stdout: &str, label: &str) -> Result<String> {
    stdout.lines()
        .find_map(|line| line.strip_prefix(label))
        .map(|value| value.trim().to_string())
        .ok_or_else(|| anyhow!("metric '{label}' missing from output"))
}

fn samples() -> &'static Path {
    Path::new("samples")
}

#[test]
fn test_cli_status_reports_sample_records() -> Result<()> {
    let stdout = run_successfully(samples(), &["status"])?;

    assert!(stdout.contains("System Online. Records: 12"));

    Ok(())
}

#[test]
fn test_cli_overview_reports_headline_kpis() -> Result<()> {
    let stdout = run_successfully(samples(), &["overview"])?;

    assert_eq!(metric_value(&stdout, "Total Transactions")?, "12");
    assert_eq!(metric_value(&stdout, "Total Volume")?, "$986.33K");
    assert_eq!(metric_value(&stdout, "Fraud Count")?, "4");
    assert_eq!(metric_value(&stdout, "Fraud Volume")?, "$500.36K");
    assert_eq!(metric_value(&stdout, "Fraud Rate (Tx)")?, "33.333%");
    assert!(stdout.contains("Operational Heatmap"));

    Ok(())
}

#[test]
fn test_cli_fraud_view_reports_detection_breakdown() -> Result<()> {
    let stdout = run_successfully(samples(), &["fraud", "--bins", "5"])?;

    assert_eq!(metric_value(&stdout, "Total Fraud Cases")?, "4");
    assert_eq!(metric_value(&stdout, "Avg Fraud Amount")?, "$125,090.50");
    assert_eq!(metric_value(&stdout, "Max Single Fraud")?, "$250.00K");
    assert_eq!(metric_value(&stdout, "Flagged")?, "1");
    assert_eq!(metric_value(&stdout, "Missed")?, "3");
    assert_eq!(metric_value(&stdout, "Detection Rate")?, "25.000%");

    Ok(())
}

#[test]
fn test_cli_rejects_out_of_range_bucket_counts() -> Result<()> {
    for bins in ["0", "1001", "10000000000"] {
        let output = run(samples(), &["fraud", "--bins", bins])?;

        assert!(!output.status.success(), "--bins {bins} should be rejected");
        assert!(output.stdout.is_empty());
    }

    let stdout = run_successfully(samples(), &["fraud", "--bins", "1000"])?;

    assert!(stdout.contains("Fraud Amount Distribution"));

    Ok(())
}

#[test]
fn test_cli_investigate_traces_both_parties() -> Result<()> {
    let stdout = run_successfully(samples(), &["investigate", "C553264065"])?;

    assert_eq!(metric_value(&stdout, "Total Activities")?, "2");
    assert_eq!(metric_value(&stdout, "Total Volume")?, "$5,181.00");
    assert_eq!(metric_value(&stdout, "Fraudulent Events")?, "1");
    assert!(stdout.contains("ALERT: This entity is linked to 1 confirmed fraud cases."));

    let clean = run_successfully(samples(), &["investigate", "C1231006815"])?;

    assert!(clean.contains("Clean Record"));

    let unknown = run_successfully(samples(), &["investigate", "C0000000000"])?;

    assert!(unknown.contains("Entity not found in the transaction registry."));

    Ok(())
}

#[test]
fn test_cli_split_output_renders_identically_to_consolidated_file() -> Result<()> {
    let directory = TempDir::new()?;
    fs::copy(samples().join("final.csv"), directory.path().join("final.csv"))?;

    let split = run_successfully(directory.path(), &["split", "--rows-per-partition", "5"])?;

    assert!(split.contains("Split 12 rows into 3 partition(s)"));

    let chunk_dir = directory.path().join("fraud_data_chunks");

    for name in ["part_000.csv", "part_001.csv", "part_002.csv"] {
        assert!(chunk_dir.join(name).is_file(), "{name} missing");
    }

    //NOTE: Remove the consolidated file so the overview can only come from the partitions
    fs::remove_file(directory.path().join("final.csv"))?;

    let from_chunks = run_successfully(directory.path(), &["overview"])?;
    let from_file = run_successfully(samples(), &["overview"])?;

    assert_eq!(from_chunks, from_file);

    Ok(())
}

#[test]
fn test_cli_missing_source_is_reported_not_fatal() -> Result<()> {
    let directory = TempDir::new()?;
    let stdout = run_successfully(&directory.path().join("missing"), &["status"])?;

    assert!(stdout.contains("System Offline. Data source not found."));

    let overview = run_successfully(&directory.path().join("missing"), &["overview"])?;

    assert!(overview.contains("Data could not be loaded"));

    Ok(())
}

#[test]
fn test_cli_corrupt_source_fails_each_view_without_crashing() -> Result<()> {
    let directory = TempDir::new()?;
    fs::write(
        directory.path().join("final.csv"),
        "step,type,amount,nameOrig,nameDest,isFraud,isFlaggedFraud\n1,PAYMENT,-10.0,C1,M1,0,0\n"
    )?;

    let output = run(directory.path(), &["report"])?;
    let stderr = String::from_utf8(output.stderr)?;

    assert!(!output.status.success());
    assert!(stderr.contains("View [status] failed"));
    assert!(stderr.contains("View [overview] failed"));
    assert!(stderr.contains("View [fraud] failed"));

    Ok(())
}

#[test]
fn test_cli_report_renders_every_view() -> Result<()> {
    let stdout = run_successfully(samples(), &["report"])?;

    assert!(stdout.contains("System Online"));
    assert!(stdout.contains("Executive Overview"));
    assert!(stdout.contains("Fraud Deep Dive"));

    Ok(())
}
