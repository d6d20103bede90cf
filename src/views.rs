//! Plain-text renderings of the dashboard pages.

use std::io::Write;

use anyhow::Result;
use fraudsense::engine::{
    amount_histogram, detection_breakdown, fraud_methods, fraud_timeline, load_heatmap, risk_by_type, summarize,
    volume_by_type
};
use fraudsense::formatting::{format_currency, format_large_number, format_megabytes, format_number};
use fraudsense::models::Table;
use fraudsense::search::{EntityReport, EntityStatus};
use fraudsense::types::Rate;

const LATEST_FRAUD_SAMPLE: usize = 10;
const LABEL_WIDTH: usize = 22;

/// A page of the dashboard.
#[derive(Debug, Clone)]
pub enum View {
    Status,
    Overview,
    Fraud {
        bins: usize
    },
    Investigate {
        entity_id: String
    }
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Status => "status",
            View::Overview => "overview",
            View::Fraud { .. } => "fraud",
            View::Investigate { .. } => "investigate"
        }
    }

    pub fn render(&self, output: &mut impl Write, table: &Table) -> Result<()> {
        match self {
            View::Status => render_status(output, table),
            View::Overview => render_overview(output, table),
            View::Fraud { bins } => render_fraud(output, table, *bins),
            View::Investigate { entity_id } => render_investigation(output, table, entity_id)
        }
    }

    pub fn render_unavailable(&self, output: &mut impl Write) -> Result<()> {
        match self {
            View::Status => writeln!(output, "System Offline. Data source not found.")?,
            _ => writeln!(output, "Data could not be loaded: no data source found.")?
        }

        Ok(())
    }
}

fn heading(output: &mut impl Write, title: &str) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "{title}")?;
    writeln!(output, "{}", "=".repeat(title.chars().count()))?;
    Ok(())
}

fn metric(output: &mut impl Write, label: &str, value: impl AsRef<str>) -> Result<()> {
    writeln!(output, "{:<width$}{}", label, value.as_ref(), width = LABEL_WIDTH)?;
    Ok(())
}

fn rate(rate: Rate) -> String {
    rate.to_string()
}

fn render_status(output: &mut impl Write, table: &Table) -> Result<()> {
    writeln!(
        output,
        "System Online. Records: {} | Size: {}",
        format_number(table.len() as u64),
        format_megabytes(table.estimated_size_bytes())
    )?;

    Ok(())
}

fn render_overview(output: &mut impl Write, table: &Table) -> Result<()> {
    let stats = summarize(table);

    heading(output, "Executive Overview")?;
    metric(output, "Total Transactions", format_number(stats.count))?;
    metric(output, "Total Volume", format_large_number(stats.amount))?;
    metric(output, "Fraud Count", format_number(stats.fraud_count))?;
    metric(output, "Fraud Volume", format_large_number(stats.fraud_amount))?;
    metric(output, "Fraud Rate (Tx)", rate(stats.fraud_rate_by_count()))?;
    metric(output, "Fraud Rate (Vol)", rate(stats.fraud_rate_by_amount()))?;

    heading(output, "Transaction Volume by Type")?;
    writeln!(output, "{:<10} {:>12} {:>20} {:>10}", "type", "count", "volume", "share")?;

    for group in volume_by_type(table) {
        let share = Rate::from_amounts(group.stats.amount, stats.amount);
        writeln!(
            output,
            "{:<10} {:>12} {:>20} {:>10}",
            group.key.to_string(), format_number(group.stats.count), format_currency(group.stats.amount), rate(share)
        )?;
    }

    heading(output, "Fraud Rate by Transaction Type")?;
    writeln!(output, "{:<10} {:>12} {:>12} {:>10}", "type", "total", "fraud", "rate")?;

    for group in risk_by_type(table) {
        writeln!(
            output,
            "{:<10} {:>12} {:>12} {:>10}",
            group.key.to_string(),
            format_number(group.stats.count),
            format_number(group.stats.fraud_count),
            rate(group.stats.fraud_rate_by_count())
        )?;
    }

    heading(output, "Operational Heatmap (day, hour)")?;
    writeln!(output, "{:>5} {:>5} {:>12}", "day", "hour", "tx_count")?;

    for cell in load_heatmap(table) {
        let hour = cell.key.second.map(|value| value.to_string()).unwrap_or_default();
        writeln!(output, "{:>5} {:>5} {:>12}", cell.key.first.to_string(), hour, format_number(cell.stats.count))?;
    }

    Ok(())
}

fn render_fraud(output: &mut impl Write, table: &Table, bins: usize) -> Result<()> {
    let fraud = table.fraudulent();
    let stats = summarize(&fraud);
    let not_available = || "n/a".to_string();

    heading(output, "Fraud Deep Dive")?;
    metric(output, "Total Fraud Cases", format_number(stats.count))?;
    metric(output, "Avg Fraud Amount", stats.mean_amount().map(format_currency).unwrap_or_else(not_available))?;
    metric(output, "Max Single Fraud", stats.max_amount.map(format_large_number).unwrap_or_else(not_available))?;

    heading(output, "Fraudulent Transaction Methods")?;

    for group in fraud_methods(table) {
        writeln!(output, "{:<10} {:>12}", group.key.to_string(), format_number(group.stats.count))?;
    }

    heading(output, "Fraud Amount Distribution")?;

    for bin in amount_histogram(&fraud, bins) {
        writeln!(
            output,
            "{:>20} - {:<20} {:>10}",
            format_currency(bin.lower), format_currency(bin.upper), format_number(bin.count)
        )?;
    }

    let detection = detection_breakdown(table);

    heading(output, "System Detection Rate")?;
    metric(output, "Flagged", format_number(detection.flagged))?;
    metric(output, "Missed", format_number(detection.missed))?;
    metric(output, "Detection Rate", rate(detection.detection_rate))?;

    heading(output, "Timeline of Fraud Attacks (step)")?;
    writeln!(output, "{:>8} {:>10}", "step", "attacks")?;

    for group in fraud_timeline(table) {
        writeln!(output, "{:>8} {:>10}", group.key.to_string(), format_number(group.stats.count))?;
    }

    Ok(())
}

fn render_investigation(output: &mut impl Write, table: &Table, entity_id: &str) -> Result<()> {
    let report = EntityReport::investigate(table, entity_id);

    heading(output, &format!("Forensic Account Trace: {entity_id}"))?;

    match report.status() {
        EntityStatus::NotFound => {
            writeln!(output, "Entity not found in the transaction registry.")?;
        }
        status => {
            metric(output, "Total Activities", format_number(report.stats.count))?;
            metric(output, "Total Volume", format_currency(report.stats.amount))?;
            metric(output, "Fraudulent Events", format_number(report.stats.fraud_count))?;

            if let EntityStatus::Linked { fraud_events } = status {
                writeln!(output, "ALERT: This entity is linked to {fraud_events} confirmed fraud cases.")?;
            } else {
                writeln!(output, "Clean Record: No fraud flags detected in available history.")?;
            }

            heading(output, "Transaction Ledger")?;
            write_ledger(output, &report.ledger)?;
        }
    }

    heading(output, "Latest Flagged Entities")?;
    write_ledger(output, &table.fraudulent().head(LATEST_FRAUD_SAMPLE))?;

    Ok(())
}

fn write_ledger(output: &mut impl Write, ledger: &Table) -> Result<()> {
    writeln!(
        output,
        "{:>6} {:<10} {:>18} {:<14} {:<14} {:>7} {:>14}",
        "step", "type", "amount", "nameOrig", "nameDest", "isFraud", "isFlaggedFraud"
    )?;

    for row in ledger {
        writeln!(
            output,
            "{:>6} {:<10} {:>18} {:<14} {:<14} {:>7} {:>14}",
            row.step,
            row.transaction_type.as_str(),
            format_currency(row.amount),
            row.name_orig,
            row.name_dest,
            u8::from(row.is_fraud),
            u8::from(row.is_flagged_fraud)
        )?;
    }

    Ok(())
}
