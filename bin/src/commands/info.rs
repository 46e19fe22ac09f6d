//! Info command implementation.
//!
//! This module prints the bundle metadata together with the per-table row
//! counters gathered while parsing.

use crate::display::{Format, print_json};
use anyhow::Result;
use bestchange_lib::prelude::*;
use serde::Serialize;

#[derive(Serialize)]
struct InfoView<'a> {
    version: Option<&'a str>,
    last_update: Option<String>,
    currencies: usize,
    exchangers: usize,
    rates: usize,
    cache: String,
    report: &'a ParseReport,
}

/// Show bundle version, update time and record counts.
pub(crate) fn show_info(client: &BestChange, format: Format) -> Result<()> {
    let last_update = client
        .last_update()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string());
    let report = client.report();

    if let Format::Json = format {
        return print_json(&InfoView {
            version: client.version(),
            last_update,
            currencies: client.currencies().len(),
            exchangers: client.exchangers().len(),
            rates: client.dataset().rate_count(),
            cache: client.cache_path().display().to_string(),
            report,
        });
    }

    println!("Version:     {}", client.version().unwrap_or("-"));
    println!("Last update: {}", last_update.as_deref().unwrap_or("-"));
    println!("Cache:       {}", client.cache_path().display());

    println!();
    println!("{:<12} {:>10} {:>10}", "TABLE", "RECORDS", "SKIPPED");
    println!("{}", "-".repeat(34));
    println!(
        "{:<12} {:>10} {:>10}",
        "currencies",
        client.currencies().len(),
        report.currencies.skipped
    );
    println!(
        "{:<12} {:>10} {:>10}",
        "exchangers",
        client.exchangers().len(),
        report.exchangers.skipped
    );
    println!(
        "{:<12} {:>10} {:>10}",
        "rates",
        client.dataset().rate_count(),
        report.rates.skipped
    );
    println!(
        "{:<12} {:>10} {:>10}",
        "info", report.metadata.parsed, report.metadata.skipped
    );

    Ok(())
}
