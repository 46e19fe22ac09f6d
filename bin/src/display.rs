//! Display utilities and output formatting for the bestchange CLI.

use anyhow::Result;
use bestchange_lib::prelude::*;
use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Table,
    Json,
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Case-insensitive substring match; no pattern matches everything.
pub(crate) fn matches_search(name: &str, pattern: Option<&str>) -> bool {
    pattern.is_none_or(|p| name.to_lowercase().contains(&p.to_lowercase()))
}

/// Print an id/name table followed by a total line.
pub(crate) fn print_named<'a>(
    rows: impl ExactSizeIterator<Item = (u32, &'a str)>,
    noun: &str,
) {
    if rows.len() == 0 {
        println!("No {noun} found.");
        return;
    }

    let total = rows.len();
    println!("{:<8} {:<40}", "ID", "NAME");
    println!("{}", "-".repeat(50));
    for (id, name) in rows {
        println!("{id:<8} {name:<40}");
    }
    println!("\nTotal: {total} {noun}");
}

/// Print rates as a table, resolving exchanger names where known.
pub(crate) fn print_rates(client: &BestChange, rates: &[&Rate]) {
    if rates.is_empty() {
        println!("No rates found.");
        return;
    }

    println!(
        "{:<6} {:<6} {:<24} {:>14} {:>14} {:>14} {:>14}",
        "FROM", "TO", "EXCHANGER", "GIVE", "RECEIVE", "RATE", "RESERVE"
    );
    println!("{}", "-".repeat(98));
    for rate in rates {
        let exchanger = client
            .exchanger(rate.exchanger_id)
            .map_or_else(|| rate.exchanger_id.to_string(), |e| e.name.clone());
        println!(
            "{:<6} {:<6} {:<24} {:>14} {:>14} {:>14.6} {:>14}",
            rate.from_currency_id,
            rate.to_currency_id,
            exchanger,
            rate.rate_give,
            rate.rate_receive,
            rate.rate,
            rate.reserve
        );
    }
    println!("\nTotal: {} rates", rates.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_search() {
        assert!(matches_search("Bitcoin (BTC)", None));
        assert!(matches_search("Bitcoin (BTC)", Some("btc")));
        assert!(matches_search("Сбербанк RUB", Some("сбер")));
        assert!(!matches_search("Tether TRC20", Some("erc20")));
    }
}
