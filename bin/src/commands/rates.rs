//! Rates command implementation.

use crate::display::{Format, print_json, print_rates};
use anyhow::Result;
use bestchange_lib::prelude::*;

/// Show rates quoted from `from`, narrowed by target currency and exchanger.
pub(crate) fn show_rates(
    client: &BestChange,
    from: u32,
    to: Option<u32>,
    exchanger: Option<u32>,
    format: Format,
) -> Result<()> {
    let rates: Vec<&Rate> = client
        .rates_from(from)
        .into_iter()
        .flat_map(|by_to| by_to.iter())
        .filter(|(target, _)| to.is_none_or(|t| t == **target))
        .flat_map(|(_, by_exchanger)| by_exchanger.values())
        .filter(|rate| exchanger.is_none_or(|e| e == rate.exchanger_id))
        .collect();

    match format {
        Format::Json => print_json(&rates),
        Format::Table => {
            if let Some(currency) = client.currency(from) {
                println!("From: {currency}\n");
            }
            print_rates(client, &rates);
            Ok(())
        }
    }
}
