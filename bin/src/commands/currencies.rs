//! Currencies command implementation.

use crate::display::{Format, matches_search, print_json, print_named};
use anyhow::Result;
use bestchange_lib::prelude::*;

/// List currencies, optionally filtered by name.
pub(crate) fn list_currencies(
    client: &BestChange,
    search: Option<&str>,
    format: Format,
) -> Result<()> {
    let currencies: Vec<&Currency> = client
        .currencies()
        .values()
        .filter(|c| matches_search(&c.name, search))
        .collect();

    match format {
        Format::Json => print_json(&currencies),
        Format::Table => {
            print_named(
                currencies.iter().map(|c| (c.id, c.name.as_str())),
                "currencies",
            );
            Ok(())
        }
    }
}
