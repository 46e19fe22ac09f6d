//! Exchangers command implementation.

use crate::display::{Format, matches_search, print_json, print_named};
use anyhow::Result;
use bestchange_lib::prelude::*;

/// List exchangers in ascending id order, optionally filtered by name.
pub(crate) fn list_exchangers(
    client: &BestChange,
    search: Option<&str>,
    format: Format,
) -> Result<()> {
    let exchangers: Vec<&Exchanger> = client
        .exchangers()
        .values()
        .filter(|e| matches_search(&e.name, search))
        .collect();

    match format {
        Format::Json => print_json(&exchangers),
        Format::Table => {
            print_named(
                exchangers.iter().map(|e| (e.id, e.name.as_str())),
                "exchangers",
            );
            Ok(())
        }
    }
}
