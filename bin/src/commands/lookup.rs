//! Lookup command implementation.

use crate::display::{Format, print_json, print_rates};
use anyhow::{Context, Result};
use bestchange_lib::prelude::*;

/// Look up one record by id, failing when it does not exist.
pub(crate) fn lookup(client: &BestChange, id: u32, kind: LookupKind, format: Format) -> Result<()> {
    let record = client
        .lookup(id, kind)
        .with_context(|| format!("No {kind} entry with id {id}"))?;

    if let Format::Json = format {
        return print_json(&record);
    }

    match record {
        Record::Currency(currency) => {
            println!("Currency: {}", currency.name);
            println!("ID:       {}", currency.id);
        }
        Record::Exchanger(exchanger) => {
            println!("Exchanger: {}", exchanger.name);
            println!("ID:        {}", exchanger.id);
        }
        Record::Rates(by_to) => {
            let rates: Vec<&Rate> = by_to
                .values()
                .flat_map(|by_exchanger| by_exchanger.values())
                .collect();
            print_rates(client, &rates);
        }
    }

    Ok(())
}
