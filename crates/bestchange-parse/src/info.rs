//! Descriptor member parser.

use bestchange_types::{Metadata, ParseStats};
use tracing::warn;

use crate::text::{decode_cp1251, rows};
use crate::{Parsed, parse_last_update};

const KEY_LAST_UPDATE: &str = "last_update";
const KEY_CURRENT_VERSION: &str = "current_version";

/// Parses the `key = value` descriptor member.
///
/// Lines without `=` and unknown keys are ignored. An unreadable
/// `last_update` leaves the timestamp unset and counts as a skipped row; the
/// version is kept either way.
#[must_use]
pub fn parse_metadata(data: &[u8]) -> Parsed<Metadata> {
    let text = decode_cp1251(data);
    let mut metadata = Metadata::default();
    let mut stats = ParseStats::default();

    for (line_no, line) in rows(&text) {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim();

        match key.trim() {
            KEY_LAST_UPDATE => match parse_last_update(value) {
                Ok(timestamp) => {
                    metadata.last_update = Some(timestamp);
                    stats.record_parsed();
                }
                Err(e) => {
                    warn!(line = line_no, error = %e, "last_update left unset");
                    stats.record_skipped();
                }
            },
            KEY_CURRENT_VERSION => {
                metadata.version = Some(value.to_string());
                stats.record_parsed();
            }
            _ => {}
        }
    }

    Parsed::new(metadata, stats)
}
