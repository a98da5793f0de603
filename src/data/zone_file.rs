use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::domain::ZoneDetail;
use crate::ui::translation::JsonLocale;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Accepted zone-detail file layouts.
#[derive(Deserialize)]
#[serde(untagged)]
enum ZoneFile {
    /// `{"data": {"zoneStates": {...}}}` as served by the zone-detail endpoint
    Envelope { data: ZoneStates },
    /// `{"zoneStates": {"<datetime>": {...}}}`
    States(ZoneStates),
    /// A bare array of snapshots
    Many(Vec<ZoneDetail>),
    /// A single snapshot
    Single(Box<ZoneDetail>),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ZoneStates {
    zone_states: BTreeMap<String, ZoneDetail>,
}

/// Parses zone detail JSON. Snapshots come back sorted by `stateDatetime`.
pub fn parse_zone_details(text: &str) -> Result<Vec<ZoneDetail>> {
    let parsed: ZoneFile =
        serde_json::from_str(text).context("Zone detail JSON did not match any known layout")?;

    let mut details = match parsed {
        ZoneFile::Envelope { data } => data.zone_states.into_values().collect(),
        ZoneFile::States(states) => states.zone_states.into_values().collect(),
        ZoneFile::Many(details) => details,
        ZoneFile::Single(detail) => vec![*detail],
    };

    if details.is_empty() {
        bail!("Zone detail JSON contains no snapshots");
    }

    details.sort_by_key(|d| d.state_datetime);
    Ok(details)
}

pub fn load_zone_details(path: &Path) -> Result<Vec<ZoneDetail>> {
    let text = std::fs::read_to_string(path)
        .context(format!("Failed to read zone detail file: {}", path.display()))?;
    let details = parse_zone_details(&text)
        .context(format!("Failed to parse zone detail file: {}", path.display()))?;

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_data_loading {
        log::info!(
            "Loaded {} zone snapshot(s) from {}",
            details.len(),
            path.display()
        );
    }

    Ok(details)
}

pub fn load_locale(path: &Path) -> Result<JsonLocale> {
    let file =
        File::open(path).context(format!("Failed to open locale file: {}", path.display()))?;
    let root: serde_json::Value = serde_json::from_reader(BufReader::new(file))
        .context(format!("Failed to parse locale file: {}", path.display()))?;

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_data_loading {
        log::info!("Loaded locale from {}", path.display());
    }

    Ok(JsonLocale::from_value(root))
}
