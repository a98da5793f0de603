use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of one zone at one timestamp, in the shape served by the zone-detail API.
///
/// Flows in `exchange` are signed: positive means power flowing *into* this zone
/// from the neighbour, negative means flowing out. `exchange_co2_intensities`
/// holds the emission rate per unit of flow for each neighbour, in the same
/// units as the CO₂ totals.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDetail {
    pub state_datetime: DateTime<Utc>,
    #[serde(default)]
    pub zone_key: Option<String>,

    #[serde(default)]
    pub total_import: Option<f64>,
    #[serde(default)]
    pub total_export: Option<f64>,
    #[serde(default)]
    pub total_co2_import: Option<f64>,
    #[serde(default)]
    pub total_co2_export: Option<f64>,

    #[serde(default)]
    pub exchange: BTreeMap<String, Option<f64>>,
    #[serde(default)]
    pub exchange_co2_intensities: BTreeMap<String, Option<f64>>,
}

impl ZoneDetail {
    /// A record with no figures at all. Handy as a starting point in tests and demos.
    pub fn new(state_datetime: DateTime<Utc>) -> Self {
        ZoneDetail {
            state_datetime,
            zone_key: None,
            total_import: None,
            total_export: None,
            total_co2_import: None,
            total_co2_export: None,
            exchange: BTreeMap::new(),
            exchange_co2_intensities: BTreeMap::new(),
        }
    }

    pub fn with_power_totals(mut self, import: f64, export: f64) -> Self {
        self.total_import = Some(import);
        self.total_export = Some(export);
        self
    }

    pub fn with_co2_totals(mut self, import: f64, export: f64) -> Self {
        self.total_co2_import = Some(import);
        self.total_co2_export = Some(export);
        self
    }

    pub fn with_exchange(mut self, neighbour: &str, flow: f64, co2_intensity: Option<f64>) -> Self {
        self.exchange.insert(neighbour.to_string(), Some(flow));
        self.exchange_co2_intensities
            .insert(neighbour.to_string(), co2_intensity);
        self
    }

    pub fn has_exchange_data(&self) -> bool {
        !self.exchange.is_empty()
    }

    /// Known flows only; neighbours reported with a null flow are skipped.
    pub fn exchange_flows(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.exchange
            .iter()
            .filter_map(|(neighbour, flow)| flow.map(|f| (neighbour.as_str(), f)))
    }

    pub fn co2_intensity(&self, neighbour: &str) -> Option<f64> {
        self.exchange_co2_intensities
            .get(neighbour)
            .copied()
            .flatten()
    }
}
