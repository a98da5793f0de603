use crate::analysis::power_scale::ScaledValue;
use crate::utils::{format_fixed, round_to};

/// Translation keys for the directional wording.
pub const IMPORTING_KEY: &str = "tooltips.importing";
pub const EXPORTING_KEY: &str = "tooltips.exporting";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Importing,
    Exporting,
}

impl Direction {
    /// Zero counts as importing. Only a strictly negative value is exporting.
    pub fn from_net_exchange(raw: f64) -> Self {
        if raw >= 0.0 {
            Direction::Importing
        } else {
            Direction::Exporting
        }
    }

    pub fn translation_key(self) -> &'static str {
        match self {
            Direction::Importing => IMPORTING_KEY,
            Direction::Exporting => EXPORTING_KEY,
        }
    }
}

/// Display-ready exchange figure. The sign lives in `direction`; `magnitude` is never negative.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedExchange {
    pub direction: Direction,
    pub magnitude: f64,
    pub magnitude_text: String,
    pub unit: &'static str,
}

pub fn format_exchange(raw: f64, scale: ScaledValue, decimals: u32) -> FormattedExchange {
    // Direction is decided on the signed raw value, before any abs() below.
    let direction = Direction::from_net_exchange(raw);
    let magnitude = round_to(scale.apply(raw).abs(), decimals);

    FormattedExchange {
        direction,
        magnitude,
        magnitude_text: format_fixed(magnitude, decimals),
        unit: scale.unit,
    }
}
