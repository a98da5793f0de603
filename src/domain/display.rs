use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Whether exchange figures are shown as power or as emissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    ByEmissions,
    #[default]
    ByPower,
}

impl DisplayMode {
    pub fn from_emissions_flag(by_emissions: bool) -> Self {
        if by_emissions {
            DisplayMode::ByEmissions
        } else {
            DisplayMode::ByPower
        }
    }

    pub fn is_emissions(self) -> bool {
        matches!(self, DisplayMode::ByEmissions)
    }
}

/// Granularity of the data points the tooltip is describing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TimeAverage {
    #[default]
    Hourly,
    Daily,
    Monthly,
    Yearly,
}

impl TimeAverage {
    pub fn label(self) -> &'static str {
        match self {
            TimeAverage::Hourly => "Hourly",
            TimeAverage::Daily => "Daily",
            TimeAverage::Monthly => "Monthly",
            TimeAverage::Yearly => "Yearly",
        }
    }
}

impl std::fmt::Display for TimeAverage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
