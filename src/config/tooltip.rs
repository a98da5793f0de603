//! Net exchange tooltip configuration

use eframe::egui::Color32;

/// One rung of the power unit ladder.
#[derive(Debug, Clone, Copy)]
pub struct PowerUnitStep {
    /// Smallest absolute value (in base units) that switches to this unit.
    pub threshold: f64,
    pub unit: &'static str,
}

pub struct PowerScaleConfig {
    /// Unit used when the magnitude sits below the first step.
    pub base_unit: &'static str,
    /// Ascending by threshold.
    pub steps: &'static [PowerUnitStep],
}

pub const POWER_SCALE: PowerScaleConfig = PowerScaleConfig {
    base_unit: "W",
    steps: &[
        PowerUnitStep { threshold: 1e3, unit: "kW" },
        PowerUnitStep { threshold: 1e6, unit: "MW" },
        PowerUnitStep { threshold: 1e9, unit: "GW" },
        PowerUnitStep { threshold: 1e12, unit: "TW" },
    ],
};

pub struct TooltipConfig {
    /// Colour of the square drawn next to the header title
    pub accent_color: Color32,
    /// Emissions are never rescaled; they always show in this unit
    pub emissions_unit: &'static str,
    /// Decimal places kept in the displayed magnitude (0 = whole numbers)
    pub display_decimals: u32,
}

pub const TOOLTIP: TooltipConfig = TooltipConfig {
    accent_color: Color32::from_rgb(0x7f, 0x7f, 0x7f),
    emissions_unit: "tCO₂eq / min",
    display_decimals: 0,
};
