use crate::config::{POWER_SCALE, PowerScaleConfig, TOOLTIP};
use crate::domain::DisplayMode;

/// Divisor and unit chosen for one rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledValue {
    /// Always positive, so dividing never flips the sign.
    pub divisor: f64,
    pub unit: &'static str,
}

impl ScaledValue {
    pub const fn unscaled(unit: &'static str) -> Self {
        ScaledValue { divisor: 1.0, unit }
    }

    pub fn apply(&self, raw: f64) -> f64 {
        raw / self.divisor
    }
}

/// Scale for the active display mode. Emissions are never rescaled.
pub fn scale_for_mode(raw: f64, mode: DisplayMode) -> ScaledValue {
    match mode {
        DisplayMode::ByEmissions => ScaledValue::unscaled(TOOLTIP.emissions_unit),
        DisplayMode::ByPower => scale_power(raw),
    }
}

pub fn scale_power(raw: f64) -> ScaledValue {
    scale_power_with(raw, &POWER_SCALE)
}

/// Largest step whose threshold does not exceed `|raw|`, else the base unit.
pub fn scale_power_with(raw: f64, config: &PowerScaleConfig) -> ScaledValue {
    let magnitude = raw.abs();
    if !magnitude.is_finite() {
        return ScaledValue::unscaled(config.base_unit);
    }

    config
        .steps
        .iter()
        .rev()
        .find(|step| magnitude >= step.threshold)
        .map(|step| ScaledValue {
            divisor: step.threshold,
            unit: step.unit,
        })
        .unwrap_or(ScaledValue::unscaled(config.base_unit))
}
