//! Configuration module for the exchange tooltip.

mod debug; // Private: files use crate::config::DEBUG_FLAGS not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod tooltip;

// Re-export commonly used items
pub use persistence::APP_STATE_PATH;
pub use tooltip::{POWER_SCALE, PowerScaleConfig, PowerUnitStep, TOOLTIP, TooltipConfig};
