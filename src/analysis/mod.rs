// Net exchange derivation, magnitude scaling and presentation
pub mod net_exchange;
pub mod power_scale;
pub mod presentation;

// Re-export commonly used types
pub use net_exchange::net_exchange;
pub use power_scale::{ScaledValue, scale_for_mode, scale_power};
pub use presentation::{Direction, FormattedExchange, format_exchange};
