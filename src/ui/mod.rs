// User interface components
pub mod app;
pub mod config;
pub mod net_exchange_tooltip;
pub mod styles;
pub mod tooltip_header;
pub mod translation;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::TooltipViewerApp;
pub use config::UI_CONFIG;
pub use net_exchange_tooltip::{NetExchangeTooltip, TooltipContent, TooltipParams};
pub use tooltip_header::{AreaGraphHeader, HeaderSpec, TooltipHeader};
pub use translation::{EnglishLocale, JsonLocale, Translate};
