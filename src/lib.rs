#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use analysis::{Direction, ScaledValue, format_exchange, net_exchange, scale_for_mode};
pub use data::{load_locale, load_zone_details};
pub use domain::{DisplayMode, TimeAverage, ZoneDetail};
pub use ui::{NetExchangeTooltip, TooltipContent, TooltipParams, TooltipViewerApp};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Zone detail JSON to show (single snapshot, array, or zoneStates envelope)
    #[arg(long)]
    pub zone_file: Option<PathBuf>,

    /// Locale JSON used for the tooltip wording (defaults to built-in English)
    #[arg(long)]
    pub locale_file: Option<PathBuf>,

    /// Start in emissions mode instead of power mode
    #[arg(long, default_value_t = false)]
    pub emissions: bool,

    /// Time-average granularity passed to the tooltip header
    #[arg(long, value_enum)]
    pub time_average: Option<TimeAverage>,
}

impl Cli {
    /// Params requested on the command line, if any flag touched them.
    pub fn tooltip_params(&self) -> Option<TooltipParams> {
        if !self.emissions && self.time_average.is_none() {
            return None;
        }
        Some(TooltipParams {
            display_mode: DisplayMode::from_emissions_flag(self.emissions),
            time_average: self.time_average.unwrap_or_default(),
        })
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, args: &Cli) -> Box<dyn eframe::App> {
    let mut errors = Vec::new();

    let zone_details = match &args.zone_file {
        Some(path) => load_zone_details(path).unwrap_or_else(|e| {
            log::error!("Failed to load zone detail: {:#}", e);
            errors.push(format!("{:#}", e));
            Vec::new()
        }),
        None => Vec::new(),
    };

    let translator: Box<dyn ui::Translate> = match &args.locale_file {
        Some(path) => match load_locale(path) {
            Ok(locale) => Box::new(locale),
            Err(e) => {
                log::error!("Failed to load locale, using English: {:#}", e);
                errors.push(format!("{:#}", e));
                Box::new(ui::EnglishLocale)
            }
        },
        None => Box::new(ui::EnglishLocale),
    };

    let load_error = (!errors.is_empty()).then(|| errors.join("\n"));

    Box::new(TooltipViewerApp::new(
        cc,
        zone_details,
        translator,
        args.tooltip_params(),
        load_error,
    ))
}
