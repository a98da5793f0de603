use eframe::{Frame, egui};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::domain::{DisplayMode, TimeAverage, ZoneDetail};
use crate::ui::config::UI_TEXT;
use crate::ui::net_exchange_tooltip::{NetExchangeTooltip, TooltipParams};
use crate::ui::styles::UiStyleExt;
use crate::ui::tooltip_header::AreaGraphHeader;
use crate::ui::translation::Translate;
use crate::ui::utils::{section_heading, setup_custom_visuals, spaced_separator};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The subset of viewer state that survives restarts.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy)]
#[serde(default)]
pub struct PersistedState {
    pub params: TooltipParams,
    pub selected_index: usize,
}

/// Small viewer that hosts the net exchange tooltip next to its display toggles.
pub struct TooltipViewerApp {
    params: TooltipParams,
    zone_details: Vec<ZoneDetail>,
    selected_index: usize,
    translator: Box<dyn Translate>,
    header: AreaGraphHeader,
    load_error: Option<String>,
}

impl TooltipViewerApp {
    /// `cli_params` wins over anything persisted from a previous session.
    pub fn new(
        cc: &eframe::CreationContext,
        zone_details: Vec<ZoneDetail>,
        translator: Box<dyn Translate>,
        cli_params: Option<TooltipParams>,
        load_error: Option<String>,
    ) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let persisted: Option<PersistedState> = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY));

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!("Persisted viewer state: {:?}", persisted);
        }

        let persisted = persisted.unwrap_or_default();
        let params = cli_params.unwrap_or(persisted.params);

        Self::from_parts(
            zone_details,
            translator,
            params,
            persisted.selected_index,
            load_error,
        )
    }

    pub fn from_parts(
        zone_details: Vec<ZoneDetail>,
        translator: Box<dyn Translate>,
        params: TooltipParams,
        selected_index: usize,
        load_error: Option<String>,
    ) -> Self {
        let selected_index = selected_index.min(zone_details.len().saturating_sub(1));
        Self {
            params,
            zone_details,
            selected_index,
            translator,
            header: AreaGraphHeader,
            load_error,
        }
    }

    pub fn params(&self) -> TooltipParams {
        self.params
    }

    pub fn selected_zone(&self) -> Option<&ZoneDetail> {
        self.zone_details.get(self.selected_index)
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, UI_TEXT.controls_heading);

        ui.label_subheader(UI_TEXT.display_mode_heading);
        let previous = self.params;
        ui.horizontal(|ui| {
            ui.radio_value(
                &mut self.params.display_mode,
                DisplayMode::ByPower,
                UI_TEXT.display_by_power,
            );
            ui.radio_value(
                &mut self.params.display_mode,
                DisplayMode::ByEmissions,
                UI_TEXT.display_by_emissions,
            );
        });

        ui.add_space(5.0);
        ui.label_subheader(UI_TEXT.time_average_heading);
        egui::ComboBox::from_id_salt("time_average")
            .selected_text(self.params.time_average.label())
            .show_ui(ui, |ui| {
                for average in TimeAverage::iter() {
                    ui.selectable_value(&mut self.params.time_average, average, average.label());
                }
            });

        if self.zone_details.len() > 1 {
            spaced_separator(ui);
            ui.label_subheader(UI_TEXT.zone_heading);
            let max_index = self.zone_details.len() - 1;
            ui.add(egui::Slider::new(&mut self.selected_index, 0..=max_index));
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions && previous != self.params {
            log::info!("Tooltip params changed: {:?} -> {:?}", previous, self.params);
        }
        #[cfg(not(debug_assertions))]
        let _ = previous;
    }

    fn render_tooltip(&self, ui: &mut egui::Ui) {
        if let Some(err) = &self.load_error {
            ui.label_error(err);
            ui.add_space(10.0);
        }

        if let Some(zone) = self.selected_zone() {
            ui.label_subdued(zone.zone_key.as_deref().unwrap_or(UI_TEXT.zone_unknown));
        }

        // Rebuilt from current inputs every frame: the most recent state always wins.
        let rendered = NetExchangeTooltip::render(
            ui,
            self.selected_zone(),
            &self.params,
            self.translator.as_ref(),
            &self.header,
        );

        if rendered.is_none() {
            ui.label_subdued(UI_TEXT.no_zone_loaded);
        }
    }
}

impl eframe::App for TooltipViewerApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let state = PersistedState {
            params: self.params,
            selected_index: self.selected_index,
        };
        eframe::set_value(storage, eframe::APP_KEY, &state);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::SidePanel::left("controls_panel")
            .resizable(false)
            .show(ctx, |ui| self.render_controls(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.render_tooltip(ui));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::translation::EnglishLocale;
    use chrono::{TimeZone, Utc};

    fn snapshots() -> Vec<ZoneDetail> {
        vec![
            ZoneDetail::new(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap())
                .with_power_totals(1.0, 0.0),
            ZoneDetail::new(Utc.with_ymd_and_hms(2023, 1, 1, 1, 0, 0).unwrap())
                .with_power_totals(2.0, 0.0),
        ]
    }

    #[test]
    fn selected_index_is_clamped_to_available_snapshots() {
        let app = TooltipViewerApp::from_parts(
            snapshots(),
            Box::new(EnglishLocale),
            TooltipParams::default(),
            7,
            None,
        );
        assert_eq!(app.selected_zone().unwrap().total_import, Some(2.0));
    }

    #[test]
    fn no_snapshots_means_no_zone() {
        let app = TooltipViewerApp::from_parts(
            Vec::new(),
            Box::new(EnglishLocale),
            TooltipParams::default(),
            0,
            None,
        );
        assert!(app.selected_zone().is_none());
        assert_eq!(app.params(), TooltipParams::default());
    }

    #[test]
    fn persisted_state_tolerates_missing_fields() {
        let state: PersistedState = serde_json::from_str("{}").unwrap();
        assert_eq!(state.params.display_mode, DisplayMode::ByPower);
        assert_eq!(state.selected_index, 0);
    }
}
