use chrono::{DateTime, Utc};
use eframe::egui::{self, RichText, Ui};
use serde::{Deserialize, Serialize};

use crate::analysis::{Direction, format_exchange, net_exchange, scale_for_mode};
use crate::config::TOOLTIP;
use crate::domain::{DisplayMode, TimeAverage, ZoneDetail};
use crate::ui::config::UI_CONFIG;
use crate::ui::tooltip_header::{HeaderSpec, TooltipHeader};
use crate::ui::translation::{NET_EXCHANGE_TITLE_KEY, Translate};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Display state the caller threads in on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TooltipParams {
    pub display_mode: DisplayMode,
    pub time_average: TimeAverage,
}

/// One fully resolved tooltip, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub datetime: DateTime<Utc>,
    pub time_average: TimeAverage,
    pub title: String,
    pub direction: Direction,
    pub directional_phrase: String,
    pub magnitude: f64,
    pub magnitude_text: String,
    pub unit: &'static str,
}

impl TooltipContent {
    /// The body line as plain text, e.g. `importing 3 MW`.
    pub fn line(&self) -> String {
        format!(
            "{} {} {}",
            self.directional_phrase, self.magnitude_text, self.unit
        )
    }

    pub fn header_spec(&self) -> HeaderSpec<'_> {
        HeaderSpec {
            datetime: self.datetime,
            time_average: self.time_average,
            square_color: TOOLTIP.accent_color,
            title: &self.title,
        }
    }
}

/// Popup showing a zone's net cross-border exchange.
pub struct NetExchangeTooltip;

impl NetExchangeTooltip {
    /// `None` when there is no zone detail: nothing to render.
    pub fn build(
        zone_detail: Option<&ZoneDetail>,
        params: &TooltipParams,
        tr: &dyn Translate,
    ) -> Option<TooltipContent> {
        let zone = zone_detail?;

        let raw = net_exchange(zone, params.display_mode);
        let scale = scale_for_mode(raw, params.display_mode);
        let formatted = format_exchange(raw, scale, TOOLTIP.display_decimals);

        let content = TooltipContent {
            datetime: zone.state_datetime,
            time_average: params.time_average,
            title: tr.translate(NET_EXCHANGE_TITLE_KEY),
            direction: formatted.direction,
            directional_phrase: tr.translate(formatted.direction.translation_key()),
            magnitude: formatted.magnitude,
            magnitude_text: formatted.magnitude_text,
            unit: formatted.unit,
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_tooltip_build {
            log::info!(
                "Net exchange tooltip {:?}: raw={} divisor={} -> \"{}\"",
                zone.zone_key,
                raw,
                scale.divisor,
                content.line()
            );
        }

        Some(content)
    }

    pub fn show(ui: &mut Ui, content: &TooltipContent, header: &dyn TooltipHeader) {
        egui::Frame::popup(ui.style()).show(ui, |ui| {
            ui.set_max_width(UI_CONFIG.tooltip_width);
            header.show_header(ui, &content.header_spec());
            ui.vertical_centered(|ui| {
                ui.horizontal(|ui| {
                    ui.label(&content.directional_phrase);
                    ui.label(
                        RichText::new(&content.magnitude_text)
                            .strong()
                            .color(UI_CONFIG.colors.tooltip_value),
                    );
                    ui.label(content.unit);
                });
            });
        });
    }

    /// Build and draw in one go. Draws nothing when `zone_detail` is `None`.
    pub fn render(
        ui: &mut Ui,
        zone_detail: Option<&ZoneDetail>,
        params: &TooltipParams,
        tr: &dyn Translate,
        header: &dyn TooltipHeader,
    ) -> Option<TooltipContent> {
        let content = Self::build(zone_detail, params, tr)?;
        Self::show(ui, &content, header);
        Some(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::translation::EnglishLocale;
    use chrono::TimeZone;
    use std::cell::RefCell;

    fn zone() -> ZoneDetail {
        ZoneDetail::new(Utc.with_ymd_and_hms(2023, 3, 5, 14, 0, 0).unwrap())
    }

    fn params(display_mode: DisplayMode) -> TooltipParams {
        TooltipParams {
            display_mode,
            time_average: TimeAverage::Daily,
        }
    }

    #[derive(Default)]
    struct RecordingHeader {
        calls: RefCell<Vec<(String, TimeAverage, egui::Color32, DateTime<Utc>)>>,
    }

    impl TooltipHeader for RecordingHeader {
        fn show_header(&self, _ui: &mut Ui, spec: &HeaderSpec<'_>) {
            self.calls.borrow_mut().push((
                spec.title.to_string(),
                spec.time_average,
                spec.square_color,
                spec.datetime,
            ));
        }
    }

    #[test]
    fn missing_zone_renders_nothing() {
        let content = NetExchangeTooltip::build(None, &params(DisplayMode::ByPower), &EnglishLocale);
        assert!(content.is_none());
    }

    #[test]
    fn power_mode_scales_to_megawatts() {
        let zone = zone().with_power_totals(2_500_000.0, 0.0);
        let content =
            NetExchangeTooltip::build(Some(&zone), &params(DisplayMode::ByPower), &EnglishLocale)
                .unwrap();

        assert_eq!(content.title, "Net exchange");
        assert_eq!(content.direction, Direction::Importing);
        assert_eq!(content.unit, "MW");
        assert_eq!(content.magnitude, 3.0);
        assert_eq!(content.line(), "importing 3 MW");
        assert_eq!(content.time_average, TimeAverage::Daily);
        assert_eq!(content.datetime, zone.state_datetime);
    }

    #[test]
    fn emissions_mode_is_unscaled_and_exporting() {
        let zone = zone()
            .with_power_totals(9e9, 0.0)
            .with_co2_totals(0.8, 4.0);
        let content = NetExchangeTooltip::build(
            Some(&zone),
            &params(DisplayMode::ByEmissions),
            &EnglishLocale,
        )
        .unwrap();

        assert_eq!(content.direction, Direction::Exporting);
        assert_eq!(content.line(), "exporting 3 tCO₂eq / min");
    }

    #[test]
    fn zero_exchange_reads_importing() {
        let zone = zone().with_power_totals(500.0, 500.0);
        let content =
            NetExchangeTooltip::build(Some(&zone), &params(DisplayMode::ByPower), &EnglishLocale)
                .unwrap();
        assert_eq!(content.line(), "importing 0 W");
    }

    #[test]
    fn phrases_come_from_the_translator() {
        let tr = |key: &str| format!("<{key}>");
        let zone = zone().with_power_totals(0.0, 1_500.0);
        let content =
            NetExchangeTooltip::build(Some(&zone), &params(DisplayMode::ByPower), &tr).unwrap();

        assert_eq!(content.title, "<tooltips.netExchange>");
        assert_eq!(content.line(), "<tooltips.exporting> 2 kW");
    }

    #[test]
    fn show_invokes_header_once_with_accent_colour() {
        let zone = zone().with_power_totals(42_000.0, 0.0);
        let content =
            NetExchangeTooltip::build(Some(&zone), &params(DisplayMode::ByPower), &EnglishLocale)
                .unwrap();
        let header = RecordingHeader::default();

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                NetExchangeTooltip::show(ui, &content, &header);
            });
        });

        let calls = header.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (title, time_average, colour, datetime) = &calls[0];
        assert_eq!(title, "Net exchange");
        assert_eq!(*time_average, TimeAverage::Daily);
        assert_eq!(*colour, egui::Color32::from_rgb(0x7f, 0x7f, 0x7f));
        assert_eq!(*datetime, zone.state_datetime);
    }

    #[test]
    fn render_skips_header_without_zone() {
        let header = RecordingHeader::default();
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let rendered = NetExchangeTooltip::render(
                    ui,
                    None,
                    &params(DisplayMode::ByPower),
                    &EnglishLocale,
                    &header,
                );
                assert!(rendered.is_none());
            });
        });
        assert!(header.calls.borrow().is_empty());
    }
}
