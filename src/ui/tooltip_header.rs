use chrono::{DateTime, Utc};
use eframe::egui::{self, Color32, RichText, Sense, Ui};

use crate::domain::TimeAverage;
use crate::ui::config::UI_CONFIG;
use crate::ui::styles::UiStyleExt;
use crate::utils::format_datetime;

/// Everything the header helper needs to draw the top of a graph tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderSpec<'a> {
    pub datetime: DateTime<Utc>,
    pub time_average: TimeAverage,
    pub square_color: Color32,
    pub title: &'a str,
}

/// Draws the header block of an area-graph tooltip.
pub trait TooltipHeader {
    fn show_header(&self, ui: &mut Ui, spec: &HeaderSpec<'_>);
}

/// Colour square + title on one row, datetime underneath.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaGraphHeader;

impl TooltipHeader for AreaGraphHeader {
    fn show_header(&self, ui: &mut Ui, spec: &HeaderSpec<'_>) {
        ui.horizontal(|ui| {
            let size = UI_CONFIG.header_square_size;
            let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, spec.square_color);
            ui.label(RichText::new(spec.title).strong());
        });
        ui.label_subdued(format_datetime(spec.datetime, spec.time_average));
        ui.separator();
    }
}
