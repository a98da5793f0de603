/// All user-facing English strings in one place.
pub struct UiText {
    pub app_title: &'static str,

    // Tooltip (also the English fallback locale)
    pub tooltip_net_exchange_title: &'static str,
    pub tooltip_importing: &'static str,
    pub tooltip_exporting: &'static str,

    // Viewer controls
    pub controls_heading: &'static str,
    pub display_mode_heading: &'static str,
    pub display_by_power: &'static str,
    pub display_by_emissions: &'static str,
    pub time_average_heading: &'static str,
    pub zone_heading: &'static str,
    pub zone_unknown: &'static str,
    pub no_zone_loaded: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Net Exchange Tooltip",

    tooltip_net_exchange_title: "Net exchange",
    tooltip_importing: "importing",
    tooltip_exporting: "exporting",

    controls_heading: "Display",
    display_mode_heading: "Show values as",
    display_by_power: "Power",
    display_by_emissions: "Emissions",
    time_average_heading: "Time average",
    zone_heading: "Zone",
    zone_unknown: "(unnamed zone)",
    no_zone_loaded: "No zone detail loaded. Pass --zone-file to show a tooltip.",
};
