use crate::domain::{DisplayMode, ZoneDetail};

/// Signed net exchange for `zone` in the unit family of `mode`.
///
/// Positive means the zone is a net importer, negative a net exporter.
/// Reported totals win; a missing total counts as zero. Only when *both*
/// totals for the mode are missing do we fall back to summing the
/// per-neighbour flows.
pub fn net_exchange(zone: &ZoneDetail, mode: DisplayMode) -> f64 {
    let (import, export) = match mode {
        DisplayMode::ByPower => (zone.total_import, zone.total_export),
        DisplayMode::ByEmissions => (zone.total_co2_import, zone.total_co2_export),
    };

    if import.is_none() && export.is_none() && zone.has_exchange_data() {
        let (import, export) = totals_from_flows(zone, mode);
        return import - export;
    }

    import.unwrap_or(0.0) - export.unwrap_or(0.0)
}

/// (import, export) summed from the exchange map. Export is returned as a positive number.
pub fn totals_from_flows(zone: &ZoneDetail, mode: DisplayMode) -> (f64, f64) {
    zone.exchange_flows()
        .map(|(neighbour, flow)| match mode {
            DisplayMode::ByPower => flow,
            DisplayMode::ByEmissions => flow * zone.co2_intensity(neighbour).unwrap_or(0.0),
        })
        .fold((0.0, 0.0), |(import, export), weighted| {
            if weighted >= 0.0 {
                (import + weighted, export)
            } else {
                (import, export - weighted)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn zone() -> ZoneDetail {
        ZoneDetail::new(Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn power_mode_uses_power_totals() {
        let zone = zone()
            .with_power_totals(3_000_000.0, 500_000.0)
            .with_co2_totals(1.0, 9.0);
        assert!(approx_eq(net_exchange(&zone, DisplayMode::ByPower), 2_500_000.0));
    }

    #[test]
    fn emissions_mode_uses_co2_totals() {
        let zone = zone()
            .with_power_totals(3_000_000.0, 500_000.0)
            .with_co2_totals(1.0, 4.2);
        assert!(approx_eq(net_exchange(&zone, DisplayMode::ByEmissions), -3.2));
    }

    #[test]
    fn missing_single_total_counts_as_zero() {
        let mut zone = zone();
        zone.total_export = Some(40.0);
        assert!(approx_eq(net_exchange(&zone, DisplayMode::ByPower), -40.0));

        zone.total_export = None;
        zone.total_import = Some(12.0);
        assert!(approx_eq(net_exchange(&zone, DisplayMode::ByPower), 12.0));
    }

    #[test]
    fn no_figures_at_all_is_zero() {
        assert_eq!(net_exchange(&zone(), DisplayMode::ByPower), 0.0);
        assert_eq!(net_exchange(&zone(), DisplayMode::ByEmissions), 0.0);
    }

    #[test]
    fn falls_back_to_exchange_flows_when_totals_missing() {
        let zone = zone()
            .with_exchange("DE", 800.0, Some(0.5))
            .with_exchange("NO-NO2", -150.0, Some(0.02))
            .with_exchange("SE-SE3", -50.0, None);

        let (import, export) = totals_from_flows(&zone, DisplayMode::ByPower);
        assert!(approx_eq(import, 800.0));
        assert!(approx_eq(export, 200.0));
        assert!(approx_eq(net_exchange(&zone, DisplayMode::ByPower), 600.0));

        // 800 * 0.5 in, 150 * 0.02 out, SE-SE3 has no intensity so contributes nothing
        let (co2_in, co2_out) = totals_from_flows(&zone, DisplayMode::ByEmissions);
        assert!(approx_eq(co2_in, 400.0));
        assert!(approx_eq(co2_out, 3.0));
        assert!(approx_eq(net_exchange(&zone, DisplayMode::ByEmissions), 397.0));
    }

    #[test]
    fn reported_totals_take_precedence_over_flows() {
        let zone = zone()
            .with_power_totals(10.0, 30.0)
            .with_exchange("DE", 1_000.0, Some(1.0));
        assert!(approx_eq(net_exchange(&zone, DisplayMode::ByPower), -20.0));
        // Emissions totals are missing, so that mode still uses the flows
        assert!(approx_eq(net_exchange(&zone, DisplayMode::ByEmissions), 1_000.0));
    }
}
