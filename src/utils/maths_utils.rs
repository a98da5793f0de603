/// Rounds `value` to `decimals` places, half away from zero.
///
/// The value is nudged by `f64::EPSILON` (in the direction of its sign) before
/// scaling so that decimal inputs stored just below a half, e.g. 1.005, still
/// round up the way a reader would expect.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    let nudged = value + f64::EPSILON.copysign(value);
    (nudged * factor).round() / factor
}

/// Fixed-precision text for an already rounded magnitude.
pub fn format_fixed(value: f64, decimals: u32) -> String {
    format!("{:.*}", decimals as usize, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert!(approx_eq(round_to(2.5, 0), 3.0));
        assert!(approx_eq(round_to(-2.5, 0), -3.0));
        assert!(approx_eq(round_to(-3.2, 0), -3.0));
        assert!(approx_eq(round_to(0.125, 2), 0.13));
        assert!(approx_eq(round_to(1.005, 2), 1.01));
    }

    #[test]
    fn rounding_is_idempotent() {
        for &value in &[0.0, 2.5, -3.2, 1234.5678, 0.005, 999_999.49] {
            for decimals in 0..4 {
                let once = round_to(value, decimals);
                assert!(
                    approx_eq(round_to(once, decimals), once),
                    "round_to({value}, {decimals}) not idempotent"
                );
            }
        }
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(round_to(f64::NAN, 0).is_nan());
        assert_eq!(round_to(f64::INFINITY, 2), f64::INFINITY);
    }

    #[test]
    fn fixed_formatting() {
        assert_eq!(format_fixed(3.0, 0), "3");
        assert_eq!(format_fixed(2.5, 1), "2.5");
        assert_eq!(format_fixed(0.0, 2), "0.00");
    }
}
