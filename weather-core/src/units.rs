//! Temperature conversions.

pub const ABSOLUTE_ZERO_F: f32 = 459.67;

/// Convert Kelvin to whole degrees Fahrenheit.
///
/// The result is rounded (half away from zero) before it is returned, so it
/// always formats with a `.00` fraction.
pub fn kelvin_to_fahrenheit(kelvin: f32) -> f32 {
    (kelvin * 9.0 / 5.0 - ABSOLUTE_ZERO_F).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_down_below_half() {
        // 300 * 9/5 - 459.67 = 80.33
        assert_eq!(kelvin_to_fahrenheit(300.0), 80.0);
        assert_eq!(format!("{:.2}", kelvin_to_fahrenheit(300.0)), "80.00");
    }

    #[test]
    fn freezing_point() {
        assert_eq!(format!("{:.2}", kelvin_to_fahrenheit(273.15)), "32.00");
    }

    #[test]
    fn rounds_up_above_half() {
        // 290 * 9/5 - 459.67 = 62.33, 291 * 9/5 - 459.67 = 64.13
        assert_eq!(kelvin_to_fahrenheit(290.0), 62.0);
        assert_eq!(kelvin_to_fahrenheit(291.0), 64.0);
        // 295.9 * 9/5 - 459.67 = 72.95
        assert_eq!(kelvin_to_fahrenheit(295.9), 73.0);
    }

    #[test]
    fn zero_kelvin_is_absolute_zero() {
        assert_eq!(kelvin_to_fahrenheit(0.0), -460.0);
    }

    #[test]
    fn fraction_is_always_zero() {
        for tenths in 2000..3300 {
            let f = kelvin_to_fahrenheit(tenths as f32 / 10.0);
            assert_eq!(f.fract(), 0.0);
            assert!(format!("{f:.2}").ends_with(".00"));
        }
    }
}
