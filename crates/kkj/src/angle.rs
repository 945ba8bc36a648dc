//! Angle-unit helpers.
//!
//! Conversions multiply before dividing (`deg * π / 180`). `f64::to_radians`
//! folds `π / 180` first and differs in the last bit; do not swap them.

use std::f64::consts::PI;

/// Arc-seconds per degree.
pub const ARCSEC_PER_DEGREE: f64 = 3600.0;

/// Degrees → radians.
#[inline]
pub fn radians(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Radians → degrees.
#[inline]
pub fn degrees(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Arc-seconds → radians.
#[inline]
pub fn arcsec_to_radians(arcsec: f64) -> f64 {
    radians(arcsec) / ARCSEC_PER_DEGREE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_angle_both_ways() {
        assert!((radians(90.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
        assert!((degrees(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn one_degree_of_arcseconds() {
        assert!((arcsec_to_radians(3600.0) - radians(1.0)).abs() < 1e-15);
    }

    #[test]
    fn degrees_undo_radians_in_finland() {
        for deg in [18.5, 24.944811, 60.167606, 70.5] {
            assert!((degrees(radians(deg)) - deg).abs() < 1e-12);
        }
    }
}
