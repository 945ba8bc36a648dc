//! Coordinate value types.
//!
//! - `GeodeticCoordinate`: latitude/longitude in decimal degrees. The same type
//!   carries KKJ and WGS84 values; which frame an instance is in is decided by
//!   the function that produced it.
//! - `GridCoordinate`: KKJ northing/easting in meters. The zone lives in the
//!   millions digit of the easting.

use nalgebra::Vector2;

/// Latitude/longitude pair, decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeodeticCoordinate {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// `(latitude, longitude)` as a column vector.
    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.latitude, self.longitude)
    }

    #[inline]
    pub fn from_vector(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }

    /// Largest per-axis difference to `other`, degrees.
    #[inline]
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        (self.to_vector() - other.to_vector()).amax()
    }
}

/// Northing/easting pair, meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCoordinate {
    pub northing: f64,
    pub easting: f64,
}

impl GridCoordinate {
    #[inline]
    pub const fn new(northing: f64, easting: f64) -> Self {
        Self { northing, easting }
    }

    /// `(northing, easting)` as a column vector.
    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.northing, self.easting)
    }

    #[inline]
    pub fn from_vector(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }

    /// Both axes rounded to the nearest meter (halves away from zero).
    #[inline]
    pub fn rounded(self) -> Self {
        Self::new(self.northing.round(), self.easting.round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_roundtrip_keeps_axis_order() {
        let g = GeodeticCoordinate::new(60.0, 25.0);
        let v = g.to_vector();
        assert_eq!(v.x, 60.0);
        assert_eq!(v.y, 25.0);
        assert_eq!(GeodeticCoordinate::from_vector(v), g);

        let p = GridCoordinate::new(6_673_278.0, 2_552_455.0);
        assert_eq!(GridCoordinate::from_vector(p.to_vector()), p);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        let p = GridCoordinate::new(6_673_277.5, 2_552_454.49).rounded();
        assert_eq!(p, GridCoordinate::new(6_673_278.0, 2_552_454.0));
    }

    #[test]
    fn max_abs_diff_picks_worst_axis() {
        let a = GeodeticCoordinate::new(60.0, 25.0);
        let b = GeodeticCoordinate::new(60.001, 24.99);
        assert!((a.max_abs_diff(&b) - 0.01).abs() < 1e-12);
    }
}
