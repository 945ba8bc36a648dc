//! Empirical KKJ ⇄ WGS84 datum shift.
//!
//! Each direction is a pair of quadratic polynomials in the input latitude and
//! longitude (degrees) over the monomials `1, φ, λ, φ², φλ, λ²`, yielding the
//! offset in arc-seconds. The offset is added in radians:
//! `out = degrees(radians(in) + radians(offset) / 3600)`.
//!
//! The two directions were fitted independently; one after the other returns
//! the input only to about 1e-7°.

use crate::angle::{arcsec_to_radians, degrees, radians};
use crate::coord::GeodeticCoordinate;

/// Shift polynomial coefficients for one direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DatumShift {
    /// Latitude offset coefficients over `1, φ, λ, φ², φλ, λ²`.
    pub lat: [f64; 6],
    /// Longitude offset coefficients over the same monomials.
    pub lon: [f64; 6],
}

/// KKJ geodetic → WGS84 geodetic.
pub const KKJ_TO_WGS84: DatumShift = DatumShift {
    lat: [
        0.124867E+01,
        -0.269982E+00,
        0.191330E+00,
        0.356119E-02,
        -0.122312E-02,
        -0.335514E-03,
    ],
    lon: [
        -0.286111E+02,
        0.114183E+01,
        -0.581428E+00,
        -0.152421E-01,
        0.118177E-01,
        0.826646E-03,
    ],
};

/// WGS84 geodetic → KKJ geodetic.
pub const WGS84_TO_KKJ: DatumShift = DatumShift {
    lat: [
        -0.124766E+01,
        0.269941E+00,
        -0.191342E+00,
        -0.356086E-02,
        0.122353E-02,
        0.335456E-03,
    ],
    lon: [
        0.286008E+02,
        -0.114139E+01,
        0.581329E+00,
        0.152376E-01,
        -0.118166E-01,
        -0.826201E-03,
    ],
};

#[inline]
fn poly(c: &[f64; 6], la: f64, lo: f64) -> f64 {
    c[0] + c[1] * la + c[2] * lo + c[3] * la * la + c[4] * la * lo + c[5] * lo * lo
}

impl DatumShift {
    /// `(Δφ, Δλ)` in arc-seconds at `geo`.
    pub fn offset_arcsec(&self, geo: GeodeticCoordinate) -> (f64, f64) {
        let (la, lo) = (geo.latitude, geo.longitude);
        (poly(&self.lat, la, lo), poly(&self.lon, la, lo))
    }

    pub fn apply(&self, geo: GeodeticCoordinate) -> GeodeticCoordinate {
        let (dla, dlo) = self.offset_arcsec(geo);
        GeodeticCoordinate::new(
            degrees(radians(geo.latitude) + arcsec_to_radians(dla)),
            degrees(radians(geo.longitude) + arcsec_to_radians(dlo)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KKJ: GeodeticCoordinate = GeodeticCoordinate::new(60.167606, 24.944811);
    const WGS: GeodeticCoordinate = GeodeticCoordinate::new(60.167777, 24.941658);

    #[test]
    fn helsinki_forward() {
        let w = KKJ_TO_WGS84.apply(KKJ);
        assert!(w.max_abs_diff(&WGS) < 1e-5, "{:?}", w);
    }

    #[test]
    fn helsinki_inverse() {
        let k = WGS84_TO_KKJ.apply(WGS);
        assert!(k.max_abs_diff(&KKJ) < 1e-5, "{:?}", k);
    }

    #[test]
    fn offsets_are_a_few_arcseconds_in_finland() {
        // ~0.6" north, ~-11" west around Helsinki
        let (dla, dlo) = KKJ_TO_WGS84.offset_arcsec(KKJ);
        assert!(dla > 0.0 && dla < 2.0, "{}", dla);
        assert!(dlo < -5.0 && dlo > -20.0, "{}", dlo);
    }

    #[test]
    fn directions_are_not_exact_inverses() {
        let back = WGS84_TO_KKJ.apply(KKJ_TO_WGS84.apply(KKJ));
        let residual = back.max_abs_diff(&KKJ);
        assert!(residual < 1e-6, "{}", residual);
        assert!(residual > 0.0);
    }
}
