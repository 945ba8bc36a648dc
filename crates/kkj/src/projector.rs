//! Forward Gauss-Krüger projection onto the KKJ grid.
//!
//! Model
//! - Hayford (International 1924) ellipsoid, a = 6 378 388 m, f = 1/297.
//! - Latitude is first mapped through `laf = atan(tan φ / cos(Δλ·√(1+e'²cos²φ)))`,
//!   then northing is the 4th-order meridian-arc series at `laf` and easting is
//!   `c·asinh(t)` plus the zone's false easting.
//!
//! All series coefficients depend only on the ellipsoid and are folded into
//! `Ellipsoid` at compile time; `project` itself is a handful of trig calls.

use crate::angle::radians;
use crate::cfg::{FALSE_EASTING, ZONE_EASTING_SPAN};
use crate::coord::{GeodeticCoordinate, GridCoordinate};
use crate::zone::Zone;

/// Reference ellipsoid with the derived constants the projection needs.
#[derive(Clone, Copy, Debug)]
pub struct Ellipsoid {
    /// Semi-major axis (meters)
    pub a: f64,
    /// Flattening
    pub f: f64,
    /// Semi-minor axis: a * (1 - f)
    pub b: f64,
    /// Second eccentricity squared: (a² - b²) / b²
    pub ep2: f64,
    /// Polar radius of curvature: a² / b
    pub c: f64,
    /// Third flattening: (a - b) / (a + b)
    pub n: f64,
    /// Meridian-arc series coefficients `a1..a4`.
    pub arc: [f64; 4],
}

impl Ellipsoid {
    pub const fn new(a: f64, f: f64) -> Self {
        let b = (1.0 - f) * a;
        let bb = b * b;
        let c = (a / b) * a;
        let ep2 = (a * a - bb) / bb;
        let n = (a - b) / (a + b);
        let nn = n * n;
        let a0 = a / (1.0 + n);
        let arc = [
            a0 * (1.0 + nn / 4.0 + nn * nn / 64.0),
            a0 * 1.5 * n * (1.0 - nn / 8.0),
            a0 * 0.9375 * nn * (1.0 - nn / 4.0),
            a0 * 35.0 / 48.0 * nn * n,
        ];
        Self {
            a,
            f,
            b,
            ep2,
            c,
            n,
            arc,
        }
    }

    /// Meridian arc length series evaluated at `phi` (radians).
    #[inline]
    pub fn meridian_arc(&self, phi: f64) -> f64 {
        let [a1, a2, a3, a4] = self.arc;
        a1 * phi - a2 * (2.0 * phi).sin() + a3 * (4.0 * phi).sin() - a4 * (6.0 * phi).sin()
    }
}

/// International 1924 ellipsoid used by KKJ.
pub const HAYFORD: Ellipsoid = Ellipsoid::new(6_378_388.0, 1.0 / 297.0);

/// Project a KKJ geodetic coordinate onto the grid of `zone`.
///
/// No domain checks: far outside the zone the trig terms blow up to NaN/Inf.
pub fn project(geo: GeodeticCoordinate, zone: Zone) -> GridCoordinate {
    project_on(&HAYFORD, geo, zone)
}

pub(crate) fn project_on(ell: &Ellipsoid, geo: GeodeticCoordinate, zone: Zone) -> GridCoordinate {
    let lo = radians(geo.longitude) - radians(zone.central_meridian());
    let la = radians(geo.latitude);

    let cosla = la.cos();
    let laf = (la.tan() / (lo * (1.0 + ell.ep2 * cosla * cosla).sqrt()).cos()).atan();
    let coslaf = laf.cos();
    let t = (lo.tan() * coslaf) / (1.0 + ell.ep2 * coslaf * coslaf).sqrt();

    let northing = ell.meridian_arc(laf);
    // summed left to right; regrouping the offsets changes the last bit
    let easting = ell.c * (t + (1.0 + t * t).sqrt()).ln()
        + FALSE_EASTING
        + zone.number() as f64 * ZONE_EASTING_SPAN;
    GridCoordinate::new(northing, easting)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hayford_constants() {
        assert_eq!(HAYFORD.a, 6_378_388.0);
        assert!((HAYFORD.b - 6_356_911.946_128).abs() < 1e-3);
        assert!((HAYFORD.n - 1.0 / 593.0).abs() < 1e-15);
        assert!((HAYFORD.ep2 - 0.006_768_170_197_224).abs() < 1e-12);
    }

    #[test]
    fn helsinki_in_zone_2() {
        let g = GeodeticCoordinate::new(60.167606, 24.944811);
        let p = project(g, Zone::new(2).unwrap());
        assert!((p.northing - 6_673_278.0).abs() < 0.01, "{:?}", p);
        assert!((p.easting - 2_552_455.0).abs() < 0.02, "{:?}", p);
    }

    #[test]
    fn helsinki_in_uniform_zone() {
        let g = GeodeticCoordinate::new(60.167606, 24.944811);
        let p = project(g, Zone::UNIFORM);
        assert!((p.northing - 6_674_678.0).abs() < 0.2, "{:?}", p);
        assert!((p.easting - 3_385_908.0).abs() < 0.4, "{:?}", p);
    }

    #[test]
    fn central_meridian_maps_to_false_easting() {
        for z in Zone::ALL {
            let p = project(GeodeticCoordinate::new(60.0, z.central_meridian()), z);
            assert_eq!(p.easting, z.false_easting());
            assert!((p.northing - 6_654_228.396).abs() < 1e-2);
        }
    }

    #[test]
    fn northing_and_easting_increase_inside_zone() {
        let z = Zone::new(2).unwrap();
        let base = project(GeodeticCoordinate::new(62.0, 24.5), z);
        let north = project(GeodeticCoordinate::new(62.01, 24.5), z);
        let east = project(GeodeticCoordinate::new(62.0, 24.51), z);
        assert!(north.northing > base.northing);
        assert!(east.easting > base.easting);
    }
}
