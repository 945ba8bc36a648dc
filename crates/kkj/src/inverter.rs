//! Grid → geodetic inversion by fixed-step bisection.
//!
//! There is no closed-form inverse here. Instead a latitude/longitude box over
//! Finland is shrunk around the target, using the forward projection as an
//! oracle:
//! - candidate = box midpoint, projected in the target's zone;
//! - per axis: undershoot moves the lower bound up by 45% of the span,
//!   otherwise the upper bound drops to 55% of the span above the lower bound.
//!
//! Northing drives latitude and easting drives longitude. Exactly 34 steps are
//! taken with no convergence test; the result is the last candidate. The split
//! is deliberately not 50/50 and the step count is fixed: both determine the
//! exact output bits.
//!
//! Targets outside the box (e.g. zone 5 east of 32°E) converge to the box
//! edge rather than failing.

use nalgebra::Vector2;

use crate::angle::{degrees, radians};
use crate::cfg::{INVERT_ITERATIONS, LOWER_UPPER, RAISE_LOWER, SEARCH_MAX_DEG, SEARCH_MIN_DEG};
use crate::coord::{GeodeticCoordinate, GridCoordinate};
use crate::projector::project;
use crate::zone::{Zone, ZoneError};

/// Axis-aligned `(latitude, longitude)` box in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchBox {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl SearchBox {
    /// Initial box: 59°..70.5°N, 18.5°..32°E.
    pub fn finland() -> Self {
        Self {
            min: Vector2::new(radians(SEARCH_MIN_DEG.0), radians(SEARCH_MIN_DEG.1)),
            max: Vector2::new(radians(SEARCH_MAX_DEG.0), radians(SEARCH_MAX_DEG.1)),
        }
    }

    #[inline]
    pub fn span(&self) -> Vector2<f64> {
        self.max - self.min
    }

    /// Midpoint in degrees.
    #[inline]
    pub fn midpoint(&self) -> GeodeticCoordinate {
        let mid = self.min + 0.5 * self.span();
        GeodeticCoordinate::new(degrees(mid.x), degrees(mid.y))
    }

    /// One asymmetric bisection step given projected and target grid vectors.
    fn shrink(&mut self, projected: Vector2<f64>, target: Vector2<f64>) {
        let span = self.span();
        for k in 0..2 {
            if projected[k] < target[k] {
                self.min[k] += RAISE_LOWER * span[k];
            } else {
                self.max[k] = self.min[k] + LOWER_UPPER * span[k];
            }
        }
    }
}

/// Invert `grid` in the zone encoded in its easting.
pub fn invert(grid: GridCoordinate) -> Result<GeodeticCoordinate, ZoneError> {
    let zone = Zone::from_easting(grid.easting)?;
    Ok(invert_in_zone(grid, zone))
}

/// Invert `grid` against the projection of an explicit `zone`.
pub fn invert_in_zone(grid: GridCoordinate, zone: Zone) -> GeodeticCoordinate {
    let target = grid.to_vector();
    let mut bx = SearchBox::finland();
    let mut candidate = bx.midpoint();
    for _ in 0..INVERT_ITERATIONS {
        candidate = bx.midpoint();
        let projected = project(candidate, zone).to_vector();
        bx.shrink(projected, target);
    }
    candidate
}
