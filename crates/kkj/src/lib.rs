//! KKJ ⇄ WGS84 coordinate conversion.
//!
//! KKJ (Kartastokoordinaattijärjestelmä) is the legacy Finnish national grid:
//! a Gauss-Krüger projection of the Hayford ellipsoid split into six 3°-wide
//! zones. This crate converts between
//! - KKJ grid coordinates (northing/easting in meters, zone in the easting),
//! - KKJ geodetic coordinates (latitude/longitude on the local datum), and
//! - WGS84 geodetic coordinates.
//!
//! Layering (leaves first)
//! - `angle`: degree/radian/arc-second helpers.
//! - `zone`: zone table and zone resolution from easting or longitude.
//! - `projector`: closed-form forward projection onto the grid.
//! - `inverter`: fixed 34-step asymmetric bisection back to geodetic.
//! - `datum`: empirical KKJ ⇄ WGS84 datum-shift polynomials.
//! - `convert`: the composite public conversions.
//!
//! Every operation is a pure function of its inputs. Inputs are assumed to lie
//! in Finland; far outside it results degrade to NaN/Infinity or a `ZoneError`.

pub mod angle;
mod cfg;
pub mod convert;
pub mod coord;
pub mod datum;
pub mod inverter;
pub mod projector;
pub mod sample;
pub mod zone;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use convert::{
    global_geodetic_to_grid, global_geodetic_to_local_geodetic, grid_to_global_geodetic,
    grid_to_local_geodetic, grid_to_local_geodetic_in_zone, local_geodetic_to_global_geodetic,
    local_geodetic_to_grid, local_geodetic_to_grid_in_zone,
};
pub use coord::{GeodeticCoordinate, GridCoordinate};
pub use zone::{Zone, ZoneError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::convert::*;
    pub use crate::coord::{GeodeticCoordinate, GridCoordinate};
    pub use crate::datum::{DatumShift, KKJ_TO_WGS84, WGS84_TO_KKJ};
    pub use crate::inverter::invert;
    pub use crate::projector::{project, Ellipsoid, HAYFORD};
    pub use crate::zone::{Zone, ZoneError};
}
