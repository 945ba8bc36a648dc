//! Public KKJ ⇄ WGS84 conversions.
//!
//! Frames
//! - grid: KKJ northing/easting, zone from the easting's millions digit;
//! - local geodetic: KKJ latitude/longitude (Hayford ellipsoid);
//! - global geodetic: WGS84 latitude/longitude.
//!
//! Pipelines
//! - grid → global: invert, then datum shift KKJ → WGS84.
//! - global → grid: datum shift WGS84 → KKJ, pick the zone from the shifted
//!   longitude, project, round to whole meters.
//!
//! Only grid-side operations can fail, and only when no zone fits.

use crate::coord::{GeodeticCoordinate, GridCoordinate};
use crate::datum::{KKJ_TO_WGS84, WGS84_TO_KKJ};
use crate::inverter::{invert, invert_in_zone};
use crate::projector::project;
use crate::zone::{Zone, ZoneError};

/// KKJ grid → WGS84 geodetic.
pub fn grid_to_global_geodetic(grid: GridCoordinate) -> Result<GeodeticCoordinate, ZoneError> {
    let local = grid_to_local_geodetic(grid)?;
    Ok(local_geodetic_to_global_geodetic(local))
}

/// WGS84 geodetic → KKJ grid, rounded to whole meters.
pub fn global_geodetic_to_grid(geo: GeodeticCoordinate) -> Result<GridCoordinate, ZoneError> {
    let local = global_geodetic_to_local_geodetic(geo);
    Ok(local_geodetic_to_grid(local)?.rounded())
}

/// KKJ grid → KKJ geodetic, zone from the easting.
pub fn grid_to_local_geodetic(grid: GridCoordinate) -> Result<GeodeticCoordinate, ZoneError> {
    invert(grid)
}

/// KKJ grid → KKJ geodetic against an explicit zone (e.g. `Zone::UNIFORM`).
pub fn grid_to_local_geodetic_in_zone(grid: GridCoordinate, zone: Zone) -> GeodeticCoordinate {
    invert_in_zone(grid, zone)
}

/// KKJ geodetic → KKJ grid, zone from the longitude. Not rounded.
pub fn local_geodetic_to_grid(geo: GeodeticCoordinate) -> Result<GridCoordinate, ZoneError> {
    let zone = Zone::from_longitude(geo.longitude)?;
    Ok(project(geo, zone))
}

/// KKJ geodetic → KKJ grid of an explicit zone. Not rounded.
pub fn local_geodetic_to_grid_in_zone(geo: GeodeticCoordinate, zone: Zone) -> GridCoordinate {
    project(geo, zone)
}

/// KKJ geodetic → WGS84 geodetic.
pub fn local_geodetic_to_global_geodetic(geo: GeodeticCoordinate) -> GeodeticCoordinate {
    KKJ_TO_WGS84.apply(geo)
}

/// WGS84 geodetic → KKJ geodetic.
pub fn global_geodetic_to_local_geodetic(geo: GeodeticCoordinate) -> GeodeticCoordinate {
    WGS84_TO_KKJ.apply(geo)
}
