//! Print the Helsinki reference point in every frame, plus the classic
//! 60°N 25°E sample.
//!
//! Run: `cargo run -p kkj --example helsinki`

use kkj::prelude::*;

fn main() -> Result<(), ZoneError> {
    let wgs = GeodeticCoordinate::new(60.167777, 24.941658);
    let kkj = global_geodetic_to_local_geodetic(wgs);
    let grid = global_geodetic_to_grid(wgs)?;
    let ykj = local_geodetic_to_grid_in_zone(kkj, Zone::UNIFORM).rounded();

    println!("WGS84          lat={:.6} lon={:.6}", wgs.latitude, wgs.longitude);
    println!("KKJ geodetic   lat={:.6} lon={:.6}", kkj.latitude, kkj.longitude);
    println!("KKJ grid       N={} E={}", grid.northing, grid.easting);
    println!("YKJ (zone 3)   N={} E={}", ykj.northing, ykj.easting);

    let back = grid_to_global_geodetic(grid)?;
    println!("grid -> WGS84  lat={:.6} lon={:.6}", back.latitude, back.longitude);

    let sample = global_geodetic_to_grid(GeodeticCoordinate::new(60.0, 25.0))?;
    println!("60N 25E        N={} E={}", sample.northing, sample.easting);
    let sample = grid_to_global_geodetic(GridCoordinate::new(6_654_634.0, 2_555_976.0))?;
    println!(
        "6654634/2555976 lat={:.6} lon={:.6}",
        sample.latitude, sample.longitude
    );
    Ok(())
}
