//! Reproducible coordinate samples inside Finland.
//!
//! Used by benches, tests and the CLI residual report. Each draw is keyed by a
//! `(seed, index)` replay token so any single point can be regenerated without
//! replaying the stream before it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::convert::{
    global_geodetic_to_local_geodetic, grid_to_local_geodetic, local_geodetic_to_global_geodetic,
    local_geodetic_to_grid,
};
use crate::coord::GeodeticCoordinate;
use crate::zone::ZoneError;

/// Latitude range of drawn points, degrees.
pub const LATITUDE_RANGE: (f64, f64) = (59.5, 70.0);
/// Longitude range of drawn points, degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (19.5, 31.5);

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Uniform KKJ geodetic point in the sampling box.
pub fn draw_local_geodetic(tok: ReplayToken) -> GeodeticCoordinate {
    let mut rng = tok.to_std_rng();
    let la = rng.gen_range(LATITUDE_RANGE.0..LATITUDE_RANGE.1);
    let lo = rng.gen_range(LONGITUDE_RANGE.0..LONGITUDE_RANGE.1);
    GeodeticCoordinate::new(la, lo)
}

/// Worst observed errors over a batch of samples, degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Residuals {
    pub samples: u64,
    /// max |grid_to_local(local_to_grid(g)) - g|
    pub grid_roundtrip: f64,
    /// max |global_to_local(local_to_global(g)) - g|
    pub datum_roundtrip: f64,
}

/// Measure round-trip residuals over `samples` draws from `seed`.
pub fn residuals(seed: u64, samples: u64) -> Result<Residuals, ZoneError> {
    let mut out = Residuals {
        samples,
        ..Residuals::default()
    };
    for index in 0..samples {
        let g = draw_local_geodetic(ReplayToken { seed, index });
        let back = grid_to_local_geodetic(local_geodetic_to_grid(g)?)?;
        out.grid_roundtrip = out.grid_roundtrip.max(back.max_abs_diff(&g));
        let back = global_geodetic_to_local_geodetic(local_geodetic_to_global_geodetic(g));
        out.datum_roundtrip = out.datum_roundtrip.max(back.max_abs_diff(&g));
    }
    Ok(out)
}
