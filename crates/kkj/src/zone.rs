//! KKJ projection zones.
//!
//! Six 3°-wide bands with central meridians 18°..33°E. Zone `k` adds
//! `k * 1_000_000` to the 500 km false easting, so the zone of a grid
//! coordinate is the millions digit of its easting.
//!
//! Zone 3 (27°E) doubles as the KKJ uniform coordinate system (YKJ).

use std::fmt;

use crate::cfg::{FALSE_EASTING, ZONE_EASTING_SPAN, ZONE_HALF_WIDTH_DEG};

/// Central meridians in degrees, indexed by zone number.
const CENTRAL_MERIDIANS: [f64; Zone::COUNT] = [18.0, 21.0, 24.0, 27.0, 30.0, 33.0];

/// One of the six KKJ zones; always in `0..=5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Zone(u8);

/// A coordinate that no zone claims.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoneError {
    /// Easting whose millions digit is outside `0..=5`.
    Easting(f64),
    /// Longitude farther than 1.5° from every central meridian (or NaN).
    Longitude(f64),
    /// Zone number outside `0..=5`.
    Number(i64),
}

impl fmt::Display for ZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneError::Easting(e) => write!(f, "easting {} is outside KKJ zones 0..=5", e),
            ZoneError::Longitude(lo) => write!(
                f,
                "longitude {} is not within {}° of any KKJ central meridian",
                lo, ZONE_HALF_WIDTH_DEG
            ),
            ZoneError::Number(n) => write!(f, "zone number {} is outside 0..=5", n),
        }
    }
}

impl std::error::Error for ZoneError {}

impl Zone {
    pub const COUNT: usize = 6;

    /// Uniform coordinate system (YKJ) zone.
    pub const UNIFORM: Zone = Zone(3);

    /// All zones, ascending.
    pub const ALL: [Zone; Zone::COUNT] = [Zone(0), Zone(1), Zone(2), Zone(3), Zone(4), Zone(5)];

    pub fn new(number: i64) -> Result<Self, ZoneError> {
        if (0..Self::COUNT as i64).contains(&number) {
            Ok(Zone(number as u8))
        } else {
            Err(ZoneError::Number(number))
        }
    }

    /// Zone from the millions digit of a grid easting (floor division).
    pub fn from_easting(easting: f64) -> Result<Self, ZoneError> {
        let k = (easting / ZONE_EASTING_SPAN).floor();
        // NaN fails both comparisons and lands here too.
        if !(0.0..=5.0).contains(&k) {
            return Err(ZoneError::Easting(easting));
        }
        Ok(Zone(k as u8))
    }

    /// Zone whose central meridian is within 1.5° of `longitude`.
    ///
    /// Scans 5 down to 0 and stops at the first hit, so on a shared boundary
    /// (e.g. 28.5°) the higher zone wins.
    pub fn from_longitude(longitude: f64) -> Result<Self, ZoneError> {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|z| (longitude - z.central_meridian()).abs() <= ZONE_HALF_WIDTH_DEG)
            .ok_or(ZoneError::Longitude(longitude))
    }

    #[inline]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Central meridian, degrees.
    #[inline]
    pub fn central_meridian(self) -> f64 {
        CENTRAL_MERIDIANS[self.0 as usize]
    }

    /// Easting of the central meridian, meters (`500_000 + zone * 1_000_000`).
    #[inline]
    pub fn false_easting(self) -> f64 {
        FALSE_EASTING + self.0 as f64 * ZONE_EASTING_SPAN
    }
}

impl TryFrom<i64> for Zone {
    type Error = ZoneError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Zone::new(value)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
