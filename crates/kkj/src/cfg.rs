//! Fixed numeric constants (internal).
//!
//! Policy
//! - These are part of the conversion's definition, not tuning knobs. Changing
//!   any of them changes the last bits of every grid → geodetic result and
//!   breaks comparisons against historical values.

/// Number of bisection steps in the grid inverter.
pub(crate) const INVERT_ITERATIONS: usize = 34;

/// Search box for the inverter, degrees: `(latitude, longitude)` corners.
pub(crate) const SEARCH_MIN_DEG: (f64, f64) = (59.0, 18.5);
pub(crate) const SEARCH_MAX_DEG: (f64, f64) = (70.5, 32.0);

/// Fraction of the span the lower bound moves up when the candidate undershoots.
pub(crate) const RAISE_LOWER: f64 = 0.45;
/// Fraction of the span (from the lower bound) the upper bound drops to otherwise.
pub(crate) const LOWER_UPPER: f64 = 0.55;

/// A longitude belongs to a zone within this many degrees of its meridian.
pub(crate) const ZONE_HALF_WIDTH_DEG: f64 = 1.5;

/// Easting span of one zone, meters.
pub(crate) const ZONE_EASTING_SPAN: f64 = 1_000_000.0;

/// False easting at each zone's central meridian, before the zone offset.
pub(crate) const FALSE_EASTING: f64 = 500_000.0;
