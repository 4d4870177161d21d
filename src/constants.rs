// ---------------------------------------------------------------------------
// Earth constants (km based)
// ---------------------------------------------------------------------------

pub const MU_EARTH: f64 = 398_600.0; // gravitational parameter, km^3/s^2
pub const R_EARTH: f64 = 6_378.0;    // equatorial radius, km

// ---------------------------------------------------------------------------
// Display geometry
// ---------------------------------------------------------------------------

/// Length of reference axes and the angular-momentum arrow, km.
pub const DISPLAY_LENGTH: f64 = 2.0 * R_EARTH;

/// Number of outline samples.
pub const OUTLINE_SAMPLES: usize = 360;

/// Samples per 360 deg of true anomaly along the outline.
pub const OUTLINE_DENSITY: f64 = 100.0;

pub const DEFAULT_EARTH_RESOLUTION: usize = 10;
pub const MAX_EARTH_RESOLUTION: usize = 1_000;
