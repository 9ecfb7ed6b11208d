pub const MU_EARTH: f64 = 3.986004418e14; // Earth's gravitational parameter (m³/s²)
pub const R_EARTH: f64 = 6378137.0; // Earth's equatorial radius, WGS84 (m)
pub const J2: f64 = 1.08263e-3; // Second zonal harmonic coefficient
pub const J3: f64 = -2.532e-6; // Third zonal harmonic coefficient

// Unit conversions
pub const DEG_TO_RAD: f64 = PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / PI;
pub const SECONDS_PER_DAY: f64 = 86400.0;
pub const SECONDS_PER_YEAR: f64 = 365.25 * 24.0 * 3600.0;
pub const DAYS_PER_YEAR: f64 = 365.25;

// Math
pub const PI: f64 = std::f64::consts::PI;
