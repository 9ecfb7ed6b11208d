use serde::{Deserialize, Serialize};

/// Classical (osculating) Keplerian orbital elements.
///
/// Angles are in degrees, the semi-major axis in kilometers. The anomaly
/// is carried for record completeness; the secular rate formulas do not
/// depend on it (nor on RAAN or argument of perigee).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitalElements {
    /// Semi-major axis (km)
    pub semi_major_axis_km: f64,
    /// Eccentricity (dimensionless, 0 ≤ e < 1)
    pub eccentricity: f64,
    /// Inclination (deg, 0–180)
    pub inclination_deg: f64,
    /// Right ascension of ascending node (deg)
    pub raan_deg: f64,
    /// Argument of perigee (deg)
    pub arg_perigee_deg: f64,
    /// Mean anomaly (deg)
    pub mean_anomaly_deg: f64,
}

impl OrbitalElements {
    pub fn new(
        semi_major_axis_km: f64,
        eccentricity: f64,
        inclination_deg: f64,
        raan_deg: f64,
        arg_perigee_deg: f64,
        mean_anomaly_deg: f64,
    ) -> Self {
        Self {
            semi_major_axis_km,
            eccentricity,
            inclination_deg,
            raan_deg,
            arg_perigee_deg,
            mean_anomaly_deg,
        }
    }
}
