use serde::{Deserialize, Serialize};

use crate::models::elements::OrbitalElements;

/// J2 secular rates in the published units (deg/day).
///
/// Field names are pinned to the cross-implementation exchange schema and
/// must not change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct J2Rates {
    /// Nodal regression rate (deg/day)
    #[serde(rename = "dOmega_dt_deg_per_day")]
    pub raan_rate_deg_per_day: f64,
    /// Argument-of-perigee drift rate (deg/day)
    #[serde(rename = "domega_dt_deg_per_day")]
    pub arg_perigee_rate_deg_per_day: f64,
}

/// J3 secular rates in the published units (per year / deg/year).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct J3Rates {
    /// Eccentricity drift rate (1/year)
    #[serde(rename = "de_dt_per_year")]
    pub eccentricity_rate_per_year: f64,
    /// Inclination drift rate (deg/year)
    #[serde(rename = "di_dt_deg_per_year")]
    pub inclination_rate_deg_per_year: f64,
    /// Nodal drift rate (deg/year)
    #[serde(rename = "dOmega_dt_deg_per_year")]
    pub raan_rate_deg_per_year: f64,
    /// Argument-of-perigee drift rate (deg/year)
    #[serde(rename = "domega_dt_deg_per_year")]
    pub arg_perigee_rate_deg_per_year: f64,
}

/// Published secular rate record: J2 rates in deg/day, J3 rates in
/// deg/year. The two groups intentionally use different time units; the
/// exchange schema is defined that way and downstream comparisons key on
/// the exact fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateResult {
    pub j2: J2Rates,
    pub j3: J3Rates,
}

/// One named pairing of input elements and the rates they produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub input: OrbitalElements,
    pub expected: RateResult,
}

/// Full secular rate set for a single perturbation source, in display
/// units. Terms a source does not perturb at first order are explicit
/// zeros so the sources sum field-wise.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerturbationRates {
    /// Semi-major axis decay rate (km/year)
    pub da_dt: f64,
    /// Eccentricity change rate (1/year)
    pub de_dt: f64,
    /// Inclination change rate (deg/year)
    pub di_dt: f64,
    /// RAAN drift rate (deg/year)
    pub d_raan_dt: f64,
    /// Argument of perigee drift rate (deg/year)
    pub d_arg_perigee_dt: f64,
    /// Mean anomaly rate (deg/day)
    pub dm_dt: f64,
}

// Rates below this magnitude are noise at display precision and are
// suppressed from the formatted output.
const DISPLAY_THRESHOLD: f64 = 1e-10;

impl PerturbationRates {
    /// One line per element rate, fixed precision, all six fields.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("da/dt: {:.3} km/year", self.da_dt),
            format!("de/dt: {:.2e} /year", self.de_dt),
            format!("di/dt: {:.4} deg/year", self.di_dt),
            format!("dΩ/dt: {:.2} deg/year", self.d_raan_dt),
            format!("dω/dt: {:.2} deg/year", self.d_arg_perigee_dt),
            format!("dM/dt: {:.3} deg/day", self.dm_dt),
        ]
    }

    /// Node and perigee drift formatted in deg/day, non-negligible
    /// entries only.
    pub fn node_perigee_lines_deg_per_day(&self) -> Vec<String> {
        let entries = [
            ("dΩ/dt", self.d_raan_dt),
            ("dω/dt", self.d_arg_perigee_dt),
        ];

        entries
            .iter()
            .filter(|(_, deg_per_year)| deg_per_year.abs() > DISPLAY_THRESHOLD)
            .map(|(label, deg_per_year)| {
                format!(
                    "{}: {:.2} deg/day",
                    label,
                    deg_per_year / crate::constants::DAYS_PER_YEAR
                )
            })
            .collect()
    }

    /// Eccentricity, inclination, node and perigee drift in per-year
    /// units, non-negligible entries only.
    pub fn drift_lines_per_year(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if self.de_dt.abs() > DISPLAY_THRESHOLD {
            lines.push(format!("de/dt: {:.2e} /year", self.de_dt));
        }
        if self.di_dt.abs() > DISPLAY_THRESHOLD {
            lines.push(format!("di/dt: {:.2} deg/year", self.di_dt));
        }
        if self.d_raan_dt.abs() > DISPLAY_THRESHOLD {
            lines.push(format!("dΩ/dt: {:.2} deg/year", self.d_raan_dt));
        }
        if self.d_arg_perigee_dt.abs() > DISPLAY_THRESHOLD {
            lines.push(format!("dω/dt: {:.2} deg/year", self.d_arg_perigee_dt));
        }

        lines
    }
}

impl std::ops::Add for PerturbationRates {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        PerturbationRates {
            da_dt: self.da_dt + other.da_dt,
            de_dt: self.de_dt + other.de_dt,
            di_dt: self.di_dt + other.di_dt,
            d_raan_dt: self.d_raan_dt + other.d_raan_dt,
            d_arg_perigee_dt: self.d_arg_perigee_dt + other.d_arg_perigee_dt,
            dm_dt: self.dm_dt + other.dm_dt,
        }
    }
}

/// Secular rates broken down by perturbation source, with the field-wise
/// total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateBreakdown {
    pub j2: PerturbationRates,
    pub j3: PerturbationRates,
    pub total: PerturbationRates,
}

impl RateBreakdown {
    pub fn new(j2: PerturbationRates, j3: PerturbationRates) -> Self {
        RateBreakdown {
            j2,
            j3,
            total: j2 + j3,
        }
    }
}
