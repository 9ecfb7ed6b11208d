use crate::constants::{
    DAYS_PER_YEAR, DEG_TO_RAD, J2, J3, MU_EARTH, RAD_TO_DEG, R_EARTH, SECONDS_PER_DAY,
    SECONDS_PER_YEAR,
};
use crate::models::elements::OrbitalElements;
use crate::models::rates::{J2Rates, J3Rates, PerturbationRates, RateBreakdown, RateResult};

/// First-order secular rates in SI units (rad/s, 1/s), before conversion
/// to display or exchange units.
struct RawRates {
    j2_raan: f64,
    j2_arg_perigee: f64,
    j2_mean_anomaly: f64,
    j3_raan: f64,
    j3_arg_perigee: f64,
    j3_eccentricity: f64,
    j3_inclination: f64,
}

pub struct SecularPerturbations;

impl SecularPerturbations {
    /// Computes the J2 and J3 secular rates for one osculating element
    /// set, in the published exchange units: J2 node and perigee drift in
    /// deg/day, J3 drifts in deg/year with the eccentricity rate in
    /// 1/year.
    ///
    /// Inputs are taken as given: a non-positive semi-major axis or an
    /// eccentricity at or above 1 is not rejected and flows through the
    /// arithmetic, producing non-finite or physically meaningless rates.
    /// Callers validating orbits must do so beforehand.
    pub fn rates(elements: &OrbitalElements) -> RateResult {
        let raw = Self::raw_rates(elements);

        RateResult {
            j2: J2Rates {
                raan_rate_deg_per_day: raw.j2_raan * RAD_TO_DEG * SECONDS_PER_YEAR
                    / DAYS_PER_YEAR,
                arg_perigee_rate_deg_per_day: raw.j2_arg_perigee * RAD_TO_DEG * SECONDS_PER_YEAR
                    / DAYS_PER_YEAR,
            },
            j3: J3Rates {
                eccentricity_rate_per_year: raw.j3_eccentricity * SECONDS_PER_YEAR,
                inclination_rate_deg_per_year: raw.j3_inclination * RAD_TO_DEG * SECONDS_PER_YEAR,
                raan_rate_deg_per_year: raw.j3_raan * RAD_TO_DEG * SECONDS_PER_YEAR,
                arg_perigee_rate_deg_per_year: raw.j3_arg_perigee * RAD_TO_DEG * SECONDS_PER_YEAR,
            },
        }
    }

    /// Computes the same secular rates broken down by source, in uniform
    /// per-year units (mean anomaly in deg/day), with the field-wise
    /// total. Terms a source does not perturb at first order are explicit
    /// zeros: J2 leaves a, e, i untouched; J3 leaves a and the mean
    /// motion untouched.
    pub fn breakdown(elements: &OrbitalElements) -> RateBreakdown {
        let raw = Self::raw_rates(elements);

        let j2 = PerturbationRates {
            da_dt: 0.0,
            de_dt: 0.0,
            di_dt: 0.0,
            d_raan_dt: raw.j2_raan * RAD_TO_DEG * SECONDS_PER_YEAR,
            d_arg_perigee_dt: raw.j2_arg_perigee * RAD_TO_DEG * SECONDS_PER_YEAR,
            dm_dt: raw.j2_mean_anomaly * RAD_TO_DEG * SECONDS_PER_DAY,
        };

        let j3 = PerturbationRates {
            da_dt: 0.0,
            de_dt: raw.j3_eccentricity * SECONDS_PER_YEAR,
            di_dt: raw.j3_inclination * RAD_TO_DEG * SECONDS_PER_YEAR,
            d_raan_dt: raw.j3_raan * RAD_TO_DEG * SECONDS_PER_YEAR,
            d_arg_perigee_dt: raw.j3_arg_perigee * RAD_TO_DEG * SECONDS_PER_YEAR,
            dm_dt: 0.0,
        };

        RateBreakdown::new(j2, j3)
    }

    /// First-order secular rate formulas.
    ///
    ///   dΩ/dt|J2 = -k2 n cos i / (a² β)
    ///   dω/dt|J2 =  k2 n (2 - 2.5 sin²i) / (a² β)
    ///   dM/dt|J2 =  n + k2 n (1 - 3 sin²i) / (2 a² β)
    ///   dΩ/dt|J3 = -k3 n sin i / (a³ γ)
    ///   dω/dt|J3 =  k3 n (4 - 5 sin²i) sin i / (2 a³ γ)
    ///   de/dt|J3 =  k3 n (1.5 sin²i - 1) e / (a³ γ)
    ///   di/dt|J3 =  k3 n cos i / (2 a³ γ)
    ///
    /// with n = sqrt(μ/a³), β = (1-e²)², γ = (1-e²)³,
    /// k2 = 1.5 J2 R_e², k3 = 0.5 J3 R_e³.
    fn raw_rates(elements: &OrbitalElements) -> RawRates {
        let a = elements.semi_major_axis_km * 1000.0;
        let e = elements.eccentricity;
        let i = elements.inclination_deg * DEG_TO_RAD;

        // Mean motion (rad/s)
        let n = (MU_EARTH / a.powi(3)).sqrt();

        let beta = (1.0 - e * e).powi(2);
        let gamma = (1.0 - e * e).powi(3);
        let k2 = 1.5 * J2 * R_EARTH * R_EARTH;
        let k3 = 0.5 * J3 * R_EARTH.powi(3);

        let sin_i = i.sin();
        let cos_i = i.cos();
        let sin_i_sq = sin_i * sin_i;

        let a_sq = a * a;
        let a_cubed = a * a * a;

        RawRates {
            j2_raan: -k2 * n * cos_i / (a_sq * beta),
            j2_arg_perigee: k2 * n * (2.0 - 2.5 * sin_i_sq) / (a_sq * beta),
            j2_mean_anomaly: n + k2 * n * (1.0 - 3.0 * sin_i_sq) / (2.0 * a_sq * beta),
            j3_raan: -k3 * n * sin_i / (a_cubed * gamma),
            j3_arg_perigee: k3 * n * (4.0 - 5.0 * sin_i_sq) * sin_i / (2.0 * a_cubed * gamma),
            j3_eccentricity: k3 * n * (1.5 * sin_i_sq - 1.0) * e / (a_cubed * gamma),
            j3_inclination: k3 * n * cos_i / (2.0 * a_cubed * gamma),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use test_case::test_case;

    fn elements(a_km: f64, e: f64, i_deg: f64) -> OrbitalElements {
        OrbitalElements::new(a_km, e, i_deg, 0.0, 0.0, 0.0)
    }

    #[test_case(
        6778.137, 0.001, 51.6,
        -5.002347679308267, 3.7412959955880063;
        "LEO circular orbit"
    )]
    #[test_case(
        42164.0, 0.0002, 0.1,
        -0.013414278636485342, 0.026828495979626492;
        "GEO orbit"
    )]
    #[test_case(
        26600.0, 0.72, 63.4,
        -0.12985240290080297, 0.00035395171865494905;
        "Molniya orbit"
    )]
    #[test_case(
        7078.137, 0.001, 98.2,
        0.9870891882966879, -3.1083712317157355;
        "Sun-synchronous orbit"
    )]
    fn j2_rates(a_km: f64, e: f64, i_deg: f64, raan_rate: f64, arg_perigee_rate: f64) {
        let rates = SecularPerturbations::rates(&elements(a_km, e, i_deg));
        assert_relative_eq!(
            rates.j2.raan_rate_deg_per_day,
            raan_rate,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            rates.j2.arg_perigee_rate_deg_per_day,
            arg_perigee_rate,
            max_relative = 1e-12
        );
    }

    #[test_case(
        6778.137, 0.001, 51.6,
        2.9653152720074722e-6, -0.670162969410144, 1.6910704703266126, -0.7856060860980618;
        "LEO circular orbit"
    )]
    #[test_case(
        42164.0, 0.0002, 0.1,
        2.016870591686647e-9, -0.0002888963118478478, 1.0084393916835425e-6, -2.0168711036697456e-6;
        "GEO orbit"
    )]
    #[test_case(
        26600.0, 0.72, 63.4,
        -0.00010295102943603602, -0.009204460480768357, 0.03676176569156809, -4.4867803238677926e-5;
        "Molniya orbit"
    )]
    #[test_case(
        7078.137, 0.001, 98.2,
        -1.4550443154478567e-5, 0.12663516679979112, 1.75757435520438, 0.7894012838977063;
        "Sun-synchronous orbit"
    )]
    fn j3_rates(
        a_km: f64,
        e: f64,
        i_deg: f64,
        ecc_rate: f64,
        inc_rate: f64,
        raan_rate: f64,
        arg_perigee_rate: f64,
    ) {
        let rates = SecularPerturbations::rates(&elements(a_km, e, i_deg));
        assert_relative_eq!(
            rates.j3.eccentricity_rate_per_year,
            ecc_rate,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            rates.j3.inclination_rate_deg_per_year,
            inc_rate,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            rates.j3.raan_rate_deg_per_year,
            raan_rate,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            rates.j3.arg_perigee_rate_deg_per_year,
            arg_perigee_rate,
            max_relative = 1e-12
        );
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let el = elements(26600.0, 0.72, 63.4);
        assert_eq!(
            SecularPerturbations::rates(&el),
            SecularPerturbations::rates(&el)
        );
        assert_eq!(
            SecularPerturbations::breakdown(&el),
            SecularPerturbations::breakdown(&el)
        );
    }

    #[test]
    fn leo_node_regresses_a_few_degrees_per_day() {
        let rates = SecularPerturbations::rates(&elements(6778.137, 0.001, 51.6));
        let raan_rate = rates.j2.raan_rate_deg_per_day;
        assert!(raan_rate < 0.0);
        assert!(raan_rate.abs() > 4.0 && raan_rate.abs() < 5.5);
    }

    #[test]
    fn node_regression_weakens_with_inclination_and_flips_past_polar() {
        let magnitudes: Vec<f64> = [0.0, 15.0, 30.0, 45.0, 60.0, 75.0]
            .iter()
            .map(|&i_deg| {
                SecularPerturbations::rates(&elements(6778.137, 0.001, i_deg))
                    .j2
                    .raan_rate_deg_per_day
                    .abs()
            })
            .collect();
        assert!(magnitudes.windows(2).all(|pair| pair[0] > pair[1]));

        let polar = SecularPerturbations::rates(&elements(6778.137, 0.001, 90.0));
        assert_abs_diff_eq!(polar.j2.raan_rate_deg_per_day, 0.0, epsilon = 1e-10);

        let retrograde = SecularPerturbations::rates(&elements(6778.137, 0.001, 110.0));
        assert!(retrograde.j2.raan_rate_deg_per_day > 0.0);
    }

    #[test]
    fn circular_orbit_has_no_eccentricity_drift() {
        let rates = SecularPerturbations::rates(&elements(7000.0, 0.0, 51.6));
        assert_eq!(rates.j3.eccentricity_rate_per_year, 0.0);
    }

    #[test]
    fn breakdown_matches_published_rates() {
        let el = elements(6778.137, 0.001, 51.6);
        let rates = SecularPerturbations::rates(&el);
        let breakdown = SecularPerturbations::breakdown(&el);

        assert_relative_eq!(
            breakdown.j2.d_raan_dt / DAYS_PER_YEAR,
            rates.j2.raan_rate_deg_per_day,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            breakdown.j3.de_dt,
            rates.j3.eccentricity_rate_per_year,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            breakdown.j3.d_raan_dt,
            rates.j3.raan_rate_deg_per_year,
            max_relative = 1e-12
        );

        // J2 does not touch a, e, i at first order; J3 does not touch a
        // or the mean motion.
        assert_eq!(breakdown.j2.da_dt, 0.0);
        assert_eq!(breakdown.j2.de_dt, 0.0);
        assert_eq!(breakdown.j2.di_dt, 0.0);
        assert_eq!(breakdown.j3.da_dt, 0.0);
        assert_eq!(breakdown.j3.dm_dt, 0.0);
    }

    #[test]
    fn j2_mean_anomaly_rate_tracks_mean_motion() {
        let el = elements(6778.137, 0.001, 51.6);
        let breakdown = SecularPerturbations::breakdown(&el);

        // n alone for this orbit is ~5530 deg/day; the J2 correction
        // shifts it by well under one percent.
        let n_deg_per_day =
            (MU_EARTH / (el.semi_major_axis_km * 1000.0).powi(3)).sqrt() * RAD_TO_DEG
                * SECONDS_PER_DAY;
        assert!((breakdown.j2.dm_dt - n_deg_per_day).abs() / n_deg_per_day < 0.01);
    }
}
