//! # ZonalRates
//!
//! Reference model for J2/J3 secular perturbation rates on classical
//! Keplerian orbital elements.
//!
//! Evaluates the closed-form first-order secular rates (nodal regression,
//! apsidal drift, and the J3 eccentricity and inclination drift) for a
//! single osculating element set, and drives that calculation over a
//! fixed battery of representative orbit regimes, emitting the results as
//! a JSON artifact that independent propagator implementations are
//! validated against.

pub mod constants;
pub mod models;
pub mod physics;
pub mod testvectors;
