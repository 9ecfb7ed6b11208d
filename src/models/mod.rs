pub mod elements;
pub mod rates;

pub use elements::OrbitalElements;
pub use rates::{J2Rates, J3Rates, PerturbationRates, RateBreakdown, RateResult, TestCase};
