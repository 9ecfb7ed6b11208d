use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::rates::TestCase;
use crate::physics::perturbations::SecularPerturbations;
use crate::testvectors::battery::OrbitRegime;
use crate::testvectors::errors::ArtifactErrors;

/// Runs every regime through the rate calculator, in order, pairing each
/// input with the rates it produces under the regime's name.
pub fn generate_battery(cases: &[OrbitRegime]) -> Vec<TestCase> {
    cases
        .iter()
        .map(|case| {
            let input = case.elements();
            TestCase {
                name: case.name.to_string(),
                input,
                expected: SecularPerturbations::rates(&input),
            }
        })
        .collect()
}

/// Serializes the battery as pretty-printed JSON and persists it: the
/// payload goes to a temporary sibling file first, then a rename moves it
/// over the destination, so a half-written artifact is never observable.
pub fn write_artifact(cases: &[TestCase], destination: &Path) -> Result<(), ArtifactErrors> {
    let json = serde_json::to_string_pretty(cases)?;

    let mut tmp_name = OsString::from(destination.as_os_str());
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    fs::write(&tmp, json)?;
    fs::rename(&tmp, destination)?;
    Ok(())
}
