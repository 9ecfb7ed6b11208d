use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use zonal_rates::physics::perturbations::SecularPerturbations;
use zonal_rates::testvectors::{generate_battery, write_artifact, BATTERY};

fn main() -> Result<(), Box<dyn Error>> {
    // Destination may be overridden as the first argument.
    let destination = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new("output").join("perturbation_test_data.json"));

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let cases = generate_battery(&BATTERY);
    write_artifact(&cases, &destination)?;

    println!(
        "Perturbation test data has been written to {}",
        destination.display()
    );
    println!("Generated {} test cases", cases.len());

    let first = &cases[0];
    println!("\nSample test case ({}):", first.name);
    println!("{}", serde_json::to_string_pretty(first)?);

    let breakdown = SecularPerturbations::breakdown(&first.input);
    println!("\nJ2 secular rates:");
    for line in breakdown.j2.node_perigee_lines_deg_per_day() {
        println!("  {}", line);
    }
    println!("J3 secular rates:");
    for line in breakdown.j3.drift_lines_per_year() {
        println!("  {}", line);
    }
    println!("Combined:");
    for line in breakdown.total.summary_lines() {
        println!("  {}", line);
    }

    Ok(())
}
