pub mod battery;
pub mod errors;
pub mod generator;

pub use battery::{OrbitRegime, BATTERY};
pub use errors::ArtifactErrors;
pub use generator::{generate_battery, write_artifact};
