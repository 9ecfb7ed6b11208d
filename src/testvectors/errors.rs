use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum ArtifactErrors {
    IoError(io::Error),
    SerializationError(serde_json::Error),
}

impl fmt::Display for ArtifactErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactErrors::IoError(e) => write!(f, "I/O error: {}", e),
            ArtifactErrors::SerializationError(e) => write!(f, "JSON serialization error: {}", e),
        }
    }
}

impl Error for ArtifactErrors {}

// Implement `From<T>` conversions for automatic error mapping
impl From<io::Error> for ArtifactErrors {
    fn from(err: io::Error) -> Self {
        ArtifactErrors::IoError(err)
    }
}

impl From<serde_json::Error> for ArtifactErrors {
    fn from(err: serde_json::Error) -> Self {
        ArtifactErrors::SerializationError(err)
    }
}
