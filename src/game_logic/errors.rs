use crate::galaxy::StarId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForedeckError {
    // Generation errors
    #[error("Star name pool exhausted: {requested} names requested, {available} available")]
    NamesExhausted { requested: usize, available: usize },

    #[error("Galaxy generation impossible: {reason}")]
    GenerationImpossible { reason: String },

    #[error("Star position ({x}, {y}) is outside the galaxy sectors")]
    OutOfBounds { x: f64, y: f64 },

    #[error("Unknown star: {id}")]
    UnknownStar { id: StarId },

    #[error("Star name already taken: {name}")]
    DuplicateStarName { name: String },

    #[error("Invalid galaxy configuration: {reason}")]
    InvalidConfig { reason: String },

    // Config-related errors
    #[error("Failed to get config directory")]
    ConfigDirNotFound,

    #[error("Failed to access file: {0}")]
    FileAccessFailed(#[from] std::io::Error),

    #[error("Failed to serialize config: {0}")]
    SerializationFailed(#[from] toml::ser::Error),

    #[error("Failed to deserialize config: {0}")]
    DeserializationFailed(#[from] toml::de::Error),

    #[error("Config file not found at path: {path}")]
    ConfigFileNotFound { path: PathBuf },
}

/// Result type alias for all operations
pub type ForedeckResult<T> = Result<T, ForedeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foredeck_error_display() {
        let err = ForedeckError::NamesExhausted {
            requested: 60,
            available: 12,
        };
        assert_eq!(
            err.to_string(),
            "Star name pool exhausted: 60 names requested, 12 available"
        );

        let err = ForedeckError::UnknownStar { id: StarId::from(7) };
        assert_eq!(err.to_string(), "Unknown star: 7");

        let err = ForedeckError::ConfigDirNotFound;
        assert_eq!(err.to_string(), "Failed to get config directory");
    }
}
