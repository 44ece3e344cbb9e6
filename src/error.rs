//! Error types for the prediction engine

use std::fmt;

/// Errors that can occur while loading artifacts or serving a prediction
#[derive(Debug, Clone)]
pub enum PredictionError {
    /// Invalid input parameters (malformed or out-of-range numeric field)
    InvalidInput(String),

    /// Categorical input outside the trained encoding's known set
    UnknownCategory {
        /// Form field the value was submitted for
        field: &'static str,
        /// The offending raw value
        value: String,
    },

    /// Encoded vector shape disagrees with a fitted artifact
    SchemaMismatch(String),

    /// Model or scaler artifact could not be loaded at startup
    ArtifactLoad(String),

    /// Numerical error (non-finite intermediate or result)
    NumericalError(String),
}

impl fmt::Display for PredictionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictionError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PredictionError::UnknownCategory { field, value } => {
                write!(f, "Unknown category for {}: {:?}", field, value)
            }
            PredictionError::SchemaMismatch(msg) => write!(f, "Schema mismatch: {}", msg),
            PredictionError::ArtifactLoad(msg) => write!(f, "Artifact load failure: {}", msg),
            PredictionError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for PredictionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PredictionError::UnknownCategory {
            field: "substance",
            value: "water vapour".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown category for substance: \"water vapour\""
        );

        let err = PredictionError::ArtifactLoad("models/scaler.json: not found".to_string());
        assert!(err.to_string().starts_with("Artifact load failure"));
    }
}
