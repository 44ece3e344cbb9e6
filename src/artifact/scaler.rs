//! Fitted standardization transform
//!
//! The scaler artifact carries the per-feature shift and scale fitted at
//! training time. `transform` applies `(x - mean) / scale` per column and
//! nothing else; it never refits.

use crate::encoding::schema;
use crate::error::PredictionError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fitted per-feature standardization parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Schema version the scaler was fitted against
    pub schema_version: u32,

    /// Column names, in fit order
    pub feature_names: Vec<String>,

    /// Per-feature shift (training mean)
    pub mean: Vec<f64>,

    /// Per-feature divisor (training standard deviation)
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Load a scaler artifact and validate it against the compiled schema
    ///
    /// # Errors
    ///
    /// `ArtifactLoad` when the file cannot be read, parsed, or carries
    /// malformed parameters; `SchemaMismatch` when the artifact disagrees
    /// with the compiled feature schema.
    pub fn from_path(path: &Path) -> Result<Self, PredictionError> {
        let scaler: StandardScaler = super::read_json(path)?;
        scaler.validate()?;
        log::debug!(
            "Scaler loaded from {} ({} features, schema v{})",
            path.display(),
            scaler.mean.len(),
            scaler.schema_version
        );
        Ok(scaler)
    }

    fn validate(&self) -> Result<(), PredictionError> {
        if self.schema_version != schema::SCHEMA_VERSION {
            return Err(PredictionError::SchemaMismatch(format!(
                "scaler is schema v{}, this engine implements v{}",
                self.schema_version,
                schema::SCHEMA_VERSION
            )));
        }
        schema::check_columns(&self.feature_names)
            .map_err(|msg| PredictionError::SchemaMismatch(format!("scaler: {}", msg)))?;
        if self.mean.len() != self.feature_names.len() || self.scale.len() != self.feature_names.len() {
            return Err(PredictionError::ArtifactLoad(format!(
                "scaler parameter lengths disagree: {} names, {} means, {} scales",
                self.feature_names.len(),
                self.mean.len(),
                self.scale.len()
            )));
        }
        for (i, &s) in self.scale.iter().enumerate() {
            if !s.is_finite() || s <= 0.0 {
                return Err(PredictionError::ArtifactLoad(format!(
                    "scaler scale[{}] must be finite and positive, got {}",
                    i, s
                )));
            }
        }
        if self.mean.iter().any(|m| !m.is_finite()) {
            return Err(PredictionError::ArtifactLoad(
                "scaler mean contains a non-finite value".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of features the scaler was fitted on
    pub fn num_features(&self) -> usize {
        self.mean.len()
    }

    /// Apply the fitted standardization to an encoded feature vector
    ///
    /// Pure and deterministic: the fitted parameters are immutable, so the
    /// same input always yields the same output.
    ///
    /// # Errors
    ///
    /// `SchemaMismatch` when the input length disagrees with the fitted
    /// width.
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, PredictionError> {
        if features.len() != self.num_features() {
            return Err(PredictionError::SchemaMismatch(format!(
                "encoded vector has {} features, scaler was fitted on {}",
                features.len(),
                self.num_features()
            )));
        }
        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(&x, (&m, &s))| (x - m) / s)
            .collect())
    }
}
