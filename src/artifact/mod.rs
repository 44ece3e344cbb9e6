//! Fitted artifacts
//!
//! Loading and inference for the two pre-built objects the pipeline
//! consumes:
//! - The fitted scaler (per-feature shift/scale from training time)
//! - The fitted regression model (coefficients + intercept)
//!
//! Both are JSON documents produced by the training export alongside the
//! schema tables in [`crate::encoding::schema`]. They are loaded once per
//! process, validated against the compiled schema, and never mutated; the
//! resulting [`Artifacts`] context is safe to share read-only across
//! threads.

pub mod model;
pub mod scaler;

pub use model::LinearModel;
pub use scaler::StandardScaler;

use crate::config::EngineConfig;
use crate::error::PredictionError;
use serde::de::DeserializeOwned;
use std::path::Path;

/// The read-only artifact context the pipeline runs against
///
/// Constructed explicitly at startup with [`Artifacts::load`] and passed by
/// reference into [`predict_factor`](crate::predict_factor), rather than
/// held as process-global state.
#[derive(Debug, Clone)]
pub struct Artifacts {
    /// Fitted standardization transform
    pub scaler: StandardScaler,

    /// Fitted regression estimator
    pub model: LinearModel,
}

impl Artifacts {
    /// Load and validate both artifacts
    ///
    /// Each artifact is checked against the compiled feature schema, and the
    /// pair is checked for agreement with each other. Any failure is fatal
    /// for serving.
    ///
    /// # Errors
    ///
    /// `ArtifactLoad` when a file cannot be read or parsed,
    /// `SchemaMismatch` when an artifact disagrees with the compiled schema
    /// or the two artifacts disagree with each other.
    pub fn load(config: &EngineConfig) -> Result<Self, PredictionError> {
        let scaler = StandardScaler::from_path(&config.scaler_path)?;
        let model = LinearModel::from_path(&config.model_path)?;

        if scaler.schema_version != model.schema_version {
            return Err(PredictionError::SchemaMismatch(format!(
                "scaler is schema v{}, model is schema v{}",
                scaler.schema_version, model.schema_version
            )));
        }
        if scaler.feature_names != model.feature_names {
            return Err(PredictionError::SchemaMismatch(
                "scaler and model were fitted on different feature columns".to_string(),
            ));
        }

        log::info!(
            "Artifacts loaded: scaler + {} (schema v{}, {} features)",
            model.estimator,
            model.schema_version,
            model.coefficients.len()
        );
        Ok(Self { scaler, model })
    }
}

/// Read and parse one JSON artifact document
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, PredictionError> {
    log::debug!("Loading artifact from {}", path.display());
    let bytes = std::fs::read(path).map_err(|e| {
        PredictionError::ArtifactLoad(format!("{}: {}", path.display(), e))
    })?;
    serde_json::from_slice(&bytes).map_err(|e| {
        PredictionError::ArtifactLoad(format!("{}: {}", path.display(), e))
    })
}
