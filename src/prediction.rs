//! Prediction result types

use serde::{Deserialize, Serialize};

/// One completed prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted supply-chain emission factor with margin,
    /// in kg CO2e per 2018 USD (purchaser price)
    pub factor_with_margin: f64,

    /// Prediction metadata
    pub metadata: PredictionMetadata,
}

/// Metadata attached to every prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionMetadata {
    /// Feature schema version the pipeline ran against
    pub schema_version: u32,

    /// Estimator name recorded in the model artifact
    pub estimator: String,

    /// Engine version
    pub engine_version: String,

    /// Time spent in the pipeline, in milliseconds
    pub processing_time_ms: f64,
}

impl Default for PredictionMetadata {
    fn default() -> Self {
        Self {
            schema_version: crate::encoding::schema::SCHEMA_VERSION,
            estimator: String::new(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            processing_time_ms: 0.0,
        }
    }
}
