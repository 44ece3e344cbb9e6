//! Configuration for the prediction engine

use std::path::PathBuf;

/// Engine configuration
///
/// Holds the locations of the two fitted artifacts. There is no other
/// configuration surface: everything else the pipeline does is fixed by the
/// artifacts and the compiled feature schema.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Path to the fitted scaler artifact (default: `models/scaler.json`)
    pub scaler_path: PathBuf,

    /// Path to the fitted regression model artifact (default: `models/lr_model.json`)
    pub model_path: PathBuf,
}

impl EngineConfig {
    /// Create a configuration from explicit artifact paths
    pub fn new(scaler_path: impl Into<PathBuf>, model_path: impl Into<PathBuf>) -> Self {
        Self {
            scaler_path: scaler_path.into(),
            model_path: model_path.into(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scaler_path: PathBuf::from("models/scaler.json"),
            model_path: PathBuf::from("models/lr_model.json"),
        }
    }
}
