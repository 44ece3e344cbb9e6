//! Fitted regression estimator
//!
//! The model artifact carries the coefficients and intercept of a linear
//! regression fitted at training time, stored feature-major in the same
//! column order as the scaler:
//!
//! ```text
//! prediction = intercept + Σ(scaled_feature[i] × coefficients[i])
//! ```
//!
//! No retraining and no online update; inference only.

use crate::encoding::schema;
use crate::error::PredictionError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fitted linear regression parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// Schema version the model was fitted against
    pub schema_version: u32,

    /// Estimator name recorded by the training export (e.g. "linear_regression")
    pub estimator: String,

    /// Column names, in fit order
    pub feature_names: Vec<String>,

    /// Per-feature coefficients
    pub coefficients: Vec<f64>,

    /// Intercept term
    pub intercept: f64,
}

impl LinearModel {
    /// Load a model artifact and validate it against the compiled schema
    ///
    /// # Errors
    ///
    /// `ArtifactLoad` when the file cannot be read, parsed, or carries
    /// malformed parameters; `SchemaMismatch` when the artifact disagrees
    /// with the compiled feature schema.
    pub fn from_path(path: &Path) -> Result<Self, PredictionError> {
        let model: LinearModel = super::read_json(path)?;
        model.validate()?;
        log::debug!(
            "Model {} loaded from {} ({} coefficients, schema v{})",
            model.estimator,
            path.display(),
            model.coefficients.len(),
            model.schema_version
        );
        Ok(model)
    }

    fn validate(&self) -> Result<(), PredictionError> {
        if self.schema_version != schema::SCHEMA_VERSION {
            return Err(PredictionError::SchemaMismatch(format!(
                "model is schema v{}, this engine implements v{}",
                self.schema_version,
                schema::SCHEMA_VERSION
            )));
        }
        schema::check_columns(&self.feature_names)
            .map_err(|msg| PredictionError::SchemaMismatch(format!("model: {}", msg)))?;
        if self.coefficients.len() != self.feature_names.len() {
            return Err(PredictionError::ArtifactLoad(format!(
                "model has {} coefficients for {} feature columns",
                self.coefficients.len(),
                self.feature_names.len()
            )));
        }
        if self.coefficients.iter().any(|c| !c.is_finite()) || !self.intercept.is_finite() {
            return Err(PredictionError::ArtifactLoad(
                "model parameters contain a non-finite value".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of features the model was fitted on
    pub fn num_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Predict one scalar from a scaled feature vector
    ///
    /// Deterministic for a fixed artifact.
    ///
    /// # Errors
    ///
    /// `SchemaMismatch` when the input length disagrees with the fitted
    /// width; `NumericalError` when the result is not finite.
    pub fn predict(&self, scaled: &[f64]) -> Result<f64, PredictionError> {
        if scaled.len() != self.num_features() {
            return Err(PredictionError::SchemaMismatch(format!(
                "scaled vector has {} features, model was fitted on {}",
                scaled.len(),
                self.num_features()
            )));
        }
        let value = self
            .coefficients
            .iter()
            .zip(scaled.iter())
            .fold(self.intercept, |acc, (&c, &x)| acc + c * x);
        if !value.is_finite() {
            return Err(PredictionError::NumericalError(format!(
                "model produced a non-finite prediction: {}",
                value
            )));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted_model() -> LinearModel {
        LinearModel {
            schema_version: schema::SCHEMA_VERSION,
            estimator: "linear_regression".to_string(),
            feature_names: schema::FEATURE_COLUMNS.iter().map(|s| s.to_string()).collect(),
            coefficients: vec![0.003, -0.001, 0.61, 0.095, -0.002, 0.0015, -0.0008, 0.0012, -0.0005, 0.004],
            intercept: 0.24,
        }
    }

    #[test]
    fn test_predict_is_dot_plus_intercept() {
        let model = fitted_model();
        let zeros = vec![0.0; schema::NUM_FEATURES];
        assert!((model.predict(&zeros).unwrap() - 0.24).abs() < 1e-12);

        let mut one_hot = zeros.clone();
        one_hot[2] = 2.0;
        assert!((model.predict(&one_hot).unwrap() - (0.24 + 2.0 * 0.61)).abs() < 1e-12);
    }

    #[test]
    fn test_predict_is_deterministic() {
        let model = fitted_model();
        let input = vec![0.5; schema::NUM_FEATURES];
        assert_eq!(model.predict(&input).unwrap(), model.predict(&input).unwrap());
    }

    #[test]
    fn test_predict_rejects_wrong_width() {
        let model = fitted_model();
        assert!(matches!(
            model.predict(&[0.0; 9]),
            Err(PredictionError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn test_predict_flags_non_finite_result() {
        let model = fitted_model();
        let mut input = vec![0.0; schema::NUM_FEATURES];
        input[2] = f64::INFINITY;
        assert!(matches!(
            model.predict(&input),
            Err(PredictionError::NumericalError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_coefficient_count_mismatch() {
        let mut model = fitted_model();
        model.coefficients.pop();
        assert!(matches!(
            model.validate(),
            Err(PredictionError::ArtifactLoad(_))
        ));
    }

    #[test]
    fn test_validate_rejects_nan_parameters() {
        let mut model = fitted_model();
        model.intercept = f64::NAN;
        assert!(matches!(
            model.validate(),
            Err(PredictionError::ArtifactLoad(_))
        ));
    }
}
