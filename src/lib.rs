//! # GHG Predictor
//!
//! A supply-chain greenhouse-gas emission factor prediction engine: collects
//! one emission-factor record (substance, unit, source, two magnitudes, five
//! data-quality scores), encodes it into the fitted feature schema, applies
//! the training-time standardization, and runs a fitted linear regression to
//! predict the factor with margin.
//!
//! ## Features
//!
//! - **Typed form surface**: field descriptors plus submission parsing, with
//!   out-of-set categorical values rejected at the boundary
//! - **Versioned feature schema**: column order and categorical code tables
//!   in one place, checked against every artifact at load time
//! - **Artifact inference**: fitted scaler and regression model consumed as
//!   immutable JSON documents, loaded once per process
//!
//! ## Quick Start
//!
//! ```no_run
//! use ghg_predictor::{predict_factor, Artifacts, EngineConfig, PredictionRequest};
//! use ghg_predictor::request::{SourceCategory, Substance, Unit};
//!
//! let artifacts = Artifacts::load(&EngineConfig::default())?;
//!
//! let request = PredictionRequest {
//!     substance: Substance::CarbonDioxide,
//!     unit: Unit::KgCo2ePerUsd,
//!     source: SourceCategory::Commodity,
//!     supply_wo_margin: 1.2,
//!     margin: 0.05,
//!     dq_reliability: 0.5,
//!     dq_temporal: 0.5,
//!     dq_geo: 0.5,
//!     dq_tech: 0.5,
//!     dq_data: 0.5,
//! };
//!
//! let prediction = predict_factor(&request, &artifacts)?;
//! println!("{:.4} kg CO2e/2018 USD", prediction.factor_with_margin);
//! # Ok::<(), ghg_predictor::PredictionError>(())
//! ```
//!
//! ## Architecture
//!
//! The pipeline follows this flow:
//!
//! ```text
//! Form Submission → Feature Encoding → Scaler.transform → Model.predict → Rendered Scalar
//! ```
//!
//! Everything after parsing is pure: the artifacts are loaded once and never
//! mutated, so an [`Artifacts`] context can be shared read-only across any
//! number of threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod artifact;
pub mod config;
pub mod encoding;
pub mod error;
pub mod form;
pub mod prediction;
pub mod render;
pub mod request;

// Re-export main types
pub use artifact::Artifacts;
pub use config::EngineConfig;
pub use error::PredictionError;
pub use prediction::{Prediction, PredictionMetadata};
pub use request::PredictionRequest;

use std::time::Instant;

/// Run the prediction pipeline for one request
///
/// Validates the request, encodes it into the fitted feature schema, applies
/// the training-time standardization, and evaluates the regression model.
///
/// # Arguments
///
/// * `request` - One typed form submission
/// * `artifacts` - The loaded scaler and model context
///
/// # Returns
///
/// A [`Prediction`] holding the factor-with-margin scalar and metadata.
///
/// # Errors
///
/// Returns [`PredictionError`] when a numeric field is out of range, the
/// encoded vector disagrees with an artifact, or the model produces a
/// non-finite value.
///
/// # Example
///
/// ```no_run
/// use ghg_predictor::{predict_factor, Artifacts, EngineConfig};
/// use ghg_predictor::form::parse_submission;
/// # let submission = std::collections::HashMap::new();
///
/// let artifacts = Artifacts::load(&EngineConfig::default())?;
/// let request = parse_submission(&submission)?;
/// let prediction = predict_factor(&request, &artifacts)?;
/// # Ok::<(), ghg_predictor::PredictionError>(())
/// ```
pub fn predict_factor(
    request: &PredictionRequest,
    artifacts: &Artifacts,
) -> Result<Prediction, PredictionError> {
    let start_time = Instant::now();

    log::debug!(
        "Predicting factor for {} / {} / {}",
        request.substance.label(),
        request.unit.label(),
        request.source.label()
    );

    request.validate()?;

    let features = encoding::encode(request);
    log::debug!("Encoded {} features", features.len());

    let scaled = artifacts.scaler.transform(&features)?;
    let factor_with_margin = artifacts.model.predict(&scaled)?;

    let processing_time_ms = start_time.elapsed().as_secs_f64() * 1000.0;
    log::debug!(
        "Predicted {:.4} in {:.3} ms",
        factor_with_margin,
        processing_time_ms
    );

    Ok(Prediction {
        factor_with_margin,
        metadata: PredictionMetadata {
            schema_version: encoding::schema::SCHEMA_VERSION,
            estimator: artifacts.model.estimator.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            processing_time_ms,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{LinearModel, StandardScaler};
    use crate::encoding::schema;
    use crate::request::{SourceCategory, Substance, Unit};

    fn test_artifacts() -> Artifacts {
        let feature_names: Vec<String> =
            schema::FEATURE_COLUMNS.iter().map(|s| s.to_string()).collect();
        Artifacts {
            scaler: StandardScaler {
                schema_version: schema::SCHEMA_VERSION,
                feature_names: feature_names.clone(),
                mean: vec![0.0; schema::NUM_FEATURES],
                scale: vec![1.0; schema::NUM_FEATURES],
            },
            model: LinearModel {
                schema_version: schema::SCHEMA_VERSION,
                estimator: "linear_regression".to_string(),
                feature_names,
                // Identity scaler + these weights makes the prediction
                // supply_wo_margin + margin exactly
                coefficients: vec![0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                intercept: 0.0,
            },
        }
    }

    fn sample_request() -> PredictionRequest {
        PredictionRequest {
            substance: Substance::CarbonDioxide,
            unit: Unit::KgCo2ePerUsd,
            source: SourceCategory::Commodity,
            supply_wo_margin: 1.2,
            margin: 0.05,
            dq_reliability: 0.5,
            dq_temporal: 0.5,
            dq_geo: 0.5,
            dq_tech: 0.5,
            dq_data: 0.5,
        }
    }

    #[test]
    fn test_pipeline_end_to_end() {
        let prediction = predict_factor(&sample_request(), &test_artifacts()).unwrap();
        assert!(prediction.factor_with_margin.is_finite());
        assert!((prediction.factor_with_margin - 1.25).abs() < 1e-12);
        assert_eq!(prediction.metadata.schema_version, schema::SCHEMA_VERSION);
        assert_eq!(prediction.metadata.estimator, "linear_regression");
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let artifacts = test_artifacts();
        let request = sample_request();
        let a = predict_factor(&request, &artifacts).unwrap();
        let b = predict_factor(&request, &artifacts).unwrap();
        assert_eq!(a.factor_with_margin, b.factor_with_margin);
    }

    #[test]
    fn test_pipeline_rejects_invalid_request() {
        let mut request = sample_request();
        request.dq_reliability = 2.0;
        assert!(matches!(
            predict_factor(&request, &test_artifacts()),
            Err(PredictionError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_artifacts_context_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Artifacts>();
    }
}
