//! Prediction request types
//!
//! A [`PredictionRequest`] is the typed form of one submission: three
//! categorical fields, two emission-factor magnitudes, and five data-quality
//! scores. It is created when a form is submitted and discarded once the
//! response is rendered; nothing here is persisted.

pub mod categories;

pub use categories::{SourceCategory, Substance, Unit};

use crate::error::PredictionError;
use serde::{Deserialize, Serialize};

/// One emission-factor prediction request
///
/// Field ranges follow the form widgets: magnitudes are non-negative, the
/// five DQ scores are confidence metrics in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Greenhouse gas the factor describes
    pub substance: Substance,

    /// Unit the factor is expressed in
    pub unit: Unit,

    /// Whether the factor was derived from commodity or industry data
    pub source: SourceCategory,

    /// Emission factor without margins (non-negative)
    pub supply_wo_margin: f64,

    /// Supply-chain margin adjustment (non-negative)
    pub margin: f64,

    /// DQ reliability score in [0, 1]
    pub dq_reliability: f64,

    /// DQ temporal correlation score in [0, 1]
    pub dq_temporal: f64,

    /// DQ geographical correlation score in [0, 1]
    pub dq_geo: f64,

    /// DQ technological correlation score in [0, 1]
    pub dq_tech: f64,

    /// DQ data collection score in [0, 1]
    pub dq_data: f64,
}

impl PredictionRequest {
    /// Check that every numeric field is finite and within its declared range
    ///
    /// # Errors
    ///
    /// Returns `PredictionError::InvalidInput` naming the first offending
    /// field. Categorical fields need no checking here: the enums make
    /// out-of-set values unrepresentable.
    pub fn validate(&self) -> Result<(), PredictionError> {
        check_non_negative("supply_wo_margin", self.supply_wo_margin)?;
        check_non_negative("margin", self.margin)?;
        for (name, value) in self.dq_scores() {
            check_unit_interval(name, value)?;
        }
        Ok(())
    }

    /// The five DQ scores with their field names, in schema order
    pub fn dq_scores(&self) -> [(&'static str, f64); 5] {
        [
            ("dq_reliability", self.dq_reliability),
            ("dq_temporal", self.dq_temporal),
            ("dq_geo", self.dq_geo),
            ("dq_tech", self.dq_tech),
            ("dq_data", self.dq_data),
        ]
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<(), PredictionError> {
    if !value.is_finite() {
        return Err(PredictionError::InvalidInput(format!(
            "{} must be finite, got {}",
            field, value
        )));
    }
    if value < 0.0 {
        return Err(PredictionError::InvalidInput(format!(
            "{} must be non-negative, got {}",
            field, value
        )));
    }
    Ok(())
}

fn check_unit_interval(field: &str, value: f64) -> Result<(), PredictionError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(PredictionError::InvalidInput(format!(
            "{} must be in [0, 1], got {}",
            field, value
        )));
    }
    Ok(())
}
