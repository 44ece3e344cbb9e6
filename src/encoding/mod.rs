//! Feature encoding
//!
//! Maps a typed [`PredictionRequest`] to the fixed-order numeric vector the
//! fitted scaler and model expect. This is the one step with a hard
//! correctness contract: a wrong categorical code or a wrong column order
//! produces a plausible-looking but wrong prediction with no error, so the
//! column order and code tables live in one versioned place
//! ([`schema`]) and every artifact is checked against it at load time.
//!
//! No normalization happens here; that is the scaler's job.

pub mod schema;

use crate::request::PredictionRequest;

/// Encode a request into the model's feature vector
///
/// Pure and deterministic: same request, same vector. Categorical fields
/// become their ordinal codes from [`schema`]; continuous fields pass
/// through unchanged, ordered into the training column sequence.
///
/// # Returns
///
/// A vector of exactly [`schema::NUM_FEATURES`] values in
/// [`schema::FEATURE_COLUMNS`] order.
///
/// # Example
///
/// ```
/// use ghg_predictor::encoding::{encode, schema};
/// use ghg_predictor::request::{PredictionRequest, SourceCategory, Substance, Unit};
///
/// let request = PredictionRequest {
///     substance: Substance::Methane,
///     unit: Unit::KgPerUsd,
///     source: SourceCategory::Industry,
///     supply_wo_margin: 0.3,
///     margin: 0.02,
///     dq_reliability: 0.9,
///     dq_temporal: 0.8,
///     dq_geo: 0.7,
///     dq_tech: 0.6,
///     dq_data: 0.5,
/// };
///
/// let features = encode(&request);
/// assert_eq!(features.len(), schema::NUM_FEATURES);
/// assert_eq!(features[0], 1.0); // methane
/// ```
pub fn encode(request: &PredictionRequest) -> Vec<f64> {
    vec![
        schema::substance_code(request.substance),
        schema::unit_code(request.unit),
        request.supply_wo_margin,
        request.margin,
        request.dq_reliability,
        request.dq_temporal,
        request.dq_geo,
        request.dq_tech,
        request.dq_data,
        schema::source_code(request.source),
    ]
}
