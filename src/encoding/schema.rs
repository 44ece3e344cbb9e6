//! Versioned feature schema
//!
//! The single source of truth for the column order and the
//! categorical-to-numeric code tables the artifacts were fitted against.
//! Artifacts record the same version and column names; a regeneration that
//! changes either must bump [`SCHEMA_VERSION`], and stale pairings are
//! rejected at load time instead of silently corrupting predictions.

use crate::request::{SourceCategory, Substance, Unit};

/// Schema version the compiled code tables implement
pub const SCHEMA_VERSION: u32 = 1;

/// Number of features the fitted artifacts expect
pub const NUM_FEATURES: usize = 10;

/// Training-time column names, in model input order
///
/// These are the column headers of the training frame; `Source` comes last
/// because it was appended after the quality scores when the frame was built.
pub const FEATURE_COLUMNS: [&str; NUM_FEATURES] = [
    "Substance",
    "Unit",
    "Supply Chain Emission Factors without Margins",
    "Margins of Supply Chain Emission Factors",
    "DQ ReliabilityScore of Factors without Margins",
    "DQ TemporalCorrelation of Factors without Margins",
    "DQ GeographicalCorrelation of Factors without Margins",
    "DQ TechnologicalCorrelation of Factors without Margins",
    "DQ DataCollection of Factors without Margins",
    "Source",
];

/// Ordinal code for a substance (schema v1)
pub fn substance_code(substance: Substance) -> f64 {
    match substance {
        Substance::CarbonDioxide => 0.0,
        Substance::Methane => 1.0,
        Substance::NitrousOxide => 2.0,
        Substance::OtherGhgs => 3.0,
    }
}

/// Ordinal code for a unit (schema v1)
pub fn unit_code(unit: Unit) -> f64 {
    match unit {
        Unit::KgPerUsd => 0.0,
        Unit::KgCo2ePerUsd => 1.0,
    }
}

/// Ordinal code for a source category (schema v1)
pub fn source_code(source: SourceCategory) -> f64 {
    match source {
        SourceCategory::Commodity => 0.0,
        SourceCategory::Industry => 1.0,
    }
}

/// Check a set of artifact column names against the compiled schema
///
/// # Errors
///
/// Returns a description of the first disagreement (count or name), `Ok`
/// when the artifact matches column-for-column.
pub fn check_columns(names: &[String]) -> Result<(), String> {
    if names.len() != NUM_FEATURES {
        return Err(format!(
            "expected {} feature columns, artifact has {}",
            NUM_FEATURES,
            names.len()
        ));
    }
    for (i, (have, want)) in names.iter().zip(FEATURE_COLUMNS.iter()).enumerate() {
        if have != want {
            return Err(format!(
                "feature column {} is {:?}, expected {:?}",
                i, have, want
            ));
        }
    }
    Ok(())
}
