//! Form surface
//!
//! Descriptors for the ten input fields (labels, ranges, defaults, select
//! options) and parsing of a raw string-valued submission into a typed
//! [`PredictionRequest`]. This is the input collector: no computation
//! happens here, and categorical values outside the trained sets are
//! rejected before any artifact is touched.

use crate::error::PredictionError;
use crate::request::{PredictionRequest, SourceCategory, Substance, Unit};
use std::collections::HashMap;

/// Kind of widget a field renders as
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Fixed-choice dropdown
    Select {
        /// Labels of the selectable options, in display order
        options: &'static [&'static str],
    },
    /// Free numeric input with a lower bound
    Number {
        /// Minimum accepted value
        min: f64,
        /// Decimal places the widget displays
        decimals: usize,
    },
    /// Bounded slider
    Slider {
        /// Minimum accepted value
        min: f64,
        /// Maximum accepted value
        max: f64,
        /// Initial position
        default: f64,
    },
}

/// One form field: submission key, display label, widget kind
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Key the field is submitted under
    pub key: &'static str,
    /// Label shown next to the widget
    pub label: &'static str,
    /// Widget kind with its constraints
    pub kind: FieldKind,
}

const SUBSTANCE_OPTIONS: [&str; 4] = [
    "carbon dioxide",
    "methane",
    "nitrous oxide",
    "other GHGs",
];

const UNIT_OPTIONS: [&str; 2] = [
    "kg/2018 USD, purchaser price",
    "kg CO2e/2018 USD, purchaser price",
];

const SOURCE_OPTIONS: [&str; 2] = ["Commodity", "Industry"];

const DQ_SLIDER: FieldKind = FieldKind::Slider {
    min: 0.0,
    max: 1.0,
    default: 0.5,
};

/// The ten form fields, in display order
pub const FIELDS: [FieldDescriptor; 10] = [
    FieldDescriptor {
        key: "substance",
        label: "Substance",
        kind: FieldKind::Select { options: &SUBSTANCE_OPTIONS },
    },
    FieldDescriptor {
        key: "unit",
        label: "Unit",
        kind: FieldKind::Select { options: &UNIT_OPTIONS },
    },
    FieldDescriptor {
        key: "source",
        label: "Source",
        kind: FieldKind::Select { options: &SOURCE_OPTIONS },
    },
    FieldDescriptor {
        key: "supply_wo_margin",
        label: "Emission Factors (Without Margins)",
        kind: FieldKind::Number { min: 0.0, decimals: 4 },
    },
    FieldDescriptor {
        key: "margin",
        label: "Margins",
        kind: FieldKind::Number { min: 0.0, decimals: 4 },
    },
    FieldDescriptor {
        key: "dq_reliability",
        label: "DQ Reliability",
        kind: DQ_SLIDER,
    },
    FieldDescriptor {
        key: "dq_temporal",
        label: "DQ Temporal Correlation",
        kind: DQ_SLIDER,
    },
    FieldDescriptor {
        key: "dq_geo",
        label: "DQ Geographical Correlation",
        kind: DQ_SLIDER,
    },
    FieldDescriptor {
        key: "dq_tech",
        label: "DQ Technological Correlation",
        kind: DQ_SLIDER,
    },
    FieldDescriptor {
        key: "dq_data",
        label: "DQ Data Collection",
        kind: DQ_SLIDER,
    },
];

/// Parse a raw form submission into a typed request
///
/// Values are trimmed before parsing. Missing fields and malformed numerics
/// are `InvalidInput`; a categorical label outside the trained set is
/// `UnknownCategory`. Range checks are applied via
/// [`PredictionRequest::validate`] so a hand-built map gets the same
/// treatment as widget output.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use ghg_predictor::form::parse_submission;
///
/// let mut values = HashMap::new();
/// values.insert("substance".to_string(), "methane".to_string());
/// values.insert("unit".to_string(), "kg/2018 USD, purchaser price".to_string());
/// values.insert("source".to_string(), "Industry".to_string());
/// values.insert("supply_wo_margin".to_string(), "0.3".to_string());
/// values.insert("margin".to_string(), "0.02".to_string());
/// for dq in ["dq_reliability", "dq_temporal", "dq_geo", "dq_tech", "dq_data"] {
///     values.insert(dq.to_string(), "0.5".to_string());
/// }
///
/// let request = parse_submission(&values)?;
/// assert_eq!(request.margin, 0.02);
/// # Ok::<(), ghg_predictor::PredictionError>(())
/// ```
pub fn parse_submission(
    values: &HashMap<String, String>,
) -> Result<PredictionRequest, PredictionError> {
    let substance = raw_value(values, "substance")?;
    let substance =
        Substance::from_label(substance).ok_or_else(|| PredictionError::UnknownCategory {
            field: "substance",
            value: substance.to_string(),
        })?;

    let unit = raw_value(values, "unit")?;
    let unit = Unit::from_label(unit).ok_or_else(|| PredictionError::UnknownCategory {
        field: "unit",
        value: unit.to_string(),
    })?;

    let source = raw_value(values, "source")?;
    let source =
        SourceCategory::from_label(source).ok_or_else(|| PredictionError::UnknownCategory {
            field: "source",
            value: source.to_string(),
        })?;

    let request = PredictionRequest {
        substance,
        unit,
        source,
        supply_wo_margin: parse_number(values, "supply_wo_margin")?,
        margin: parse_number(values, "margin")?,
        dq_reliability: parse_number(values, "dq_reliability")?,
        dq_temporal: parse_number(values, "dq_temporal")?,
        dq_geo: parse_number(values, "dq_geo")?,
        dq_tech: parse_number(values, "dq_tech")?,
        dq_data: parse_number(values, "dq_data")?,
    };
    request.validate()?;
    Ok(request)
}

fn raw_value<'a>(
    values: &'a HashMap<String, String>,
    key: &'static str,
) -> Result<&'a str, PredictionError> {
    values
        .get(key)
        .map(|v| v.trim())
        .ok_or_else(|| PredictionError::InvalidInput(format!("missing field {}", key)))
}

fn parse_number(values: &HashMap<String, String>, key: &'static str) -> Result<f64, PredictionError> {
    let raw = raw_value(values, key)?;
    raw.parse::<f64>().map_err(|_| {
        PredictionError::InvalidInput(format!("{} is not a number: {:?}", key, raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_submission() -> HashMap<String, String> {
        let mut values = HashMap::new();
        values.insert("substance".to_string(), "carbon dioxide".to_string());
        values.insert(
            "unit".to_string(),
            "kg CO2e/2018 USD, purchaser price".to_string(),
        );
        values.insert("source".to_string(), "Commodity".to_string());
        values.insert("supply_wo_margin".to_string(), "1.2".to_string());
        values.insert("margin".to_string(), "0.05".to_string());
        for dq in ["dq_reliability", "dq_temporal", "dq_geo", "dq_tech", "dq_data"] {
            values.insert(dq.to_string(), "0.5".to_string());
        }
        values
    }

    #[test]
    fn test_parse_valid_submission() {
        let request = parse_submission(&sample_submission()).unwrap();
        assert_eq!(request.substance, Substance::CarbonDioxide);
        assert_eq!(request.unit, Unit::KgCo2ePerUsd);
        assert_eq!(request.source, SourceCategory::Commodity);
        assert_eq!(request.supply_wo_margin, 1.2);
        assert_eq!(request.margin, 0.05);
        assert_eq!(request.dq_temporal, 0.5);
    }

    #[test]
    fn test_values_are_trimmed() {
        let mut values = sample_submission();
        values.insert("substance".to_string(), "  methane ".to_string());
        values.insert("margin".to_string(), " 0.05 ".to_string());
        let request = parse_submission(&values).unwrap();
        assert_eq!(request.substance, Substance::Methane);
    }

    #[test]
    fn test_unknown_substance_rejected() {
        let mut values = sample_submission();
        values.insert("substance".to_string(), "sulfur hexafluoride".to_string());
        let err = parse_submission(&values).unwrap_err();
        assert!(
            matches!(err, PredictionError::UnknownCategory { field: "substance", .. }),
            "unexpected error: {}",
            err
        );
    }

    #[test]
    fn test_unknown_source_rejected() {
        let mut values = sample_submission();
        values.insert("source".to_string(), "Household".to_string());
        assert!(matches!(
            parse_submission(&values),
            Err(PredictionError::UnknownCategory { field: "source", .. })
        ));
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut values = sample_submission();
        values.remove("dq_geo");
        let err = parse_submission(&values).unwrap_err();
        assert!(err.to_string().contains("dq_geo"), "unexpected error: {}", err);
    }

    #[test]
    fn test_malformed_number_rejected() {
        let mut values = sample_submission();
        values.insert("supply_wo_margin".to_string(), "1,2".to_string());
        assert!(matches!(
            parse_submission(&values),
            Err(PredictionError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_out_of_range_dq_rejected() {
        let mut values = sample_submission();
        values.insert("dq_data".to_string(), "1.5".to_string());
        assert!(matches!(
            parse_submission(&values),
            Err(PredictionError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_field_descriptors_cover_all_request_fields() {
        let keys: Vec<&str> = FIELDS.iter().map(|f| f.key).collect();
        for key in [
            "substance",
            "unit",
            "source",
            "supply_wo_margin",
            "margin",
            "dq_reliability",
            "dq_temporal",
            "dq_geo",
            "dq_tech",
            "dq_data",
        ] {
            assert!(keys.contains(&key), "descriptor missing for {}", key);
        }
    }

    #[test]
    fn test_select_options_match_trained_sets() {
        assert_eq!(
            SUBSTANCE_OPTIONS.len(),
            Substance::ALL.len()
        );
        for (option, substance) in SUBSTANCE_OPTIONS.iter().zip(Substance::ALL) {
            assert_eq!(*option, substance.label());
        }
        for (option, unit) in UNIT_OPTIONS.iter().zip(Unit::ALL) {
            assert_eq!(*option, unit.label());
        }
        for (option, source) in SOURCE_OPTIONS.iter().zip(SourceCategory::ALL) {
            assert_eq!(*option, source.label());
        }
    }
}
