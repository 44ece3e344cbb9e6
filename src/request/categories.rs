//! Categorical field enumerations
//!
//! The three categorical inputs carry exactly the category sets the model
//! was fitted on. Labels are the strings the form presents (and the training
//! data used); parsing anything else is an [`UnknownCategory`] error at the
//! form boundary, so out-of-set values never reach the encoder.
//!
//! [`UnknownCategory`]: crate::error::PredictionError::UnknownCategory

use serde::{Deserialize, Serialize};

/// Greenhouse gas substance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Substance {
    /// Carbon dioxide (CO2)
    #[serde(rename = "carbon dioxide")]
    CarbonDioxide,
    /// Methane (CH4)
    #[serde(rename = "methane")]
    Methane,
    /// Nitrous oxide (N2O)
    #[serde(rename = "nitrous oxide")]
    NitrousOxide,
    /// All other greenhouse gases, CO2-equivalent aggregated
    #[serde(rename = "other GHGs")]
    OtherGhgs,
}

impl Substance {
    /// All substances, in training-data enumeration order
    pub const ALL: [Substance; 4] = [
        Substance::CarbonDioxide,
        Substance::Methane,
        Substance::NitrousOxide,
        Substance::OtherGhgs,
    ];

    /// Form label for this substance
    pub fn label(&self) -> &'static str {
        match self {
            Substance::CarbonDioxide => "carbon dioxide",
            Substance::Methane => "methane",
            Substance::NitrousOxide => "nitrous oxide",
            Substance::OtherGhgs => "other GHGs",
        }
    }

    /// Resolve a form label, `None` if outside the trained set
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Unit the emission factor is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// kg of the substance per 2018 USD, purchaser price
    #[serde(rename = "kg/2018 USD, purchaser price")]
    KgPerUsd,
    /// kg CO2-equivalent per 2018 USD, purchaser price
    #[serde(rename = "kg CO2e/2018 USD, purchaser price")]
    KgCo2ePerUsd,
}

impl Unit {
    /// All units, in training-data enumeration order
    pub const ALL: [Unit; 2] = [Unit::KgPerUsd, Unit::KgCo2ePerUsd];

    /// Form label for this unit
    pub fn label(&self) -> &'static str {
        match self {
            Unit::KgPerUsd => "kg/2018 USD, purchaser price",
            Unit::KgCo2ePerUsd => "kg CO2e/2018 USD, purchaser price",
        }
    }

    /// Resolve a form label, `None` if outside the trained set
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.label() == label)
    }
}

/// Whether a factor is commodity- or industry-derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceCategory {
    /// Factor derived from commodity-level data
    Commodity,
    /// Factor derived from industry-level data
    Industry,
}

impl SourceCategory {
    /// All source categories, in training-data enumeration order
    pub const ALL: [SourceCategory; 2] = [SourceCategory::Commodity, SourceCategory::Industry];

    /// Form label for this source category
    pub fn label(&self) -> &'static str {
        match self {
            SourceCategory::Commodity => "Commodity",
            SourceCategory::Industry => "Industry",
        }
    }

    /// Resolve a form label, `None` if outside the trained set
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substance_label_roundtrip() {
        for substance in Substance::ALL {
            assert_eq!(Substance::from_label(substance.label()), Some(substance));
        }
    }

    #[test]
    fn test_unit_label_roundtrip() {
        for unit in Unit::ALL {
            assert_eq!(Unit::from_label(unit.label()), Some(unit));
        }
    }

    #[test]
    fn test_source_label_roundtrip() {
        for source in SourceCategory::ALL {
            assert_eq!(SourceCategory::from_label(source.label()), Some(source));
        }
    }

    #[test]
    fn test_unknown_labels_rejected() {
        assert_eq!(Substance::from_label("water vapour"), None);
        assert_eq!(Substance::from_label("Carbon Dioxide"), None); // labels are case-sensitive
        assert_eq!(Unit::from_label("kg/2020 USD, purchaser price"), None);
        assert_eq!(SourceCategory::from_label("commodity"), None);
    }
}
