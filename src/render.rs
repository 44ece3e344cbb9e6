//! Output rendering
//!
//! Formats the predicted scalar for display: four decimal places, fixed
//! unit label. Presentation only; no business logic.

use crate::prediction::Prediction;
use std::fmt;

/// Unit label attached to every displayed prediction
pub const UNIT_LABEL: &str = "kg CO2e/2018 USD";

/// Format a predicted factor for display
///
/// # Example
///
/// ```
/// use ghg_predictor::render::format_factor;
///
/// assert_eq!(format_factor(1.25), "1.2500 kg CO2e/2018 USD");
/// assert_eq!(format_factor(0.123456), "0.1235 kg CO2e/2018 USD");
/// ```
pub fn format_factor(value: f64) -> String {
    format!("{:.4} {}", value, UNIT_LABEL)
}

/// Rendered response block for one prediction
///
/// Displays the headline value plus the advisory notes that accompany every
/// result.
#[derive(Debug, Clone)]
pub struct PredictionReport<'a> {
    prediction: &'a Prediction,
}

impl<'a> PredictionReport<'a> {
    /// Build the report for a completed prediction
    pub fn new(prediction: &'a Prediction) -> Self {
        Self { prediction }
    }

    /// Headline line with the formatted value
    pub fn headline(&self) -> String {
        format!(
            "Predicted Supply Chain Emission Factor with Margin: {}",
            format_factor(self.prediction.factor_with_margin)
        )
    }
}

impl fmt::Display for PredictionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline())?;
        writeln!(f)?;
        writeln!(f, "This is a predictive result based on your inputs.")?;
        write!(
            f,
            "For verified emissions data, consult LCA databases or government portals."
        )
    }
}
