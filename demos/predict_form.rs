//! Example: interactive prediction form
//!
//! Walks through the ten form fields on stdin, submits once, and prints the
//! rendered scalar. Empty input takes the field's default (first option for
//! dropdowns, 0 for magnitudes, 0.5 for DQ sliders).
//!
//! Usage: `predict_form [scaler.json model.json]`

use ghg_predictor::form::{parse_submission, FieldDescriptor, FieldKind, FIELDS};
use ghg_predictor::render::PredictionReport;
use ghg_predictor::{predict_factor, Artifacts, EngineConfig};
use std::collections::HashMap;
use std::io::{BufRead, Write};

fn prompt(field: &FieldDescriptor) -> String {
    match field.kind {
        FieldKind::Select { options } => {
            println!("{}:", field.label);
            for option in options {
                println!("  - {}", option);
            }
            format!("  [{}] > ", options[0])
        }
        FieldKind::Number { min, decimals } => {
            format!("{} (min {:.*}) [0] > ", field.label, decimals, min)
        }
        FieldKind::Slider { min, max, default } => {
            format!("{} ({:.1}-{:.1}) [{:.1}] > ", field.label, min, max, default)
        }
    }
}

fn default_value(field: &FieldDescriptor) -> String {
    match field.kind {
        FieldKind::Select { options } => options[0].to_string(),
        FieldKind::Number { .. } => "0".to_string(),
        FieldKind::Slider { default, .. } => default.to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match (args.next(), args.next()) {
        (Some(scaler), Some(model)) => EngineConfig::new(scaler, model),
        _ => EngineConfig::default(),
    };

    let artifacts = Artifacts::load(&config)?;

    println!("GHG Emission Predictor");
    println!("Estimate Supply Chain Emission Factors using DQ Metrics");
    println!();

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut submission: HashMap<String, String> = HashMap::new();

    for field in &FIELDS {
        print!("{}", prompt(field));
        std::io::stdout().flush()?;

        let entered = match lines.next() {
            Some(line) => line?,
            None => String::new(),
        };
        let value = if entered.trim().is_empty() {
            default_value(field)
        } else {
            entered
        };
        submission.insert(field.key.to_string(), value);
    }

    let request = parse_submission(&submission)?;
    let prediction = predict_factor(&request, &artifacts)?;

    println!();
    println!("{}", PredictionReport::new(&prediction));

    Ok(())
}
