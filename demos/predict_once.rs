//! Example: run one prediction programmatically
//!
//! Loads the artifacts, builds a request in code, runs the pipeline, and
//! prints the rendered report.
//!
//! Usage: `predict_once [scaler.json model.json]`

use ghg_predictor::render::PredictionReport;
use ghg_predictor::request::{SourceCategory, Substance, Unit};
use ghg_predictor::{predict_factor, Artifacts, EngineConfig, PredictionRequest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match (args.next(), args.next()) {
        (Some(scaler), Some(model)) => EngineConfig::new(scaler, model),
        _ => EngineConfig::default(),
    };

    let artifacts = Artifacts::load(&config)?;

    let request = PredictionRequest {
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
    };

    let prediction = predict_factor(&request, &artifacts)?;

    println!("{}", PredictionReport::new(&prediction));
    println!();
    println!(
        "  (estimator: {}, schema v{}, {:.3} ms)",
        prediction.metadata.estimator,
        prediction.metadata.schema_version,
        prediction.metadata.processing_time_ms
    );

    Ok(())
}
