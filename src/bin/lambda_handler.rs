//! AWS Lambda handler for appraisal calculations
//!
//! Accepts yearly flows as JSON and returns the appraisal metrics. When the
//! request omits `discountRate`, the configured default is used
//! (see `RunConfig::from_env`).

use appraisal_engine::{calculate, CalculationInput, CalculationResult, RunConfig, YearlyFlow};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Input for a single appraisal
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppraisalRequest {
    pub flows: Vec<YearlyFlow>,

    /// Discount rate as a decimal; falls back to the configured default
    #[serde(default)]
    pub discount_rate: Option<f64>,

    /// Reject duplicate years and negative or non-finite amounts
    #[serde(default)]
    pub validate: bool,
}

/// Calculation result plus run metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppraisalResponse {
    #[serde(flatten)]
    pub result: CalculationResult,
    pub discount_rate: f64,
    pub execution_time_ms: u64,
}

fn build_response(request: AppraisalRequest, config: &RunConfig) -> Result<AppraisalResponse, Error> {
    let start = Instant::now();

    let discount_rate = request.discount_rate.unwrap_or(config.discount_rate);
    let input = CalculationInput::new(request.flows, discount_rate);

    if request.validate {
        input.validate()?;
    }

    let result = calculate(&input);

    Ok(AppraisalResponse {
        result,
        discount_rate,
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}

async fn handler(event: LambdaEvent<AppraisalRequest>) -> Result<AppraisalResponse, Error> {
    let config = RunConfig::from_env();
    log::info!(
        "Appraisal request {} with {} flows",
        event.context.request_id,
        event.payload.flows.len()
    );
    build_response(event.payload, &config)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
