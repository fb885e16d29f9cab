//! Load yearly flows from CSV and appraisal cases from JSON

use super::{AppraisalCase, CalculationInput, YearlyFlow};
use crate::error::{AppraisalError, Result};
use csv::Reader;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Raw CSV row, one per projection year
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Benefits")]
    benefits: f64,
    #[serde(rename = "Costs")]
    costs: f64,
}

impl From<CsvRow> for YearlyFlow {
    fn from(row: CsvRow) -> Self {
        YearlyFlow::new(row.year, row.benefits, row.costs)
    }
}

/// Load flows from any reader producing `Year,Benefits,Costs` CSV
pub fn load_flows_from_reader<R: Read>(reader: R, discount_rate: f64) -> Result<CalculationInput> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut flows = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        flows.push(YearlyFlow::from(row));
    }

    if flows.is_empty() {
        return Err(AppraisalError::EmptyInput);
    }

    let input = CalculationInput::new(flows, discount_rate);
    input.validate()?;

    log::info!("Loaded {} yearly flows", input.flows.len());
    Ok(input)
}

/// Load flows from a CSV file
pub fn load_flows<P: AsRef<Path>>(path: P, discount_rate: f64) -> Result<CalculationInput> {
    let file = File::open(path.as_ref())?;
    load_flows_from_reader(BufReader::new(file), discount_rate)
}

/// Load a JSON array of appraisal cases from any reader
pub fn load_cases_from_reader<R: Read>(reader: R) -> Result<Vec<AppraisalCase>> {
    let cases: Vec<AppraisalCase> = serde_json::from_reader(reader)?;

    if cases.is_empty() {
        return Err(AppraisalError::EmptyInput);
    }

    for case in &cases {
        if let Err(e) = case.to_input().validate() {
            log::warn!("Rejecting case '{}': {}", case.case_id, e);
            return Err(e);
        }
    }

    log::info!("Loaded {} appraisal cases", cases.len());
    Ok(cases)
}

/// Load appraisal cases from a JSON file
pub fn load_cases<P: AsRef<Path>>(path: P) -> Result<Vec<AppraisalCase>> {
    let file = File::open(path.as_ref())?;
    load_cases_from_reader(BufReader::new(file))
}
