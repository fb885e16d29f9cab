//! Benefit/cost projection records fed to the calculation engine

use crate::error::{AppraisalError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Projected benefits and costs for one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyFlow {
    /// Year label (calendar year or offset). Only used for ordering.
    pub year: i32,

    /// Gross benefit realized in the year
    pub benefits: f64,

    /// Gross cost incurred in the year
    pub costs: f64,
}

impl YearlyFlow {
    pub fn new(year: i32, benefits: f64, costs: f64) -> Self {
        Self { year, benefits, costs }
    }

    /// Nominal net flow for the year (benefits - costs)
    pub fn net(&self) -> f64 {
        self.benefits - self.costs
    }
}

/// Input to a single appraisal calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    /// Yearly flows in any order; the engine sorts by year
    pub flows: Vec<YearlyFlow>,

    /// Periodic discount rate as a fraction (0.03 = 3%)
    pub discount_rate: f64,
}

impl CalculationInput {
    pub fn new(flows: Vec<YearlyFlow>, discount_rate: f64) -> Self {
        Self { flows, discount_rate }
    }

    /// Append a flow, builder style
    pub fn with_flow(mut self, year: i32, benefits: f64, costs: f64) -> Self {
        self.flows.push(YearlyFlow::new(year, benefits, costs));
        self
    }

    /// Flows stable-sorted ascending by year
    pub fn sorted_flows(&self) -> Vec<YearlyFlow> {
        let mut flows = self.flows.clone();
        flows.sort_by_key(|f| f.year);
        flows
    }

    /// Check the caller-side invariants: distinct years and finite,
    /// non-negative amounts.
    ///
    /// `calculate` never calls this. The discount rate is deliberately left
    /// unchecked so degenerate rates still flow through to the result.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.flows.len());

        for flow in &self.flows {
            if !seen.insert(flow.year) {
                return Err(AppraisalError::DuplicateYear { year: flow.year });
            }
            check_amount(flow.year, "benefits", flow.benefits)?;
            check_amount(flow.year, "costs", flow.costs)?;
        }

        Ok(())
    }
}

fn check_amount(year: i32, field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppraisalError::InvalidAmount { year, field, value })
    }
}

/// A named project to appraise, as supplied for batch runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppraisalCase {
    /// Caller's identifier for the case
    pub case_id: String,

    pub flows: Vec<YearlyFlow>,

    pub discount_rate: f64,
}

impl AppraisalCase {
    /// Engine input for this case
    pub fn to_input(&self) -> CalculationInput {
        CalculationInput::new(self.flows.clone(), self.discount_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_flows_orders_by_year() {
        let input = CalculationInput::new(Vec::new(), 0.03)
            .with_flow(2026, 30.0, 0.0)
            .with_flow(2024, 0.0, 100.0)
            .with_flow(2025, 50.0, 10.0);

        let years: Vec<i32> = input.sorted_flows().iter().map(|f| f.year).collect();
        assert_eq!(years, vec![2024, 2025, 2026]);
    }

    #[test]
    fn test_validate_rejects_duplicate_year() {
        let input = CalculationInput::new(Vec::new(), 0.03)
            .with_flow(2024, 10.0, 5.0)
            .with_flow(2024, 20.0, 5.0);

        match input.validate() {
            Err(AppraisalError::DuplicateYear { year }) => assert_eq!(year, 2024),
            other => panic!("expected duplicate year error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        let negative = CalculationInput::new(vec![YearlyFlow::new(1, -1.0, 0.0)], 0.0);
        assert!(matches!(
            negative.validate(),
            Err(AppraisalError::InvalidAmount { field: "benefits", .. })
        ));

        let nan = CalculationInput::new(vec![YearlyFlow::new(1, 0.0, f64::NAN)], 0.0);
        assert!(matches!(
            nan.validate(),
            Err(AppraisalError::InvalidAmount { field: "costs", .. })
        ));
    }

    #[test]
    fn test_validate_ignores_degenerate_rate() {
        let input = CalculationInput::new(vec![YearlyFlow::new(0, 10.0, 5.0)], -1.5);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_camel_case_field_names() {
        let input = CalculationInput::new(vec![YearlyFlow::new(2024, 100.0, 50.0)], 0.03);
        let json = serde_json::to_value(&input).unwrap();

        assert_eq!(json["discountRate"], 0.03);
        assert_eq!(json["flows"][0]["year"], 2024);
        assert_eq!(json["flows"][0]["benefits"], 100.0);
        assert_eq!(json["flows"][0]["costs"], 50.0);
    }
}
