//! Appraisal calculation entry point

use super::irr::calculate_irr;
use super::payback::{calculate_payback, cumulative_flows};
use super::present_value::present_value;
use super::ratios::{benefit_cost_ratio, net_present_value, social_return_on_investment};
use super::result::{CalculationResult, YearlyRow};
use crate::flows::CalculationInput;

/// Run the full appraisal for one input.
///
/// Flows are stable-sorted by year and discounted by their position in that
/// order, so a gap in the year labels does not add extra discount periods.
/// Never fails: ill-posed inputs produce 0, non-finite or absent values.
pub fn calculate(input: &CalculationInput) -> CalculationResult {
    let flows = input.sorted_flows();
    let rate = input.discount_rate;

    let benefits: Vec<f64> = flows.iter().map(|f| f.benefits).collect();
    let costs: Vec<f64> = flows.iter().map(|f| f.costs).collect();
    let net_flows: Vec<f64> = flows.iter().map(|f| f.net()).collect();

    let pv_benefits = present_value(&benefits, rate);
    let pv_costs = present_value(&costs, rate);

    let npv = net_present_value(pv_benefits, pv_costs);
    let bcr = benefit_cost_ratio(pv_benefits, pv_costs);
    let irr = calculate_irr(&net_flows);
    let sroi = social_return_on_investment(pv_benefits, pv_costs);
    let payback_years = calculate_payback(&net_flows);
    let cumulative_per_year = cumulative_flows(&net_flows);

    log::debug!(
        "Calculated {} years at rate {}: npv={:.4} bcr={:.4} irr={:?} payback={:?}",
        flows.len(),
        rate,
        npv,
        bcr,
        irr,
        payback_years
    );

    CalculationResult {
        npv,
        bcr,
        irr,
        sroi,
        payback_years,
        pv_benefits,
        pv_costs,
        net_per_year: net_flows,
        cumulative_per_year,
    }
}

/// Pair each sorted year label with its net and cumulative flow
pub fn yearly_rows(input: &CalculationInput, result: &CalculationResult) -> Vec<YearlyRow> {
    input
        .sorted_flows()
        .iter()
        .zip(result.net_per_year.iter().zip(&result.cumulative_per_year))
        .map(|(flow, (&net, &cumulative))| YearlyRow {
            year: flow.year,
            net,
            cumulative,
        })
        .collect()
}
