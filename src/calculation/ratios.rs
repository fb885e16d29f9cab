//! NPV, benefit-cost ratio and social return on investment

/// Net present value from discounted benefits and costs
pub fn net_present_value(pv_benefits: f64, pv_costs: f64) -> f64 {
    pv_benefits - pv_costs
}

/// Benefit-cost ratio; 0 when discounted costs are exactly zero
pub fn benefit_cost_ratio(pv_benefits: f64, pv_costs: f64) -> f64 {
    if pv_costs != 0.0 {
        pv_benefits / pv_costs
    } else {
        0.0
    }
}

/// SROI: NPV per unit of discounted cost; 0 when discounted costs are exactly zero
pub fn social_return_on_investment(pv_benefits: f64, pv_costs: f64) -> f64 {
    if pv_costs != 0.0 {
        (pv_benefits - pv_costs) / pv_costs
    } else {
        0.0
    }
}
