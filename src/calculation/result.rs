//! Calculation output structures

use serde::{Deserialize, Serialize};

/// Complete appraisal result for one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Net present value
    pub npv: f64,

    /// Benefit-cost ratio (0 when discounted costs are zero)
    pub bcr: f64,

    /// Internal rate of return, None if no solution was found
    pub irr: Option<f64>,

    /// Social return on investment (0 when discounted costs are zero)
    pub sroi: f64,

    /// Fractional years to recover costs, None if never recovered
    pub payback_years: Option<f64>,

    /// Present value of benefits
    pub pv_benefits: f64,

    /// Present value of costs
    pub pv_costs: f64,

    /// Nominal net flow per year, in year order
    pub net_per_year: Vec<f64>,

    /// Running total of `net_per_year`
    pub cumulative_per_year: Vec<f64>,
}

impl CalculationResult {
    /// Number of projection years covered
    pub fn years(&self) -> usize {
        self.net_per_year.len()
    }

    /// Total undiscounted net flow over the horizon
    pub fn total_net(&self) -> f64 {
        self.cumulative_per_year.last().copied().unwrap_or(0.0)
    }
}

/// One row of per-year output, for tabular reporting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct YearlyRow {
    pub year: i32,
    pub net: f64,
    pub cumulative: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CalculationResult {
        CalculationResult {
            npv: 12.5,
            bcr: 1.2,
            irr: None,
            sroi: 0.2,
            payback_years: Some(2.5),
            pv_benefits: 75.0,
            pv_costs: 62.5,
            net_per_year: vec![-100.0, 40.0, 40.0, 40.0],
            cumulative_per_year: vec![-100.0, -60.0, -20.0, 20.0],
        }
    }

    #[test]
    fn test_summary_helpers() {
        let result = sample();
        assert_eq!(result.years(), 4);
        assert_eq!(result.total_net(), 20.0);

        let empty = CalculationResult {
            net_per_year: Vec::new(),
            cumulative_per_year: Vec::new(),
            ..sample()
        };
        assert_eq!(empty.years(), 0);
        assert_eq!(empty.total_net(), 0.0);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();

        for key in [
            "npv",
            "bcr",
            "irr",
            "sroi",
            "paybackYears",
            "pvBenefits",
            "pvCosts",
            "netPerYear",
            "cumulativePerYear",
        ] {
            assert!(obj.contains_key(key), "missing field {}", key);
        }
        assert_eq!(obj.len(), 9);
        assert!(json["irr"].is_null());
        assert_eq!(json["paybackYears"], 2.5);
    }
}
