//! Batch runner for appraising many independent cases
//!
//! Each case is calculated on its own, so the batch is split across the rayon
//! thread pool. Results come back in input order.

use crate::calculation::{calculate, CalculationResult};
use crate::flows::AppraisalCase;
use rayon::prelude::*;

/// Parallel runner over a set of appraisal cases
///
/// # Example
/// ```ignore
/// let runner = BatchRunner::new(load_cases("cases.json")?);
/// for (case_id, result) in runner.run() {
///     println!("{}: npv={:.2}", case_id, result.npv);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    cases: Vec<AppraisalCase>,
}

impl BatchRunner {
    pub fn new(cases: Vec<AppraisalCase>) -> Self {
        Self { cases }
    }

    /// Add a case to the batch
    pub fn push(&mut self, case: AppraisalCase) {
        self.cases.push(case);
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn cases(&self) -> &[AppraisalCase] {
        &self.cases
    }

    /// Calculate every case, returning `(case_id, result)` in input order
    pub fn run(&self) -> Vec<(String, CalculationResult)> {
        log::info!("Appraising {} cases", self.cases.len());

        self.cases
            .par_iter()
            .map(|case| (case.case_id.clone(), calculate(&case.to_input())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::YearlyFlow;

    fn case(id: &str, net_year_one: f64, rate: f64) -> AppraisalCase {
        AppraisalCase {
            case_id: id.to_string(),
            flows: vec![
                YearlyFlow::new(2024, 0.0, 100.0),
                YearlyFlow::new(2025, net_year_one, 0.0),
            ],
            discount_rate: rate,
        }
    }

    #[test]
    fn test_batch_preserves_order_and_matches_single_runs() {
        let mut runner = BatchRunner::default();
        for i in 0..25 {
            runner.push(case(&format!("case-{}", i), 90.0 + i as f64, 0.03));
        }
        assert_eq!(runner.len(), 25);

        let results = runner.run();
        assert_eq!(results.len(), 25);

        for (i, (id, result)) in results.iter().enumerate() {
            assert_eq!(id, &format!("case-{}", i));
            assert_eq!(result, &calculate(&runner.cases()[i].to_input()));
        }

        // Higher year-one benefit gives higher NPV
        assert!(results[24].1.npv > results[0].1.npv);
    }

    #[test]
    fn test_cases_with_different_rates() {
        let runner = BatchRunner::new(vec![
            case("flat", 110.0, 0.0),
            case("mid", 110.0, 0.05),
            case("high", 110.0, 0.10),
        ]);

        let results = runner.run();
        // Higher discount rate lowers NPV for a cost-first project
        assert!(results[0].1.npv > results[1].1.npv);
        assert!(results[1].1.npv > results[2].1.npv);
    }

    #[test]
    fn test_empty_batch() {
        let runner = BatchRunner::new(Vec::new());
        assert!(runner.is_empty());
        assert!(runner.run().is_empty());
    }
}
