//! Internal Rate of Return (IRR) calculation
//!
//! Newton-Raphson on the yearly net flows. The starting guess, iteration cap
//! and tolerance decide which awkward flow patterns converge, so they are
//! fixed constants rather than tunables.

/// Starting rate for the Newton-Raphson iteration (10%)
pub const IRR_INITIAL_GUESS: f64 = 0.10;

/// Maximum number of Newton-Raphson steps
pub const IRR_MAX_ITERATIONS: usize = 100;

/// Convergence threshold on the absolute NPV residual
pub const IRR_TOLERANCE: f64 = 1e-7;

/// Calculate the IRR of a series of yearly net flows.
///
/// # Arguments
/// * `net_flows` - Nominal net flow per year (index = elapsed years)
///
/// # Returns
/// * `Option<f64>` - Rate as a decimal (e.g., 0.05 for 5%), or None when no
///   solution is found: all-zero flows, a flat derivative, a step to a
///   non-finite rate or one at or below -100%, or no convergence within
///   `IRR_MAX_ITERATIONS`.
pub fn calculate_irr(net_flows: &[f64]) -> Option<f64> {
    match newton_irr(net_flows, IRR_MAX_ITERATIONS) {
        IrrOutcome::Converged { rate, iterations } => {
            log::trace!("IRR converged to {} after {} iterations", rate, iterations);
            Some(rate)
        }
        IrrOutcome::AllZero => {
            log::trace!("IRR: all net flows are zero");
            None
        }
        IrrOutcome::FlatDerivative { iterations } => {
            log::debug!("IRR: flat derivative at iteration {}", iterations);
            None
        }
        IrrOutcome::Diverged { iterations } => {
            log::debug!("IRR: step left the valid rate range at iteration {}", iterations);
            None
        }
        IrrOutcome::NotConverged { iterations } => {
            log::debug!("IRR: no convergence within {} iterations", iterations);
            None
        }
    }
}

/// How the Newton-Raphson search ended
#[derive(Debug, Clone, Copy, PartialEq)]
enum IrrOutcome {
    Converged { rate: f64, iterations: usize },
    AllZero,
    FlatDerivative { iterations: usize },
    Diverged { iterations: usize },
    NotConverged { iterations: usize },
}

fn newton_irr(net_flows: &[f64], max_iterations: usize) -> IrrOutcome {
    // Also covers the empty series
    if net_flows.iter().all(|&cf| cf == 0.0) {
        return IrrOutcome::AllZero;
    }

    let mut rate = IRR_INITIAL_GUESS;

    for iteration in 0..max_iterations {
        let (npv, dnpv) = npv_and_derivative(net_flows, rate);

        if npv.abs() < IRR_TOLERANCE {
            return IrrOutcome::Converged { rate, iterations: iteration };
        }

        if dnpv == 0.0 {
            return IrrOutcome::FlatDerivative { iterations: iteration };
        }

        let new_rate = rate - npv / dnpv;

        if !new_rate.is_finite() || new_rate <= -1.0 {
            return IrrOutcome::Diverged { iterations: iteration };
        }

        rate = new_rate;
    }

    IrrOutcome::NotConverged { iterations: max_iterations }
}

/// Calculate NPV and its derivative with respect to rate
fn npv_and_derivative(net_flows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut dnpv = 0.0;

    for (t, &cf) in net_flows.iter().enumerate() {
        let t = t as f64;
        npv += cf / (1.0 + rate).powf(t);
        if t > 0.0 {
            dnpv -= t * cf / (1.0 + rate).powf(t + 1.0);
        }
    }

    (npv, dnpv)
}
