//! Investment appraisal calculations
//!
//! Pure functions over yearly benefit/cost series:
//! - Present value discounting
//! - NPV, benefit-cost ratio and SROI
//! - IRR via Newton-Raphson
//! - Interpolated payback period
//!
//! Nothing here holds state or performs I/O, so every function is safe to call
//! concurrently.

mod engine;
mod payback;
mod present_value;
mod ratios;
mod result;
pub mod irr;

pub use engine::{calculate, yearly_rows};
pub use irr::{calculate_irr, IRR_INITIAL_GUESS, IRR_MAX_ITERATIONS, IRR_TOLERANCE};
pub use payback::{calculate_payback, cumulative_flows};
pub use present_value::present_value;
pub use ratios::{benefit_cost_ratio, net_present_value, social_return_on_investment};
pub use result::{CalculationResult, YearlyRow};
