//! Appraisal Engine - investment appraisal metrics from yearly projections
//!
//! This library provides:
//! - Present value discounting of yearly benefit and cost streams
//! - Net present value, benefit-cost ratio and social return on investment
//! - Internal rate of return via Newton-Raphson
//! - Interpolated payback period on nominal cumulative net flow
//! - CSV/JSON loading and parallel batch evaluation

pub mod batch;
pub mod calculation;
pub mod config;
pub mod error;
pub mod flows;

// Re-export commonly used types
pub use batch::BatchRunner;
pub use calculation::{calculate, CalculationResult};
pub use config::RunConfig;
pub use error::AppraisalError;
pub use flows::{AppraisalCase, CalculationInput, YearlyFlow};
