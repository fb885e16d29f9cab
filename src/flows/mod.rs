//! Yearly benefit/cost flows and their loaders

mod data;
pub mod loader;

pub use data::{AppraisalCase, CalculationInput, YearlyFlow};
pub use loader::{load_cases, load_cases_from_reader, load_flows, load_flows_from_reader};
