//! Errors raised outside the pure calculation engine
//!
//! The engine itself never fails; these cover loading and caller-side validation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppraisalError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Year {year} appears more than once; flows must be de-duplicated")]
    DuplicateYear { year: i32 },

    #[error("Invalid {field} for year {year}: {value} (must be finite and non-negative)")]
    InvalidAmount {
        year: i32,
        field: &'static str,
        value: f64,
    },

    #[error("No flows found in input")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, AppraisalError>;
