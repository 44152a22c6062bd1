use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a report run.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("No budget file at {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Invalid total line {0:?}")]
    InvalidTotal(String),

    #[error("Invalid tag line {0:?}")]
    InvalidTagLine(String),

    #[error("Invalid transaction line {0:?}")]
    InvalidTransactionLine(String),

    #[error("Invalid month {0:?}, expected YYYYMM")]
    InvalidMonth(String),

    #[error("Invalid month range {0:?}, expected YYYYMM-YYYYMM")]
    InvalidRange(String),

    #[error("No days remaining in {0}")]
    NoDaysRemaining(crate::calendar::YearMonth),
}
