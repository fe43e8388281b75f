//! Typed errors for estimation and layout planning.

use thiserror::Error;

/// Errors raised by the token estimator and the layout planner.
///
/// None of these are retryable: planning is deterministic, so the same inputs
/// fail the same way every time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Raw sizing input is malformed or out of range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Grouping, overlap, reservation or ratio values that would make
    /// planning degenerate or undefined.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(
        "Context budget too small: {available} available tokens cannot be split into \
         {segments_per_worker} segments per worker"
    )]
    BudgetTooSmall { available: u64, segments_per_worker: usize },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
