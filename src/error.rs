//! Typed errors surfaced by the dataset and testing layers.
//!
//! Public APIs return `anyhow::Result`; the variants here are attached as the error source
//! so callers that care (tests, the UI layer's error banner) can `downcast_ref` to them.

use thiserror::Error;

/// A grouping column did not split the dataset into exactly two non-empty groups.
///
/// The teaching tool assumes every selectable column is binary after missing-value
/// removal; anything else would previously have mis-indexed deep inside the computation,
/// so it is rejected up front instead.
#[derive(Debug, Clone, Error)]
#[error(
    "grouping column '{column}' yields {group_count} non-empty group(s) after dropping missing values, expected exactly 2"
)]
pub struct InvalidGroupingError {
    /// Name of the offending grouping column.
    pub column: String,
    /// Number of non-empty groups that survived missing-value removal.
    pub group_count: usize,
}

/// Errors arising while loading or querying the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset has no '{0}' outcome column")]
    MissingOutcomeColumn(&'static str),

    #[error("dataset has no grouping column named '{0}'")]
    UnknownColumn(String),

    #[error("line {line}: outcome value '{value}' is not numeric")]
    NonNumericOutcome { line: usize, value: String },

    #[error("dataset contains no data rows")]
    Empty,
}

/// Errors arising from user-supplied test parameters.
///
/// These are not reachable through the UI's fixed dropdowns and slider, but the core
/// validates them anyway rather than trusting the caller.
#[derive(Debug, Clone, Error)]
pub enum ParameterError {
    #[error("'{0}' is not an alternative hypothesis symbol (expected \"<\", \">\" or \"!=\")")]
    UnknownAlternative(String),

    #[error("'{0}' is not a decision (expected \"accept\" or \"reject\")")]
    UnknownDecision(String),

    #[error("confidence level {0} is outside the supported range [0.80, 0.99]")]
    ConfidenceOutOfRange(f64),

    #[error("p-value {0} is outside [0, 1]")]
    PValueOutOfRange(f64),

    #[error("each sample needs at least two observations, got {0} and {1}")]
    SampleTooSmall(usize, usize),
}
