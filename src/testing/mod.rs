//! Statistical tests and decision feedback for two-sample comparisons.

use std::fmt;
use std::str::FromStr;

use crate::error::ParameterError;

pub mod decision;
pub mod parametric;

/// Which independent two-sample t-test to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TTestType {
    /// Pooled variance. The tool's default, matching the original app.
    Student,
    /// Unequal variances (Welch-Satterthwaite degrees of freedom).
    Welch,
}

/// The alternative hypothesis, selecting which tail(s) contribute to the p-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alternative {
    /// Mean difference ≠ 0.
    TwoSided,
    /// Mean of group 1 is less than the mean of group 2.
    Less,
    /// Mean of group 1 is greater than the mean of group 2.
    Greater,
}

impl Alternative {
    /// The alternative as seen from swapped samples: `Less` and `Greater` trade places,
    /// `TwoSided` is its own mirror.
    pub fn flip(self) -> Self {
        match self {
            Alternative::TwoSided => Alternative::TwoSided,
            Alternative::Less => Alternative::Greater,
            Alternative::Greater => Alternative::Less,
        }
    }

    /// The comparison symbol the UI uses for this alternative.
    pub fn symbol(self) -> &'static str {
        match self {
            Alternative::TwoSided => "!=",
            Alternative::Less => "<",
            Alternative::Greater => ">",
        }
    }
}

impl FromStr for Alternative {
    type Err = ParameterError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol {
            "!=" => Ok(Alternative::TwoSided),
            "<" => Ok(Alternative::Less),
            ">" => Ok(Alternative::Greater),
            other => Err(ParameterError::UnknownAlternative(other.to_string())),
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The learner's call on the null hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

impl FromStr for Decision {
    type Err = ParameterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "accept" => Ok(Decision::Accept),
            "reject" => Ok(Decision::Reject),
            other => Err(ParameterError::UnknownDecision(other.to_string())),
        }
    }
}

/// Outcome of one two-sample t-test.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// The t-statistic.
    pub statistic: f64,
    /// The p-value under the chosen alternative.
    pub p_value: f64,
    /// Degrees of freedom used for the reference distribution.
    pub degrees_of_freedom: f64,
    /// Arithmetic mean of the first sample.
    pub mean1: f64,
    /// Arithmetic mean of the second sample.
    pub mean2: f64,
}

impl TestResult {
    /// Difference in sample means (group 1 minus group 2).
    pub fn mean_difference(&self) -> f64 {
        self.mean1 - self.mean2
    }

    /// Check if the result is statistically significant at the given threshold.
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}
