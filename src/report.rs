//! Request/response layer turning one user action into render-ready results.
//!
//! The original tool wired its widgets together through a reactive callback graph; here
//! each interaction is an explicit synchronous call instead. [`run_test`] answers the
//! "update results" action, and [`TestSummary::judge`] answers the later accept/reject
//! choice. The summary carries both the raw numbers and the display strings the UI
//! renders verbatim.

use crate::dataset::Dataset;
use crate::error::ParameterError;
use crate::testing::decision::{self, Conclusion, MAX_CONFIDENCE, MIN_CONFIDENCE};
use crate::testing::{Alternative, Decision, TTestType, TestResult, parametric};

/// One test run as requested by the user: which column to group by, which alternative
/// to test, and at what confidence level.
#[derive(Debug, Clone)]
pub struct TestRequest {
    pub grouping_column: String,
    pub alternative: Alternative,
    pub test_type: TTestType,
    pub confidence: f64,
}

impl TestRequest {
    /// Build a request with the app's default test type (Student's, pooled variance).
    pub fn new<S: Into<String>>(grouping_column: S, alternative: Alternative, confidence: f64) -> Self {
        TestRequest {
            grouping_column: grouping_column.into(),
            alternative,
            test_type: TTestType::Student,
            confidence,
        }
    }
}

/// Everything the UI needs to render after one test run.
#[derive(Debug, Clone)]
pub struct TestSummary {
    pub grouping_column: String,
    /// The two category labels, in first-seen dataset order.
    pub categories: [String; 2],
    pub alternative: Alternative,
    pub confidence: f64,
    pub result: TestResult,
}

impl TestSummary {
    pub fn p_value(&self) -> f64 {
        self.result.p_value
    }

    /// p-value as rendered in the results card, e.g. "0.013 (1.3%)".
    pub fn p_value_display(&self) -> String {
        format!("{:.3} ({:.1}%)", self.result.p_value, self.result.p_value * 100.0)
    }

    /// Confidence level as a whole percentage, e.g. "95%".
    pub fn confidence_display(&self) -> String {
        format!("{:.0}%", self.confidence * 100.0)
    }

    /// The two group means rendered to two decimals.
    pub fn mean_displays(&self) -> (String, String) {
        (
            format!("{:.2}", self.result.mean1),
            format!("{:.2}", self.result.mean2),
        )
    }

    /// Natural-language statement of the null hypothesis.
    pub fn null_hypothesis(&self) -> String {
        format!(
            "The mean total happiness score for {} = {} is equal to the mean total happiness score for {}",
            self.grouping_column, self.categories[0], self.categories[1]
        )
    }

    /// Natural-language statement of the alternative hypothesis the user selected.
    pub fn alternative_hypothesis(&self) -> String {
        match self.alternative {
            Alternative::Less => format!(
                "The mean for {} = {} is less than the mean for {}",
                self.grouping_column, self.categories[0], self.categories[1]
            ),
            Alternative::Greater => format!(
                "The mean for {} = {} is greater than the mean for {}",
                self.grouping_column, self.categories[0], self.categories[1]
            ),
            Alternative::TwoSided => format!(
                "The mean total happiness score for {} = {} is NOT equal to the mean total happiness score for {}",
                self.grouping_column, self.categories[0], self.categories[1]
            ),
        }
    }

    /// Judge the learner's later accept/reject call against this run's p-value.
    pub fn judge(&self, choice: Decision) -> anyhow::Result<Conclusion> {
        decision::judge_decision(self.result.p_value, self.confidence, choice)
    }
}

/// Run one two-sample test against the dataset.
///
/// Filters and partitions the outcome by the requested grouping column, then tests the
/// two samples under the requested alternative. One synchronous computation per call;
/// the dataset is only read.
pub fn run_test(dataset: &Dataset, request: &TestRequest) -> anyhow::Result<TestSummary> {
    if !(MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&request.confidence) {
        return Err(ParameterError::ConfidenceOutOfRange(request.confidence).into());
    }

    let groups = dataset.group_samples(&request.grouping_column)?;
    let result = parametric::t_test(
        &groups.sample1,
        &groups.sample2,
        request.test_type,
        request.alternative,
    )?;

    Ok(TestSummary {
        grouping_column: request.grouping_column.clone(),
        categories: groups.categories,
        alternative: request.alternative,
        confidence: request.confidence,
        result,
    })
}
