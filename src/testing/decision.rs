//! Accept/reject decision feedback.
//!
//! After seeing the test results, the learner decides whether to accept or reject the
//! null hypothesis. Their call is judged against the computed p-value at the chosen
//! confidence level: with confidence α, the significance threshold is 1 − α, and
//! rejecting is the right call exactly when p falls below it.

use crate::error::ParameterError;
use crate::testing::Decision;

/// Lowest confidence level the tool's slider offers.
pub const MIN_CONFIDENCE: f64 = 0.80;
/// Highest confidence level the tool's slider offers.
pub const MAX_CONFIDENCE: f64 = 0.99;

/// Whether the learner's call agreed with the test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Correct => "Correct",
            Verdict::Incorrect => "Incorrect",
        }
    }
}

/// Feedback on one accept/reject decision.
#[derive(Debug, Clone)]
pub struct Conclusion {
    pub verdict: Verdict,
    pub p_value: f64,
    pub confidence: f64,
}

impl Conclusion {
    /// The significance threshold implied by the confidence level.
    pub fn significance_threshold(&self) -> f64 {
        1.0 - self.confidence
    }

    /// The explanation sentence shown next to the verdict, e.g. "0.013 is less than
    /// 0.05, so we reject the null hypothesis at the 95% confidence level".
    pub fn explanation(&self) -> String {
        let threshold = self.significance_threshold();
        if self.p_value < threshold {
            format!(
                "{:.3} is less than {:.2}, so we reject the null hypothesis at the {:.0}% confidence level",
                self.p_value,
                threshold,
                self.confidence * 100.0
            )
        } else {
            format!(
                "{:.3} is greater than {:.2}, so we accept the null hypothesis at the {:.0}% confidence level",
                self.p_value,
                threshold,
                self.confidence * 100.0
            )
        }
    }
}

/// Judge an accept/reject decision against a computed p-value.
///
/// Pure function of `(p_value, confidence, decision)`: rejecting is correct when
/// `p_value < 1 − confidence`, accepting is correct otherwise.
///
/// # Errors
///
/// Out-of-range p-values and confidence levels are rejected. Neither is reachable
/// through the UI's fixed controls, but the core does not rely on that.
pub fn judge_decision(
    p_value: f64,
    confidence: f64,
    decision: Decision,
) -> anyhow::Result<Conclusion> {
    if !(0.0..=1.0).contains(&p_value) {
        return Err(ParameterError::PValueOutOfRange(p_value).into());
    }
    if !(MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&confidence) {
        return Err(ParameterError::ConfidenceOutOfRange(confidence).into());
    }

    let should_reject = p_value < 1.0 - confidence;
    let verdict = match decision {
        Decision::Reject if should_reject => Verdict::Correct,
        Decision::Accept if !should_reject => Verdict::Correct,
        _ => Verdict::Incorrect,
    };

    Ok(Conclusion {
        verdict,
        p_value,
        confidence,
    })
}
