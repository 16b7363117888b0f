//! Parametric two-sample tests.
//!
//! Implements the independent two-sample t-test in both its Student's (pooled variance)
//! and Welch's (unequal variance) forms, with one-sided and two-sided alternatives. The
//! test is a pure function: deterministic for fixed inputs, no side effects.

use num_traits::Float;
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::ParameterError;
use crate::testing::{Alternative, TTestType, TestResult};

/// Perform a t-test comparing two samples.
///
/// # Arguments
///
/// * `x` - First sample
/// * `y` - Second sample
/// * `test_type` - Type of t-test to perform (Student's or Welch's)
/// * `alternative` - Tail(s) contributing to the p-value
///
/// # Errors
///
/// Either sample having fewer than two observations is an error: a variance estimate
/// needs at least two points, and the teaching tool never produces such groups.
pub fn t_test<T>(
    x: &[T],
    y: &[T],
    test_type: TTestType,
    alternative: Alternative,
) -> anyhow::Result<TestResult>
where
    T: Float,
{
    if x.len() < 2 || y.len() < 2 {
        return Err(ParameterError::SampleTooSmall(x.len(), y.len()).into());
    }

    // Single-pass accumulation of the summary statistics the test needs.
    let mut sum_x = 0.0;
    let mut sum_sq_x = 0.0;
    for &val in x {
        let v = val.to_f64().unwrap();
        sum_x += v;
        sum_sq_x += v * v;
    }

    let mut sum_y = 0.0;
    let mut sum_sq_y = 0.0;
    for &val in y {
        let v = val.to_f64().unwrap();
        sum_y += v;
        sum_sq_y += v * v;
    }

    Ok(t_test_from_sums(
        sum_x,
        sum_sq_x,
        x.len() as f64,
        sum_y,
        sum_sq_y,
        y.len() as f64,
        test_type,
        alternative,
    ))
}

/// Perform a t-test using precomputed summary statistics.
///
/// Computes the test directly from sums, sums of squares and counts, so callers that
/// already accumulated these never need to materialize the samples again.
///
/// # Arguments
///
/// * `sum1`, `sum_sq1`, `n1` - Sum, sum of squares, and count for group 1
/// * `sum2`, `sum_sq2`, `n2` - Sum, sum of squares, and count for group 2
/// * `test_type` - Type of t-test to perform (Student's or Welch's)
/// * `alternative` - Tail(s) contributing to the p-value
pub fn t_test_from_sums(
    sum1: f64,
    sum_sq1: f64,
    n1: f64,
    sum2: f64,
    sum_sq2: f64,
    n2: f64,
    test_type: TTestType,
    alternative: Alternative,
) -> TestResult {
    // Quiet fallback for insufficient sample sizes on this unchecked path.
    if n1 < 2.0 || n2 < 2.0 {
        return TestResult {
            statistic: 0.0,
            p_value: 1.0,
            degrees_of_freedom: 0.0,
            mean1: sum1 / n1,
            mean2: sum2 / n2,
        };
    }

    let mean1 = sum1 / n1;
    let mean2 = sum2 / n2;

    // Variances via the computational formula.
    let var1 = (sum_sq1 - sum1 * sum1 / n1) / (n1 - 1.0);
    let var2 = (sum_sq2 - sum2 * sum2 / n2) / (n2 - 1.0);

    let mean_diff = mean1 - mean2;

    let (t_stat, df) = match test_type {
        TTestType::Student => {
            let pooled_var = ((n1 - 1.0) * var1 + (n2 - 1.0) * var2) / (n1 + n2 - 2.0);
            let std_err = (pooled_var * (1.0 / n1 + 1.0 / n2)).sqrt();
            (mean_diff / std_err, n1 + n2 - 2.0)
        }
        TTestType::Welch => {
            let term1 = var1 / n1;
            let term2 = var2 / n2;
            let combined_var = term1 + term2;
            let t = mean_diff / combined_var.sqrt();

            // Welch-Satterthwaite equation for degrees of freedom
            let df = combined_var * combined_var
                / (term1 * term1 / (n1 - 1.0) + term2 * term2 / (n2 - 1.0));
            (t, df)
        }
    };

    TestResult {
        statistic: t_stat,
        p_value: p_value_for(t_stat, df, alternative),
        degrees_of_freedom: df,
        mean1,
        mean2,
    }
}

/// p-value of a t-statistic under the chosen alternative.
///
/// `Less` takes the lower tail, `Greater` the upper, `TwoSided` both. Always in [0, 1],
/// including for non-finite statistics (perfect group separation gives an infinite
/// t-statistic and a p-value of 0 in the supporting tail).
fn p_value_for(t_stat: f64, df: f64, alternative: Alternative) -> f64 {
    if t_stat.is_nan() || df <= 0.0 || !df.is_finite() {
        return 1.0;
    }

    if t_stat.is_infinite() {
        return match alternative {
            Alternative::TwoSided => 0.0,
            Alternative::Less => {
                if t_stat < 0.0 {
                    0.0
                } else {
                    1.0
                }
            }
            Alternative::Greater => {
                if t_stat > 0.0 {
                    0.0
                } else {
                    1.0
                }
            }
        };
    }

    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => match alternative {
            Alternative::TwoSided => 2.0 * (1.0 - dist.cdf(t_stat.abs())),
            Alternative::Less => dist.cdf(t_stat),
            Alternative::Greater => 1.0 - dist.cdf(t_stat),
        },
        Err(_) => 1.0,
    }
}
