use approx::assert_relative_eq;
use two_sample_statistics::error::ParameterError;
use two_sample_statistics::testing::decision::{Verdict, judge_decision};
use two_sample_statistics::testing::parametric::{t_test, t_test_from_sums};
use two_sample_statistics::testing::{Alternative, Decision, TTestType};

#[cfg(test)]
mod t_test_numerics {
    use super::*;

    #[test]
    fn clearly_different_groups_are_significant() {
        // Group 1: [1, 2, 3] -> mean=2, Group 2: [7, 8, 9] -> mean=8.
        // Both have unit variance, so t = -6 / sqrt(2/3) with df = 4.
        let result = t_test(
            &[1.0, 2.0, 3.0],
            &[7.0, 8.0, 9.0],
            TTestType::Student,
            Alternative::TwoSided,
        )
        .unwrap();

        assert_relative_eq!(result.statistic, -6.0 * (1.5f64).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(result.degrees_of_freedom, 4.0, epsilon = 1e-12);
        assert_relative_eq!(result.mean1, 2.0, epsilon = 1e-12);
        assert_relative_eq!(result.mean2, 8.0, epsilon = 1e-12);
        // Two-sided p for |t|=7.348, df=4 is about 0.0018.
        assert!(result.p_value > 0.001 && result.p_value < 0.003);
    }

    #[test]
    fn two_sided_p_matches_reference_library_value() {
        // [1, 2, 3] vs [7, 8, 9], Student, df=4: scipy.stats.ttest_ind gives
        // p = 0.0018262606682599714 for the two-sided alternative.
        let result = t_test(
            &[1.0, 2.0, 3.0],
            &[7.0, 8.0, 9.0],
            TTestType::Student,
            Alternative::TwoSided,
        )
        .unwrap();

        assert_relative_eq!(result.p_value, 0.0018262606682599714, epsilon = 1e-9);

        // The one-sided tail is half of it.
        let less = t_test(
            &[1.0, 2.0, 3.0],
            &[7.0, 8.0, 9.0],
            TTestType::Student,
            Alternative::Less,
        )
        .unwrap();
        assert_relative_eq!(less.p_value, 0.0018262606682599714 / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn mean_difference_is_group1_minus_group2() {
        let result = t_test(
            &[1.0, 2.0, 3.0],
            &[7.0, 8.0, 9.0],
            TTestType::Student,
            Alternative::TwoSided,
        )
        .unwrap();
        assert_relative_eq!(result.mean_difference(), -6.0, epsilon = 1e-12);
    }

    #[test]
    fn identical_groups_give_p_of_one() {
        let sample = [5.0, 6.0, 7.0, 8.0];
        let result = t_test(&sample, &sample, TTestType::Student, Alternative::TwoSided).unwrap();

        assert_relative_eq!(result.statistic, 0.0, epsilon = 1e-12);
        assert_relative_eq!(result.p_value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn welch_reduces_degrees_of_freedom_under_unequal_variance() {
        // Low-variance group vs high-variance group.
        let x = [5.0, 5.1, 4.9, 5.0, 5.1, 4.9];
        let y = [1.0, 9.0, 2.0, 8.0, 3.0, 7.0];

        let student = t_test(&x, &y, TTestType::Student, Alternative::TwoSided).unwrap();
        let welch = t_test(&x, &y, TTestType::Welch, Alternative::TwoSided).unwrap();

        assert_relative_eq!(student.degrees_of_freedom, 10.0, epsilon = 1e-12);
        assert!(welch.degrees_of_freedom < student.degrees_of_freedom);
        assert!((0.0..=1.0).contains(&welch.p_value));
    }

    #[test]
    fn one_sided_tails_sum_to_one() {
        let x = [12.0, 14.5, 13.0, 15.5, 16.0, 11.0];
        let y = [10.0, 12.5, 11.0, 9.5, 13.0, 10.5];

        for test_type in [TTestType::Student, TTestType::Welch] {
            let less = t_test(&x, &y, test_type, Alternative::Less).unwrap();
            let greater = t_test(&x, &y, test_type, Alternative::Greater).unwrap();
            assert_relative_eq!(less.p_value + greater.p_value, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn two_sided_doubles_the_smaller_tail() {
        let x = [12.0, 14.5, 13.0, 15.5, 16.0, 11.0];
        let y = [10.0, 12.5, 11.0, 9.5, 13.0, 10.5];

        let less = t_test(&x, &y, TTestType::Student, Alternative::Less).unwrap();
        let greater = t_test(&x, &y, TTestType::Student, Alternative::Greater).unwrap();
        let two_sided = t_test(&x, &y, TTestType::Student, Alternative::TwoSided).unwrap();

        assert_relative_eq!(
            two_sided.p_value,
            2.0 * less.p_value.min(greater.p_value),
            epsilon = 1e-12
        );
    }

    #[test]
    fn p_value_is_invariant_under_sample_swap_with_flipped_alternative() {
        let x = [3.1, 3.2, 3.0, 3.1, 3.0];
        let y = [2.9, 2.8, 3.0, 2.9, 3.0];

        for alternative in [Alternative::TwoSided, Alternative::Less, Alternative::Greater] {
            let forward = t_test(&x, &y, TTestType::Student, alternative).unwrap();
            let swapped = t_test(&y, &x, TTestType::Student, alternative.flip()).unwrap();
            assert_relative_eq!(forward.p_value, swapped.p_value, epsilon = 1e-12);
            assert_relative_eq!(forward.statistic, -swapped.statistic, epsilon = 1e-12);
        }
    }

    #[test]
    fn perfect_separation_gives_zero_p_in_the_supporting_tail() {
        // Zero within-group variance: infinite t-statistic.
        let x = [1.0, 1.0, 1.0];
        let y = [5.0, 5.0, 5.0];

        let two_sided = t_test(&x, &y, TTestType::Student, Alternative::TwoSided).unwrap();
        assert!(two_sided.statistic.is_infinite());
        assert_relative_eq!(two_sided.p_value, 0.0, epsilon = 1e-12);

        let less = t_test(&x, &y, TTestType::Student, Alternative::Less).unwrap();
        assert_relative_eq!(less.p_value, 0.0, epsilon = 1e-12);

        let greater = t_test(&x, &y, TTestType::Student, Alternative::Greater).unwrap();
        assert_relative_eq!(greater.p_value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn undersized_samples_are_rejected() {
        let err = t_test(&[1.0], &[2.0, 3.0], TTestType::Student, Alternative::TwoSided)
            .unwrap_err();
        assert!(err.downcast_ref::<ParameterError>().is_some());
    }

    #[test]
    fn sums_path_falls_back_quietly_on_undersized_groups() {
        let result = t_test_from_sums(
            5.0,
            25.0,
            1.0,
            12.0,
            74.0,
            2.0,
            TTestType::Student,
            Alternative::TwoSided,
        );
        assert_relative_eq!(result.statistic, 0.0, epsilon = 1e-12);
        assert_relative_eq!(result.p_value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn sums_path_matches_slice_path() {
        // [9, 10, 11, 10, 10] vs [1, 2, 3, 2, 2]
        let x = [9.0, 10.0, 11.0, 10.0, 10.0];
        let y = [1.0, 2.0, 3.0, 2.0, 2.0];

        let from_slices = t_test(&x, &y, TTestType::Welch, Alternative::Greater).unwrap();
        let from_sums = t_test_from_sums(
            50.0,
            502.0,
            5.0,
            10.0,
            22.0,
            5.0,
            TTestType::Welch,
            Alternative::Greater,
        );

        assert_relative_eq!(from_slices.statistic, from_sums.statistic, epsilon = 1e-12);
        assert_relative_eq!(from_slices.p_value, from_sums.p_value, epsilon = 1e-12);
        assert!(from_slices.p_value < 0.001);
    }
}

#[cfg(test)]
mod decision_feedback {
    use super::*;

    #[test]
    fn all_four_decision_cells() {
        // Threshold at 95% confidence is 0.05.
        let cases = [
            (0.02, Decision::Reject, Verdict::Correct),
            (0.02, Decision::Accept, Verdict::Incorrect),
            (0.40, Decision::Accept, Verdict::Correct),
            (0.40, Decision::Reject, Verdict::Incorrect),
        ];

        for (p, decision, expected) in cases {
            let conclusion = judge_decision(p, 0.95, decision).unwrap();
            assert_eq!(conclusion.verdict, expected, "p={p}, decision={decision:?}");
        }
    }

    #[test]
    fn p_equal_to_threshold_means_accept() {
        // The reject rule is a strict comparison, so p == 1 - confidence accepts.
        // 0.875 is exactly representable, keeping the threshold comparison exact.
        let conclusion = judge_decision(0.125, 0.875, Decision::Accept).unwrap();
        assert_eq!(conclusion.verdict, Verdict::Correct);
        let conclusion = judge_decision(0.125, 0.875, Decision::Reject).unwrap();
        assert_eq!(conclusion.verdict, Verdict::Incorrect);
    }

    #[test]
    fn explanation_matches_the_rendered_sentence() {
        let conclusion = judge_decision(0.013, 0.95, Decision::Reject).unwrap();
        assert_eq!(conclusion.verdict.as_str(), "Correct");
        assert_eq!(
            conclusion.explanation(),
            "0.013 is less than 0.05, so we reject the null hypothesis at the 95% confidence level"
        );

        let conclusion = judge_decision(0.400, 0.95, Decision::Accept).unwrap();
        assert_eq!(
            conclusion.explanation(),
            "0.400 is greater than 0.05, so we accept the null hypothesis at the 95% confidence level"
        );
    }

    #[test]
    fn out_of_range_parameters_are_rejected() {
        assert!(judge_decision(0.02, 0.50, Decision::Reject).is_err());
        assert!(judge_decision(1.5, 0.95, Decision::Reject).is_err());
        assert!(judge_decision(f64::NAN, 0.95, Decision::Accept).is_err());
    }
}

#[cfg(test)]
mod parameter_parsing {
    use super::*;

    #[test]
    fn alternatives_parse_from_ui_symbols() {
        assert_eq!("!=".parse::<Alternative>().unwrap(), Alternative::TwoSided);
        assert_eq!("<".parse::<Alternative>().unwrap(), Alternative::Less);
        assert_eq!(">".parse::<Alternative>().unwrap(), Alternative::Greater);
        assert!("<=".parse::<Alternative>().is_err());
    }

    #[test]
    fn decisions_parse_from_ui_values() {
        assert_eq!("accept".parse::<Decision>().unwrap(), Decision::Accept);
        assert_eq!("reject".parse::<Decision>().unwrap(), Decision::Reject);
        assert!("maybe".parse::<Decision>().is_err());
    }

    #[test]
    fn symbols_round_trip_through_parsing() {
        for alternative in [Alternative::TwoSided, Alternative::Less, Alternative::Greater] {
            assert_eq!(alternative.symbol().parse::<Alternative>().unwrap(), alternative);
            assert_eq!(alternative.to_string(), alternative.symbol());
        }
    }

    #[test]
    fn flip_is_an_involution() {
        for alternative in [Alternative::TwoSided, Alternative::Less, Alternative::Greater] {
            assert_eq!(alternative.flip().flip(), alternative);
        }
    }
}
