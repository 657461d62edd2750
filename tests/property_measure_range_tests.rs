use boxchart_rs::core::{FiveNumberSummary, MeasureRangeTuning, fit_measure_bounds};
use proptest::collection::vec;
use proptest::prelude::*;

fn summaries_strategy() -> impl Strategy<Value = Vec<FiveNumberSummary>> {
    vec(
        (
            -1_000_000.0f64..1_000_000.0,
            -1_000_000.0f64..1_000_000.0,
            -1_000_000.0f64..1_000_000.0,
            -1_000_000.0f64..1_000_000.0,
            -1_000_000.0f64..1_000_000.0,
        )
            .prop_map(|(wl, bl, m, bh, wh)| {
                FiveNumberSummary::new(wl, bl, m, bh, wh).expect("finite summary")
            }),
        1..40,
    )
}

proptest! {
    #[test]
    fn fitted_bounds_contain_the_data_envelope(summaries in summaries_strategy()) {
        let global_min = summaries
            .iter()
            .map(|s| s.whisker_low)
            .fold(f64::INFINITY, f64::min);
        let global_max = summaries
            .iter()
            .map(|s| s.whisker_high)
            .fold(f64::NEG_INFINITY, f64::max);

        let bounds = fit_measure_bounds(&summaries, MeasureRangeTuning::default())
            .expect("fit finite data");
        let min = bounds.min.expect("explicit min");
        let max = bounds.max.expect("explicit max");

        prop_assert!(min <= global_min);
        prop_assert!(max >= global_max);
    }

    #[test]
    fn non_negative_data_never_gets_a_negative_floor(
        summaries in vec(
            (
                0.0f64..1_000_000.0,
                0.0f64..1_000_000.0,
                0.0f64..1_000_000.0,
                0.0f64..1_000_000.0,
                0.0f64..1_000_000.0,
            )
                .prop_map(|(wl, bl, m, bh, wh)| {
                    FiveNumberSummary::new(wl, bl, m, bh, wh).expect("finite summary")
                }),
            1..40,
        )
    ) {
        let bounds = fit_measure_bounds(&summaries, MeasureRangeTuning::default())
            .expect("fit non-negative data");
        prop_assert!(bounds.min.expect("explicit min") >= 0.0);
    }

    #[test]
    fn fitting_is_deterministic(summaries in summaries_strategy()) {
        let first = fit_measure_bounds(&summaries, MeasureRangeTuning::default())
            .expect("first fit");
        let second = fit_measure_bounds(&summaries, MeasureRangeTuning::default())
            .expect("second fit");
        prop_assert_eq!(first, second);
    }
}
