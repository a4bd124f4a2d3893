//! Property tests for the scoring heuristic.

use proptest::prelude::*;

use frs_model::{Inputs, RiskFactor, RiskFlags, Sex, estimate};

fn arb_inputs() -> impl Strategy<Value = Inputs> {
    (
        -200i64..2000,
        prop_oneof![Just(Sex::Female), Just(Sex::Male)],
        -50.0f64..500.0,
        -50.0f64..400.0,
        proptest::option::of(-20.0f64..5.0),
        any::<[bool; 7]>(),
    )
        .prop_map(|(age, sex, weight, height, t_score, bits)| Inputs {
            age,
            sex,
            weight,
            height,
            t_score,
            flags: RiskFlags {
                previous_fracture: bits[0],
                parent_hip: bits[1],
                smoking: bits[2],
                glucocorticoids: bits[3],
                ra: bits[4],
                secondary_osteo: bits[5],
                alcohol3: bits[6],
            },
        })
}

proptest! {
    /// Reported probabilities never leave their declared ranges, even for
    /// inputs far outside the advisory bounds of the form.
    #[test]
    fn estimates_stay_in_bounds(inputs in arb_inputs()) {
        let estimate = estimate(&inputs);

        prop_assert!(estimate.major.is_finite());
        prop_assert!(estimate.hip.is_finite());
        prop_assert!((0.0..=60.0).contains(&estimate.major));
        prop_assert!((0.0..=30.0).contains(&estimate.hip));
    }

    /// Selecting one more risk factor raises the raw score by a fixed step,
    /// so both probabilities weakly increase (up to the ceilings).
    #[test]
    fn more_risk_factors_never_lower_the_estimate(inputs in arb_inputs()) {
        // Find a factor that is still off; skip the all-on case.
        let Some(next) = RiskFactor::ALL
            .iter()
            .copied()
            .find(|f| !inputs.flags.get(*f))
        else {
            return Ok(());
        };

        let base = estimate(&inputs);

        let mut raised = inputs;
        raised.flags.set(next, true);
        let higher = estimate(&raised);

        prop_assert!(higher.major >= base.major);
        prop_assert!(higher.hip >= base.hip);
    }
}
