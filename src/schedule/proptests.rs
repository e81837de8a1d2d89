//! Property-based tests for primitive schedules

use super::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_exp_starts_at_initial(initial in -10.0f64..10.0, gamma in 0.0f64..2.0) {
        prop_assert_eq!(Exp::new(initial, gamma).value_at(1), initial);
    }

    #[test]
    fn prop_exp_geometric_recurrence(
        initial in 0.01f64..10.0,
        gamma in 0.1f64..1.5,
        t in 1usize..200,
    ) {
        let schedule = Exp::new(initial, gamma);
        let next = schedule.value_at(t + 1);
        let expected = gamma * schedule.value_at(t);
        prop_assert!((next - expected).abs() <= 1e-9 * expected.abs().max(1.0));
    }

    #[test]
    fn prop_step_non_increasing(
        initial in 0.0f64..10.0,
        gamma in 0.0f64..1.0,
        sizes in prop::collection::vec(1usize..20, 1..6),
        t in 1usize..150,
    ) {
        let schedule = Step::new(initial, gamma, sizes).unwrap();
        prop_assert!(schedule.value_at(t + 1) <= schedule.value_at(t));
    }

    #[test]
    fn prop_step_starts_at_initial(
        initial in -5.0f64..5.0,
        gamma in 0.0f64..2.0,
        sizes in prop::collection::vec(1usize..20, 1..6),
    ) {
        let schedule = Step::new(initial, gamma, sizes).unwrap();
        prop_assert_eq!(schedule.value_at(1), initial);
    }

    #[test]
    fn prop_cyclic_periodic_without_envelope(
        low in -1.0f64..1.0,
        span in 0.0f64..2.0,
        period in 1usize..50,
        t in 1usize..500,
    ) {
        let high = low + span;
        let triangle = Triangle::new(low, high, period).unwrap();
        let sin = Sin::new(low, high, period).unwrap();
        let cosine = CosAnneal::new(low, high, period).unwrap();

        prop_assert!((triangle.value_at(t) - triangle.value_at(t + period)).abs() < 1e-12);
        prop_assert!((sin.value_at(t) - sin.value_at(t + period)).abs() < 1e-12);
        prop_assert!((cosine.value_at(t) - cosine.value_at(t + period)).abs() < 1e-12);
    }

    #[test]
    fn prop_cyclic_initial_values(low in -1.0f64..1.0, high in -1.0f64..3.0, period in 1usize..50) {
        prop_assert!((Triangle::new(low, high, period).unwrap().value_at(1) - low).abs() < 1e-12);
        prop_assert!((Sin::new(low, high, period).unwrap().value_at(1) - low).abs() < 1e-12);
        prop_assert!((CosAnneal::new(low, high, period).unwrap().value_at(1) - high).abs() < 1e-12);
    }

    #[test]
    fn prop_decay2_amplitude_halves(period in 1usize..40, cycle in 0usize..10, span in 0.1f64..4.0) {
        let schedule = Triangle::decay2(0.0, span, period).unwrap();
        let t = cycle * period + 1;
        let ratio = schedule.amplitude_at(t + period) / schedule.amplitude_at(t);
        prop_assert!((ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn prop_exp_envelope_scales_by_gamma_power(
        period in 1usize..40,
        cycle in 0usize..10,
        gamma in 0.1f64..1.0,
    ) {
        let schedule = Triangle::exp(0.0, 1.0, period, gamma).unwrap();
        let t = cycle * period + 1;
        let expected = gamma.powi(cycle as i32);
        prop_assert!((schedule.amplitude_at(t) - expected).abs() < 1e-12);
    }

    #[test]
    fn prop_enveloped_values_stay_between_baseline_and_peak(
        low in -1.0f64..1.0,
        span in 0.0f64..2.0,
        period in 1usize..30,
        t in 1usize..300,
    ) {
        let schedule = Sin::decay2(low, low + span, period).unwrap();
        let value = schedule.value_at(t);
        prop_assert!(value >= low - 1e-12 && value <= low + span + 1e-12);
    }

    #[test]
    fn prop_poly_bounded(initial in 0.0f64..10.0, power in 0.5f64..3.0, max_iter in 1usize..100, t in 1usize..200) {
        let schedule = Poly::new(initial, power, max_iter).unwrap();
        let value = schedule.value_at(t);
        prop_assert!(value >= 0.0 && value <= initial);
    }
}
