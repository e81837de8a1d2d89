//! Property-based tests for schedule combinators

use super::*;
use crate::schedule::{Exp, Linear, Schedule, ScheduleExt, Triangle};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_sequence_delegates_to_segment(
        lengths in prop::collection::vec(1usize..20, 1..6),
        t in 1usize..150,
    ) {
        let segments = lengths
            .iter()
            .enumerate()
            .map(|(i, &len)| (Exp::new(i as f64 + 1.0, 0.9).shared(), len))
            .collect();
        let sequence = Sequence::new(segments).unwrap();

        let (segment, local) = sequence.locate(t);
        let expected = Exp::new(segment as f64 + 1.0, 0.9).value_at(local);
        prop_assert_eq!(sequence.value_at(t), expected);

        let before: usize = lengths[..segment].iter().sum();
        prop_assert_eq!(before + local, t);
        if segment + 1 < lengths.len() {
            prop_assert!(local <= lengths[segment]);
        }
    }

    #[test]
    fn prop_loop_is_periodic(period in 1usize..30, t in 1usize..300) {
        let child = Linear::new(0.0, 1.0, 50).unwrap().shared();
        let looped = Loop::new(child, period).unwrap();
        prop_assert_eq!(looped.value_at(t), looped.value_at(t + period));
    }

    #[test]
    fn prop_loop_hold_is_constant_after_repeats(
        period in 1usize..20,
        repeats in 1usize..5,
        extra in 1usize..100,
    ) {
        let child = Triangle::new(0.0, 1.0, 7).unwrap().shared();
        let looped = Loop::new(child, period).unwrap().with_repeats(repeats, LoopTail::Hold).unwrap();
        let last = looped.value_at(repeats * period);
        prop_assert_eq!(looped.value_at(repeats * period + extra), last);
    }

    #[test]
    fn prop_interpolator_between_children(
        start in 1usize..20,
        width in 1usize..20,
        t in 1usize..60,
    ) {
        let interp = Interpolator::new(
            Exp::new(1.0, 0.95).shared(),
            Exp::new(0.5, 0.99).shared(),
            start,
            start + width,
            Blend::Cosine,
        )
        .unwrap();
        let a = 0.95f64.powi(t as i32 - 1);
        let b = 0.5 * 0.99f64.powi(t as i32 - 1);
        let value = interp.value_at(t);
        prop_assert!(value >= a.min(b) - 1e-12 && value <= a.max(b) + 1e-12);

        let w = interp.weight_at(t);
        prop_assert!((0.0..=1.0).contains(&w));
    }
}
