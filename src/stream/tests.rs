//! Tests for schedule streams

use super::*;
use crate::combinator::Sequence;
use crate::schedule::{CosAnneal, Exp, Poly, ScheduleExt, SharedSchedule, Step, Triangle};
use approx::assert_abs_diff_eq;
use proptest::prelude::*;

#[test]
fn test_stream_yields_schedule_values() {
    let values: Vec<f64> = ScheduleStream::new(Exp::new(1.0, 0.5)).take(4).collect();
    assert_eq!(values, vec![1.0, 0.5, 0.25, 0.125]);
}

#[test]
fn test_stream_restart_reproduces_values() {
    let schedule = Step::new(1.0, 0.8, vec![2, 3, 2]).unwrap();
    let mut stream = to_sequence(&schedule, 1).unwrap();

    let first: Vec<f64> = stream.by_ref().take(12).collect();
    assert_eq!(stream.position(), 13);

    stream.reset();
    assert_eq!(stream.position(), 1);
    let second: Vec<f64> = stream.by_ref().take(12).collect();
    assert_eq!(first, second);
}

#[test]
fn test_stream_custom_start() {
    let schedule = Exp::new(1.0, 0.5);
    let mut stream = to_sequence(schedule, 3).unwrap();
    assert_abs_diff_eq!(stream.next().unwrap(), 0.25);
    assert_abs_diff_eq!(stream.next().unwrap(), 0.125);

    stream.reset();
    assert_eq!(stream.position(), 3);
    assert_eq!(stream.start(), 3);
}

#[test]
fn test_stream_rejects_zero_start() {
    let err = to_sequence(Exp::new(1.0, 0.5), 0).unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidStartIndex(0)));
}

#[test]
fn test_stream_peek_does_not_advance() {
    let mut stream = ScheduleStream::new(Triangle::new(0.0, 1.0, 4).unwrap());
    assert_abs_diff_eq!(stream.peek(), 0.0);
    assert_eq!(stream.position(), 1);
    stream.next();
    assert_abs_diff_eq!(stream.peek(), 0.5);
}

#[test]
fn test_stream_seek_and_nth() {
    let mut stream = ScheduleStream::new(Exp::new(1.0, 0.5));
    stream.seek(4).unwrap();
    assert_abs_diff_eq!(stream.next().unwrap(), 0.125);

    stream.reset();
    // nth(2) skips iterations 1 and 2.
    assert_abs_diff_eq!(stream.nth(2).unwrap(), 0.25);
    assert_eq!(stream.position(), 4);

    assert!(matches!(stream.seek(0), Err(ScheduleError::InvalidStartIndex(0))));
}

#[test]
fn test_stream_is_unbounded() {
    let stream = ScheduleStream::new(Exp::new(1.0, 0.5));
    assert_eq!(stream.size_hint(), (usize::MAX, None));
}

#[test]
fn test_stream_poly_zero_tail() {
    let stream = ScheduleStream::new(Poly::new(1.0, 1.0, 2).unwrap());
    let values: Vec<f64> = stream.take(5).collect();
    assert_eq!(values, vec![1.0, 0.5, 0.0, 0.0, 0.0]);
}

#[test]
fn test_streams_share_one_schedule() {
    let schedule: SharedSchedule = CosAnneal::new(0.0, 1.0, 10).unwrap().shared();
    let mut a = ScheduleStream::new(schedule.clone());
    let mut b = ScheduleStream::new(schedule.clone());

    a.nth(4);
    assert_abs_diff_eq!(b.next().unwrap(), 1.0);
    assert_abs_diff_eq!(a.value_at(3), b.schedule().value_at(3));
}

#[test]
fn test_stream_across_threads() {
    let schedule: SharedSchedule = Sequence::builder()
        .then(Exp::new(1.0, 0.9).shared(), 5)
        .then(Triangle::new(0.0, 1.0, 4).unwrap().shared(), 5)
        .build()
        .unwrap()
        .shared();
    let expected: Vec<f64> = ScheduleStream::new(schedule.clone()).take(20).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let schedule = schedule.clone();
            std::thread::spawn(move || ScheduleStream::new(schedule).take(20).collect::<Vec<f64>>())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_restart_law(
        initial in 0.0f64..5.0,
        gamma in 0.1f64..1.0,
        start in 1usize..50,
        n in 1usize..100,
    ) {
        let mut stream = to_sequence(Exp::new(initial, gamma), start).unwrap();
        let first: Vec<f64> = stream.by_ref().take(n).collect();
        stream.reset();
        let second: Vec<f64> = stream.by_ref().take(n).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_stream_matches_value_at(period in 1usize..20, start in 1usize..50, n in 1usize..60) {
        let schedule = Triangle::decay2(0.0, 1.0, period).unwrap();
        let values: Vec<f64> = to_sequence(&schedule, start).unwrap().take(n).collect();
        for (i, value) in values.into_iter().enumerate() {
            prop_assert_eq!(value, schedule.value_at(start + i));
        }
    }
}
