//! Lazy, restartable value streams over schedules
//!
//! A [`ScheduleStream`] is the only stateful piece of the crate: it pairs a
//! schedule with a cursor. Because the schedule itself holds no state,
//! resetting the cursor reproduces the exact same values.

#[cfg(test)]
mod tests;

use crate::error::{Result, ScheduleError};
use crate::schedule::Schedule;

/// Iterator over the values of a schedule, one per iteration index.
///
/// The stream is infinite; callers decide when to stop consuming. `S` may be
/// an owned schedule, a `SharedSchedule`, or a plain reference.
#[derive(Debug, Clone)]
pub struct ScheduleStream<S> {
    schedule: S,
    start: usize,
    cursor: usize,
}

/// Turn `schedule` into a stream whose first value is taken at `start`.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidStartIndex`] when `start` is zero.
pub fn to_sequence<S: Schedule>(schedule: S, start: usize) -> Result<ScheduleStream<S>> {
    ScheduleStream::starting_at(schedule, start)
}

impl<S: Schedule> ScheduleStream<S> {
    /// Stream starting at iteration 1.
    pub fn new(schedule: S) -> Self {
        Self { schedule, start: 1, cursor: 1 }
    }

    pub fn starting_at(schedule: S, start: usize) -> Result<Self> {
        if start == 0 {
            return Err(ScheduleError::InvalidStartIndex(start));
        }
        Ok(Self { schedule, start, cursor: start })
    }

    /// Index the next call to [`Iterator::next`] evaluates.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Value the next call to [`Iterator::next`] returns, without advancing.
    pub fn peek(&self) -> f64 {
        self.schedule.value_at(self.cursor)
    }

    /// Evaluate the underlying schedule at an arbitrary index.
    pub fn value_at(&self, t: usize) -> f64 {
        self.schedule.value_at(t)
    }

    /// Rewind to the start index.
    pub fn reset(&mut self) {
        log::trace!("Stream reset from {} to {}", self.cursor, self.start);
        self.cursor = self.start;
    }

    /// Move the cursor to iteration `t`.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidStartIndex`] when `t` is zero.
    pub fn seek(&mut self, t: usize) -> Result<()> {
        if t == 0 {
            return Err(ScheduleError::InvalidStartIndex(t));
        }
        log::trace!("Stream seek from {} to {t}", self.cursor);
        self.cursor = t;
        Ok(())
    }

    pub fn schedule(&self) -> &S {
        &self.schedule
    }

    pub fn into_schedule(self) -> S {
        self.schedule
    }
}

impl<S: Schedule> Iterator for ScheduleStream<S> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let value = self.schedule.value_at(self.cursor);
        self.cursor = self.cursor.saturating_add(1);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }

    fn nth(&mut self, n: usize) -> Option<f64> {
        self.cursor = self.cursor.saturating_add(n);
        self.next()
    }
}
