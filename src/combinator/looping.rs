//! Periodic restarts of schedules

use crate::error::{Result, ScheduleError};
use crate::schedule::{offset, Schedule, SharedSchedule};
use serde::{Deserialize, Serialize};

/// What a [`Loop`] with a repeat count does once every cycle has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopTail {
    /// Ignore the repeat count and keep cycling.
    #[default]
    Continue,
    /// Freeze at the value of the final iteration of the last cycle.
    Hold,
    /// Let the schedule of the last cycle run on with a growing local index.
    Last,
}

/// Loop Combinator
///
/// Restarts its schedules every `period` iterations. With several schedules
/// they are used round-robin, one per cycle.
///
/// For cycle `c = floor((t - 1) / period)` the local index is
/// `((t - 1) mod period) + 1` and the schedule is `schedules[c mod n]`.
#[derive(Debug, Clone)]
pub struct Loop {
    schedules: Vec<SharedSchedule>,
    period: usize,
    repeats: Option<usize>,
    tail: LoopTail,
}

impl Loop {
    /// Loop a single schedule forever.
    pub fn new(schedule: SharedSchedule, period: usize) -> Result<Self> {
        Self::cycle(vec![schedule], period)
    }

    /// Cycle through `schedules` forever, one per period.
    ///
    /// # Errors
    ///
    /// Fails when `schedules` is empty or `period` is zero.
    pub fn cycle(schedules: Vec<SharedSchedule>, period: usize) -> Result<Self> {
        if schedules.is_empty() {
            return Err(ScheduleError::EmptyLoop);
        }
        if period == 0 {
            return Err(ScheduleError::InvalidPeriod { schedule: "loop", period });
        }
        log::debug!("Built loop over {} schedules with period {period}", schedules.len());
        Ok(Self { schedules, period, repeats: None, tail: LoopTail::Continue })
    }

    /// Stop cycling after `repeats` cycles and switch to `tail` behaviour.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidRepeatCount`] when `repeats` is zero.
    pub fn with_repeats(mut self, repeats: usize, tail: LoopTail) -> Result<Self> {
        if repeats == 0 {
            return Err(ScheduleError::InvalidRepeatCount(repeats));
        }
        self.repeats = Some(repeats);
        self.tail = tail;
        Ok(self)
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn repeats(&self) -> Option<usize> {
        self.repeats
    }

    pub fn tail(&self) -> LoopTail {
        self.tail
    }

    fn schedule_for(&self, cycle: usize) -> &SharedSchedule {
        &self.schedules[cycle % self.schedules.len()]
    }
}

impl Schedule for Loop {
    fn value_at(&self, t: usize) -> f64 {
        let elapsed = offset(t);
        let cycle = elapsed / self.period;

        if let Some(repeats) = self.repeats {
            if cycle >= repeats {
                let last_cycle = repeats - 1;
                let schedule = self.schedule_for(last_cycle);
                match self.tail {
                    LoopTail::Continue => {}
                    LoopTail::Hold => return schedule.value_at(self.period),
                    LoopTail::Last => {
                        return schedule.value_at(elapsed - last_cycle * self.period + 1)
                    }
                }
            }
        }

        self.schedule_for(cycle).value_at(elapsed % self.period + 1)
    }
}
