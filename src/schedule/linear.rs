//! Linear ramp schedule

use super::{offset, Schedule};
use crate::error::{Result, ScheduleError};

/// Linear Ramp Schedule
///
/// Moves linearly from `start` at iteration 1 to `end` at iteration
/// `steps + 1`, then holds `end`. Typically used as a warmup segment.
///
/// Formula: value_t = start + (end - start) * min(1, (t - 1) / steps)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    start: f64,
    end: f64,
    steps: usize,
}

impl Linear {
    /// Create a new linear ramp
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidRampLength`] when `steps` is zero.
    pub fn new(start: f64, end: f64, steps: usize) -> Result<Self> {
        if steps == 0 {
            return Err(ScheduleError::InvalidRampLength(steps));
        }
        Ok(Self { start, end, steps })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Schedule for Linear {
    fn value_at(&self, t: usize) -> f64 {
        let progress = (offset(t) as f64 / self.steps as f64).min(1.0);
        self.start + (self.end - self.start) * progress
    }
}
