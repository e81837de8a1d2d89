//! Step decay schedule

use super::{offset, pow_count, Schedule};
use crate::error::{Result, ScheduleError};

/// Step Decay Schedule
///
/// Multiplies the initial value by `gamma` each time a cumulative step
/// boundary is crossed. With step sizes `[2, 3, 2]` the boundaries sit at
/// offsets 2, 5 and 7, so the value first changes at iteration 3. Once every
/// boundary has been passed the value stays at `initial * gamma^len`.
///
/// Formula: value_t = initial * gamma^k, k = |{ b in boundaries : b <= t - 1 }|
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    initial: f64,
    gamma: f64,
    step_sizes: Vec<usize>,
    // Cumulative sums of `step_sizes`.
    boundaries: Vec<usize>,
}

impl Step {
    /// Create a new step decay schedule
    ///
    /// # Arguments
    /// * `initial` - Value at iteration 1
    /// * `gamma` - Multiplicative factor applied at each boundary
    /// * `step_sizes` - Lengths of the consecutive constant segments
    ///
    /// # Errors
    ///
    /// Fails when `step_sizes` is empty or contains a zero entry.
    pub fn new(initial: f64, gamma: f64, step_sizes: Vec<usize>) -> Result<Self> {
        if step_sizes.is_empty() {
            return Err(ScheduleError::EmptyStepSizes);
        }
        if let Some(index) = step_sizes.iter().position(|&size| size == 0) {
            return Err(ScheduleError::InvalidStepSize { index, value: 0 });
        }

        let boundaries = step_sizes
            .iter()
            .scan(0usize, |total, &size| {
                *total = total.saturating_add(size);
                Some(*total)
            })
            .collect();

        Ok(Self { initial, gamma, step_sizes, boundaries })
    }

    /// Step decay with a single repeating step size, applied `count` times.
    pub fn uniform(initial: f64, gamma: f64, step_size: usize, count: usize) -> Result<Self> {
        Self::new(initial, gamma, vec![step_size; count])
    }

    pub fn initial(&self) -> f64 {
        self.initial
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn step_sizes(&self) -> &[usize] {
        &self.step_sizes
    }

    /// Number of decays applied at iteration `t`.
    pub fn decays_at(&self, t: usize) -> usize {
        let elapsed = offset(t);
        self.boundaries.partition_point(|&boundary| boundary <= elapsed)
    }
}

impl Schedule for Step {
    fn value_at(&self, t: usize) -> f64 {
        self.initial * pow_count(self.gamma, self.decays_at(t))
    }
}
