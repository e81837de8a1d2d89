//! Polynomial decay schedule

use super::{offset, Schedule};
use crate::error::{Result, ScheduleError};

/// Polynomial Decay Schedule
///
/// Decays from `initial` to zero over `max_iter` iterations and stays at zero
/// afterwards.
///
/// Formula: value_t = initial * (1 - (t - 1) / max_iter)^power
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poly {
    initial: f64,
    power: f64,
    max_iter: usize,
}

impl Poly {
    /// Create a new polynomial decay schedule
    ///
    /// # Arguments
    /// * `initial` - Value at iteration 1
    /// * `power` - Exponent of the decay curve (1.0 is linear)
    /// * `max_iter` - Iteration count after which the value is zero
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidMaxIter`] when `max_iter` is zero.
    pub fn new(initial: f64, power: f64, max_iter: usize) -> Result<Self> {
        if max_iter == 0 {
            return Err(ScheduleError::InvalidMaxIter(max_iter));
        }
        Ok(Self { initial, power, max_iter })
    }

    pub fn initial(&self) -> f64 {
        self.initial
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn max_iter(&self) -> usize {
        self.max_iter
    }
}

impl Schedule for Poly {
    fn value_at(&self, t: usize) -> f64 {
        let elapsed = offset(t);
        if elapsed >= self.max_iter {
            return 0.0;
        }
        let remaining = 1.0 - elapsed as f64 / self.max_iter as f64;
        self.initial * remaining.powf(self.power)
    }
}
