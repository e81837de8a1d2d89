//! Exponential decay schedule

use super::{offset, pow_count, Schedule};

/// Exponential Decay Schedule
///
/// Multiplies the initial value by `gamma` once per iteration.
///
/// Formula: value_t = initial * gamma^(t - 1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exp {
    initial: f64,
    gamma: f64,
}

impl Exp {
    /// Create a new exponential decay schedule
    ///
    /// # Arguments
    /// * `initial` - Value at iteration 1
    /// * `gamma` - Multiplicative factor applied per iteration
    pub fn new(initial: f64, gamma: f64) -> Self {
        Self { initial, gamma }
    }

    pub fn initial(&self) -> f64 {
        self.initial
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl Schedule for Exp {
    fn value_at(&self, t: usize) -> f64 {
        self.initial * pow_count(self.gamma, offset(t))
    }
}
