//! Inverse-power decay schedule

use super::{offset, Schedule};

/// Inverse Decay Schedule
///
/// Formula: value_t = initial * (1 + gamma * (t - 1))^(-power)
///
/// Negative bases are not rejected; a non-integer `power` then yields NaN,
/// which is the caller's parameter choice rather than an evaluation error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inv {
    initial: f64,
    gamma: f64,
    power: f64,
}

impl Inv {
    /// Create a new inverse decay schedule
    ///
    /// # Arguments
    /// * `initial` - Value at iteration 1
    /// * `gamma` - Decay rate per iteration
    /// * `power` - Exponent of the decay
    pub fn new(initial: f64, gamma: f64, power: f64) -> Self {
        Self { initial, gamma, power }
    }

    pub fn initial(&self) -> f64 {
        self.initial
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn power(&self) -> f64 {
        self.power
    }
}

impl Schedule for Inv {
    fn value_at(&self, t: usize) -> f64 {
        let base = 1.0 + self.gamma * offset(t) as f64;
        self.initial * base.powf(-self.power)
    }
}
