//! Constant schedule

use super::Schedule;

/// Returns the same value at every iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant {
    value: f64,
}

impl Constant {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Schedule for Constant {
    fn value_at(&self, _t: usize) -> f64 {
        self.value
    }
}
