//! Blending between two schedules

use crate::error::{Result, ScheduleError};
use crate::schedule::{Schedule, SharedSchedule};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Shape of the blending weight between the ramp start and end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Blend {
    /// Straight line from 0 to 1.
    #[default]
    Linear,
    /// Half-cosine ease-in/ease-out from 0 to 1.
    Cosine,
}

impl Blend {
    /// Weight for ramp progress `x ∈ [0, 1]`.
    pub fn weight(&self, x: f64) -> f64 {
        match self {
            Blend::Linear => x,
            Blend::Cosine => 0.5 * (1.0 - (PI * x).cos()),
        }
    }
}

/// Interpolator Combinator
///
/// Evaluates `from(t) * (1 - w(t)) + to(t) * w(t)`. The weight is 0 up to
/// `start`, 1 from `end` onwards and follows the [`Blend`] shape in between,
/// which makes warmup-then-decay compositions a single schedule.
#[derive(Debug, Clone)]
pub struct Interpolator {
    from: SharedSchedule,
    to: SharedSchedule,
    start: usize,
    end: usize,
    blend: Blend,
}

impl Interpolator {
    /// Create an interpolator ramping from `from` to `to` over `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidBlendRange`] unless `1 <= start < end`.
    pub fn new(
        from: SharedSchedule,
        to: SharedSchedule,
        start: usize,
        end: usize,
        blend: Blend,
    ) -> Result<Self> {
        if start == 0 || start >= end {
            return Err(ScheduleError::InvalidBlendRange { start, end });
        }
        log::debug!("Built {blend:?} interpolator over [{start}, {end}]");
        Ok(Self { from, to, start, end, blend })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn blend(&self) -> Blend {
        self.blend
    }

    /// Blending weight of the `to` schedule at iteration `t`.
    pub fn weight_at(&self, t: usize) -> f64 {
        if t <= self.start {
            return 0.0;
        }
        if t >= self.end {
            return 1.0;
        }
        let progress = (t - self.start) as f64 / (self.end - self.start) as f64;
        self.blend.weight(progress)
    }
}

impl Schedule for Interpolator {
    fn value_at(&self, t: usize) -> f64 {
        let weight = self.weight_at(t);
        // Outside the ramp the child value is returned unmixed.
        if weight == 0.0 {
            return self.from.value_at(t);
        }
        if weight == 1.0 {
            return self.to.value_at(t);
        }
        self.from.value_at(t) * (1.0 - weight) + self.to.value_at(t) * weight
    }
}
