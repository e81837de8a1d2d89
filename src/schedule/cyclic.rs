//! Cyclic waveform schedules

use super::{offset, Envelope, Schedule};
use crate::error::{Result, ScheduleError};
use std::f64::consts::PI;
use std::fmt;
use std::marker::PhantomData;

/// Shape of one period of a cyclic schedule.
///
/// `shape` maps the phase `φ ∈ [0, 1)` within a period to a weight in
/// `[0, 1]`; the schedule value is `low + (high - low) * envelope * shape(φ)`.
pub trait Waveform: Send + Sync + 'static {
    /// Name used in diagnostics and error messages.
    const NAME: &'static str;

    fn shape(phase: f64) -> f64;
}

/// Symmetric linear ramp up to the peak at mid-period and back down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleWave;

impl Waveform for TriangleWave {
    const NAME: &'static str = "triangle";

    fn shape(phase: f64) -> f64 {
        1.0 - (2.0 * phase - 1.0).abs()
    }
}

/// Rectified sine, `|sin(π φ)|`, peaking at mid-period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SineWave;

impl Waveform for SineWave {
    const NAME: &'static str = "sin";

    fn shape(phase: f64) -> f64 {
        (PI * phase).sin().abs()
    }
}

/// Half cosine starting at the peak and annealing towards the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CosineWave;

impl Waveform for CosineWave {
    const NAME: &'static str = "cos_anneal";

    fn shape(phase: f64) -> f64 {
        0.5 * (1.0 + (PI * phase).cos())
    }
}

/// Cyclic Schedule
///
/// Repeats a waveform every `period` iterations between `low` and `high`.
/// An [`Envelope`] can shrink the span per completed cycle.
///
/// Formula: value_t = low + (high - low) * envelope(c) * shape(φ)
/// with c = floor((t - 1) / period) and φ = ((t - 1) mod period) / period.
pub struct Cyclic<W: Waveform> {
    low: f64,
    high: f64,
    period: usize,
    envelope: Envelope,
    waveform: PhantomData<W>,
}

/// Triangular wave between `low` and `high`.
pub type Triangle = Cyclic<TriangleWave>;
/// Rectified sine wave between `low` and `high`.
pub type Sin = Cyclic<SineWave>;
/// Cosine annealing from `high` down to `low`, restarting each period.
///
/// Iteration 1 of every cycle evaluates to `high`, not `low`.
pub type CosAnneal = Cyclic<CosineWave>;

impl<W: Waveform> Cyclic<W> {
    /// Create a cyclic schedule with constant amplitude
    ///
    /// # Arguments
    /// * `low` - Baseline value (`λ0`)
    /// * `high` - Peak value (`λ1`)
    /// * `period` - Iterations per cycle
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidPeriod`] when `period` is zero.
    pub fn new(low: f64, high: f64, period: usize) -> Result<Self> {
        Self::with_envelope(low, high, period, Envelope::Constant)
    }

    /// Cyclic schedule whose span halves every period.
    pub fn decay2(low: f64, high: f64, period: usize) -> Result<Self> {
        Self::with_envelope(low, high, period, Envelope::Halving)
    }

    /// Cyclic schedule whose span is multiplied by `gamma` every period.
    pub fn exp(low: f64, high: f64, period: usize, gamma: f64) -> Result<Self> {
        Self::with_envelope(low, high, period, Envelope::Exponential { gamma })
    }

    pub fn with_envelope(low: f64, high: f64, period: usize, envelope: Envelope) -> Result<Self> {
        if period == 0 {
            return Err(ScheduleError::InvalidPeriod { schedule: W::NAME, period });
        }
        Ok(Self { low, high, period, envelope, waveform: PhantomData })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn envelope(&self) -> Envelope {
        self.envelope
    }

    /// Zero-based cycle containing iteration `t`.
    pub fn cycle_at(&self, t: usize) -> usize {
        offset(t) / self.period
    }

    /// Span between baseline and peak during the cycle containing `t`.
    pub fn amplitude_at(&self, t: usize) -> f64 {
        (self.high - self.low) * self.envelope.scale(self.cycle_at(t))
    }
}

impl<W: Waveform> Schedule for Cyclic<W> {
    fn value_at(&self, t: usize) -> f64 {
        let phase = (offset(t) % self.period) as f64 / self.period as f64;
        self.low + self.amplitude_at(t) * W::shape(phase)
    }
}

// Manual impls: derives would add `W: Clone` and `W: Debug` bounds.
impl<W: Waveform> Clone for Cyclic<W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W: Waveform> Copy for Cyclic<W> {}

impl<W: Waveform> PartialEq for Cyclic<W> {
    fn eq(&self, other: &Self) -> bool {
        self.low == other.low
            && self.high == other.high
            && self.period == other.period
            && self.envelope == other.envelope
    }
}

impl<W: Waveform> fmt::Debug for Cyclic<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cyclic")
            .field("waveform", &W::NAME)
            .field("low", &self.low)
            .field("high", &self.high)
            .field("period", &self.period)
            .field("envelope", &self.envelope)
            .finish()
    }
}
