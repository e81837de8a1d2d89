//! Per-cycle amplitude envelopes for cyclic schedules

use super::pow_count;
use serde::{Deserialize, Serialize};

/// Scaling applied to a cyclic schedule's span once per completed period.
///
/// The baseline of the waveform is held fixed; only the distance between the
/// baseline and the peak shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Envelope {
    /// Full amplitude in every cycle.
    #[default]
    Constant,
    /// Amplitude halves each cycle: `span / 2^c`.
    Halving,
    /// Amplitude decays geometrically each cycle: `span * gamma^c`.
    Exponential { gamma: f64 },
}

impl Envelope {
    /// Multiplier applied to the span during zero-based cycle `cycle`.
    pub fn scale(&self, cycle: usize) -> f64 {
        match self {
            Envelope::Constant => 1.0,
            Envelope::Halving => pow_count(0.5, cycle),
            Envelope::Exponential { gamma } => pow_count(*gamma, cycle),
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Envelope::Constant)
    }
}
