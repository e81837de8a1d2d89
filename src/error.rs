//! Error types for schedule construction and configuration loading.
//!
//! Evaluation never fails: every invalid parameter combination is rejected
//! when the schedule is built, so `value_at` stays total.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for schedule operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors raised while building or loading a schedule.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Cyclic schedules and loops need a positive period.
    #[error("Invalid period for {schedule}: {period} (must be > 0)")]
    InvalidPeriod { schedule: &'static str, period: usize },

    /// A step-size entry was zero.
    #[error("Invalid step size at index {index}: {value} (must be > 0)")]
    InvalidStepSize { index: usize, value: usize },

    #[error("Step schedule requires at least one step size")]
    EmptyStepSizes,

    #[error("Invalid max_iter for poly schedule: {0} (must be > 0)")]
    InvalidMaxIter(usize),

    #[error("Invalid ramp length for linear schedule: {0} (must be > 0)")]
    InvalidRampLength(usize),

    #[error("Sequence requires at least one segment")]
    EmptySequence,

    /// A sequence segment covered no iterations.
    #[error("Invalid length for sequence segment {index}: {length} (must be > 0)")]
    InvalidSegmentLength { index: usize, length: usize },

    #[error("Loop requires at least one schedule")]
    EmptyLoop,

    #[error("Invalid loop repeat count: {0} (must be > 0)")]
    InvalidRepeatCount(usize),

    /// Interpolation ramps must start at index 1 or later and end after they start.
    #[error("Invalid blend range [{start}, {end}] (requires 1 <= start < end)")]
    InvalidBlendRange { start: usize, end: usize },

    #[error("Invalid start index: {0} (iteration indices start at 1)")]
    InvalidStartIndex(usize),

    #[error("Too many iterations requested: {steps} (at most {max})")]
    TooManySteps { steps: usize, max: usize },

    /// Configuration file could not be read.
    #[error("Failed to read schedule config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration text is not a valid schedule description.
    #[error("Failed to parse schedule config: {0}")]
    ConfigParse(String),
}

impl ScheduleError {
    /// Whether the error comes from invalid schedule parameters, as opposed to
    /// reading or parsing a configuration document.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, Self::ConfigRead { .. } | Self::ConfigParse(_))
    }
}
