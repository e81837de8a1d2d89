//! Schedule combinators
//!
//! Combinators build larger schedules out of smaller ones without ever
//! materializing values:
//! - `Sequence` - Switch to the next schedule after a fixed number of steps
//! - `Loop` - Restart a schedule (or cycle through several) every period
//! - `Interpolator` - Blend two schedules with a weight ramp over an index range
//!
//! Children are held as [`SharedSchedule`](crate::schedule::SharedSchedule)
//! so combinators nest arbitrarily and share sub-trees.

mod interpolator;
mod looping;
mod sequence;

#[cfg(test)]
mod proptests;

pub use interpolator::{Blend, Interpolator};
pub use looping::{Loop, LoopTail};
pub use sequence::{Sequence, SequenceBuilder};
