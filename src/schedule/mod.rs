//! Hyper-parameter schedules
//!
//! A schedule maps a 1-based iteration index to a scalar value. Schedules are
//! immutable and evaluation is pure, so the same schedule can be queried at
//! arbitrary indices and shared freely between consumers.
//!
//! Primitive generators:
//! - `Constant` - The same value everywhere
//! - `Linear` - Linear ramp between two values, then held
//! - `Step` - Multiplicative decay at cumulative step boundaries
//! - `Exp` - Geometric decay per step
//! - `Poly` - Polynomial decay to zero at `max_iter`
//! - `Inv` - Inverse-power decay
//! - `CosAnneal`, `Triangle`, `Sin` - Cyclic waveforms, optionally wrapped in
//!   an [`Envelope`] that shrinks the amplitude per cycle

mod constant;
mod cyclic;
mod envelope;
mod exponential;
mod inverse;
mod linear;
mod polynomial;
mod step;

#[cfg(test)]
mod proptests;

pub use constant::Constant;
pub use cyclic::{CosAnneal, CosineWave, Cyclic, SineWave, Sin, Triangle, TriangleWave, Waveform};
pub use envelope::Envelope;
pub use exponential::Exp;
pub use inverse::Inv;
pub use linear::Linear;
pub use polynomial::Poly;
pub use step::Step;

use std::fmt;
use std::sync::Arc;

/// A pure function from iteration index to hyper-parameter value.
///
/// `t` is 1-based. Implementations treat `t = 0` like `t = 1` so evaluation
/// stays total; callers should still start counting at 1.
pub trait Schedule: Send + Sync + fmt::Debug {
    /// Value of the schedule at iteration `t`.
    fn value_at(&self, t: usize) -> f64;
}

/// Shared, type-erased schedule used as the child type of combinators.
pub type SharedSchedule = Arc<dyn Schedule>;

/// Evaluate `schedule` at iteration `t`.
pub fn value_at<S: Schedule + ?Sized>(schedule: &S, t: usize) -> f64 {
    schedule.value_at(t)
}

/// Zero-based offset of iteration `t`.
#[inline]
pub(crate) fn offset(t: usize) -> usize {
    t.saturating_sub(1)
}

/// `base^n` for a count exponent. Uses `powi` while `n` fits in an `i32` and
/// `powf` past that, so the sign of a negative base still follows the parity
/// of `n`.
#[inline]
pub(crate) fn pow_count(base: f64, n: usize) -> f64 {
    match i32::try_from(n) {
        Ok(n) => base.powi(n),
        Err(_) => base.powf(n as f64),
    }
}

impl<S: Schedule + ?Sized> Schedule for &S {
    fn value_at(&self, t: usize) -> f64 {
        (**self).value_at(t)
    }
}

impl<S: Schedule + ?Sized> Schedule for Box<S> {
    fn value_at(&self, t: usize) -> f64 {
        (**self).value_at(t)
    }
}

impl<S: Schedule + ?Sized> Schedule for Arc<S> {
    fn value_at(&self, t: usize) -> f64 {
        (**self).value_at(t)
    }
}

/// Convenience conversions for schedules.
pub trait ScheduleExt: Schedule + Sized + 'static {
    /// Move the schedule behind an `Arc` so combinators can hold it.
    fn shared(self) -> SharedSchedule {
        Arc::new(self)
    }
}

impl<S: Schedule + Sized + 'static> ScheduleExt for S {}
