//! Hyperschedule: composable hyper-parameter schedules
//!
//! A schedule is a pure function from a 1-based iteration index to a scalar
//! value, for driving learning rates, momentum and similar knobs from an
//! external training loop.
//!
//! - [`schedule`] - Primitive generators: decay curves and cyclic waveforms
//! - [`combinator`] - Sequencing, looping and interpolation of schedules
//! - [`stream`] - Lazy, restartable iteration over schedule values
//! - [`config`] - YAML/JSON descriptions of schedule trees
//!
//! # Example
//!
//! ```
//! use hyperschedule::combinator::Sequence;
//! use hyperschedule::schedule::{CosAnneal, Linear, Schedule, ScheduleExt};
//! use hyperschedule::stream::to_sequence;
//!
//! let schedule = Sequence::builder()
//!     .then(Linear::new(0.0, 0.1, 100)?.shared(), 100)
//!     .then(CosAnneal::new(0.001, 0.1, 900)?.shared(), 900)
//!     .build()?;
//!
//! assert_eq!(schedule.value_at(1), 0.0);
//! assert!((schedule.value_at(101) - 0.1).abs() < 1e-12);
//!
//! let first: Vec<f64> = to_sequence(&schedule, 1)?.take(10).collect();
//! assert_eq!(first.len(), 10);
//! # Ok::<(), hyperschedule::ScheduleError>(())
//! ```

pub mod cli;
pub mod combinator;
pub mod config;
pub mod error;
pub mod schedule;
pub mod stream;

pub use error::{Result, ScheduleError};
pub use schedule::{value_at, Schedule, ScheduleExt, SharedSchedule};
pub use stream::{to_sequence, ScheduleStream};
