//! Declarative schedule configuration
//!
//! Schedules can be described as YAML or JSON documents and built into a
//! [`SharedSchedule`](crate::schedule::SharedSchedule). Building goes through
//! the same typed constructors as code, so every invariant is checked once.
//!
//! ```yaml
//! kind: sequence
//! segments:
//!   - length: 500
//!     schedule: { kind: linear, start: 0.0, end: 0.1, steps: 500 }
//!   - length: 9500
//!     schedule: { kind: cos_anneal, low: 0.0, high: 0.1, period: 9500 }
//! ```

mod loader;
mod schema;


pub use loader::{from_json_str, from_yaml_str, load_config, load_schedule};
pub use schema::{ScheduleConfig, SegmentConfig};
