//! Sequential composition of schedules

use crate::error::{Result, ScheduleError};
use crate::schedule::{Schedule, SharedSchedule};

/// Sequence Combinator
///
/// Partitions the iteration axis into consecutive segments, each driven by its
/// own schedule evaluated at a local index restarting from 1. With lengths
/// `l_1, l_2, ...` the boundaries are `B_i = l_1 + ... + l_i`; iteration `t`
/// belongs to the first segment with `t <= B_i`, so a boundary index is the
/// last iteration of the earlier segment.
///
/// Past the final boundary the last schedule keeps running with its local
/// index still growing; there is no wraparound.
#[derive(Debug, Clone)]
pub struct Sequence {
    schedules: Vec<SharedSchedule>,
    lengths: Vec<usize>,
    boundaries: Vec<usize>,
}

impl Sequence {
    /// Create a sequence from `(schedule, length)` segments.
    ///
    /// # Errors
    ///
    /// Fails when there are no segments or a segment has zero length.
    pub fn new(segments: Vec<(SharedSchedule, usize)>) -> Result<Self> {
        if segments.is_empty() {
            return Err(ScheduleError::EmptySequence);
        }
        if let Some(index) = segments.iter().position(|(_, length)| *length == 0) {
            return Err(ScheduleError::InvalidSegmentLength { index, length: 0 });
        }

        let (schedules, lengths): (Vec<_>, Vec<_>) = segments.into_iter().unzip();
        let boundaries: Vec<usize> = lengths
            .iter()
            .scan(0usize, |total, &length| {
                *total = total.saturating_add(length);
                Some(*total)
            })
            .collect();

        log::debug!(
            "Built sequence with {} segments, boundaries {:?}",
            schedules.len(),
            boundaries
        );

        Ok(Self { schedules, lengths, boundaries })
    }

    pub fn builder() -> SequenceBuilder {
        SequenceBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Segment index driving iteration `t` and the local index within it.
    pub fn locate(&self, t: usize) -> (usize, usize) {
        let t = t.max(1);
        let last = self.schedules.len() - 1;
        let segment = self.boundaries.partition_point(|&boundary| boundary < t).min(last);
        let start = if segment == 0 { 0 } else { self.boundaries[segment - 1] };
        (segment, t - start)
    }
}

impl Schedule for Sequence {
    fn value_at(&self, t: usize) -> f64 {
        let (segment, local) = self.locate(t);
        self.schedules[segment].value_at(local)
    }
}

/// Incremental builder for [`Sequence`].
#[derive(Debug, Default)]
pub struct SequenceBuilder {
    segments: Vec<(SharedSchedule, usize)>,
}

impl SequenceBuilder {
    /// Append a segment running `schedule` for `length` iterations.
    pub fn then(mut self, schedule: SharedSchedule, length: usize) -> Self {
        self.segments.push((schedule, length));
        self
    }

    pub fn build(self) -> Result<Sequence> {
        Sequence::new(self.segments)
    }
}
