//! Gantt timeline model.
//!
//! A timeline is the ordered list of execution intervals produced by one
//! simulation run. Segments never overlap (single processor) and may be
//! separated by idle gaps.

use serde::{Deserialize, Serialize};

/// One contiguous interval during which a process occupies the processor.
///
/// Covers `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttSegment {
    /// Process running in this interval.
    pub process_id: u32,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl GanttSegment {
    /// Creates a new segment.
    pub fn new(process_id: u32, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Execution intervals of a simulation run, ordered by start time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Segments in chronological order.
    pub segments: Vec<GanttSegment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: GanttSegment) {
        self.segments.push(segment);
    }

    /// Latest end time across all segments.
    pub fn makespan(&self) -> i64 {
        self.segments.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Total time the processor was busy.
    pub fn busy_time(&self) -> i64 {
        self.segments.iter().map(GanttSegment::duration).sum()
    }

    /// Returns all segments of a process, in chronological order.
    pub fn segments_for(&self, process_id: u32) -> Vec<&GanttSegment> {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Intervals between t=0 and the makespan where no process runs.
    pub fn idle_gaps(&self) -> Vec<(i64, i64)> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for s in &self.segments {
            if s.start > cursor {
                gaps.push((cursor, s.start));
            }
            cursor = cursor.max(s.end);
        }
        gaps
    }

    /// Sorted by start, pairwise non-overlapping, every segment non-empty.
    pub fn is_well_formed(&self) -> bool {
        self.segments.iter().all(|s| s.end > s.start)
            && self.segments.windows(2).all(|w| w[0].end <= w[1].start)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
