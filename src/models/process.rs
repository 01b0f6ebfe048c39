//! Process model.
//!
//! A process is a synthetic CPU workload: it becomes eligible at its
//! arrival time and needs a fixed amount of processor time (its burst).
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process to be scheduled on the single simulated processor.
///
/// Immutable once built by the [`ProcessRegistry`](crate::registry::ProcessRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Stable identifier, assigned by input order starting at 1.
    pub id: u32,
    /// Instant the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total processor time required.
    pub burst_time: i64,
    /// Scheduling priority (higher = more urgent). Only set for Priority runs.
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a process without a priority.
    pub fn new(id: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Row label used by tables and Gantt charts.
    pub fn label(&self) -> String {
        format!("Process {}", self.id)
    }

    /// Priority used for ordering; processes without one rank lowest.
    pub(crate) fn effective_priority(&self) -> i32 {
        self.priority.unwrap_or(i32::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(3, 5, 7).with_priority(2);
        assert_eq!(p.id, 3);
        assert_eq!(p.arrival_time, 5);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, Some(2));
    }

    #[test]
    fn test_process_label() {
        assert_eq!(Process::new(1, 0, 1).label(), "Process 1");
        assert_eq!(Process::new(12, 0, 1).label(), "Process 12");
    }

    #[test]
    fn test_effective_priority_defaults_lowest() {
        assert_eq!(Process::new(1, 0, 1).effective_priority(), i32::MIN);
        assert_eq!(Process::new(1, 0, 1).with_priority(-4).effective_priority(), -4);
    }
}
