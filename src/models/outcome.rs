//! Simulation outcome models.
//!
//! Per-process timing results plus the run-level summary returned to the
//! presentation layer.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |

use serde::{Deserialize, Serialize};

use super::Timeline;

/// Timing outcome of one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Process identifier.
    pub process_id: u32,
    /// Arrival time (copied from the process).
    pub arrival_time: i64,
    /// Burst time (copied from the process).
    pub burst_time: i64,
    /// Instant of the first dispatch.
    pub start_time: i64,
    /// Instant remaining work reached zero.
    pub completion_time: i64,
    /// Time spent ready but not running.
    pub waiting_time: i64,
    /// Time from arrival to completion.
    pub turnaround_time: i64,
}

impl ProcessOutcome {
    /// Delay between arrival and first dispatch.
    pub fn response_time(&self) -> i64 {
        self.start_time - self.arrival_time
    }
}

/// Complete result of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Short name of the policy that produced this report (e.g. "SRTF").
    pub policy: String,
    /// Per-process outcomes, in process id order.
    pub results: Vec<ProcessOutcome>,
    /// Gantt trace of the run.
    pub timeline: Timeline,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Mean waiting time.
    pub average_waiting: f64,
    /// Mean response time.
    pub average_response: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Time within `[0, makespan)` with no process running.
    pub idle_time: i64,
    /// Busy time / makespan (0.0..1.0).
    pub cpu_utilization: f64,
}

impl SimulationReport {
    /// Finds the outcome of a process.
    pub fn outcome_for(&self, process_id: u32) -> Option<&ProcessOutcome> {
        self.results.iter().find(|r| r.process_id == process_id)
    }

    /// Start times in process id order.
    pub fn start_times(&self) -> Vec<i64> {
        self.results.iter().map(|r| r.start_time).collect()
    }

    /// Completion times in process id order.
    pub fn completion_times(&self) -> Vec<i64> {
        self.results.iter().map(|r| r.completion_time).collect()
    }

    /// Waiting times in process id order.
    pub fn waiting_times(&self) -> Vec<i64> {
        self.results.iter().map(|r| r.waiting_time).collect()
    }

    /// Turnaround times in process id order.
    pub fn turnaround_times(&self) -> Vec<i64> {
        self.results.iter().map(|r| r.turnaround_time).collect()
    }
}
