//! Metrics and timeline assembly.
//!
//! Derives per-process outcomes and run-level averages uniformly from the
//! final state of whichever scheduler ran.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Average turnaround / waiting / response | arithmetic mean over processes |
//! | Idle time | makespan - busy time |
//! | CPU utilization | busy time / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use log::warn;

use super::state::SimulationState;
use crate::models::{ProcessOutcome, SimulationReport};
use crate::policy::Policy;

/// Builds the report of a finished run.
pub(crate) fn assemble(policy: &Policy, state: SimulationState<'_>) -> SimulationReport {
    let processes = state.processes();
    let (slots, timeline) = state.into_parts();

    let results: Vec<ProcessOutcome> = processes
        .iter()
        .zip(&slots)
        .map(|(process, slot)| {
            let start_time = slot.first_dispatch.unwrap_or_else(|| {
                warn!(
                    "{}: process {} was never dispatched, reporting arrival as start",
                    policy.name(),
                    process.id
                );
                process.arrival_time
            });
            let completion_time = slot.completion.unwrap_or_else(|| {
                timeline
                    .segments_for(process.id)
                    .last()
                    .map_or(start_time + process.burst_time, |s| s.end)
            });
            let turnaround_time = completion_time - process.arrival_time;

            ProcessOutcome {
                process_id: process.id,
                arrival_time: process.arrival_time,
                burst_time: process.burst_time,
                start_time,
                completion_time,
                waiting_time: turnaround_time - process.burst_time,
                turnaround_time,
            }
        })
        .collect();

    let makespan = timeline.makespan();
    let busy = timeline.busy_time();
    let cpu_utilization = if makespan > 0 {
        busy as f64 / makespan as f64
    } else {
        0.0
    };

    SimulationReport {
        policy: policy.name().to_string(),
        average_turnaround: mean(results.iter().map(|r| r.turnaround_time)),
        average_waiting: mean(results.iter().map(|r| r.waiting_time)),
        average_response: mean(results.iter().map(ProcessOutcome::response_time)),
        makespan,
        idle_time: makespan - busy,
        cpu_utilization,
        results,
        timeline,
    }
}

/// Real-valued mean; 0.0 for an empty sequence.
///
/// Sums in `i128`: each value is bounded by the horizon but their total is not.
fn mean(values: impl Iterator<Item = i64>) -> f64 {
    let (sum, count) = values.fold((0i128, 0usize), |(s, c), v| {
        (s + i128::from(v), c + 1)
    });
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
