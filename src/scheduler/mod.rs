//! Simulation engine.
//!
//! Runs one scheduling policy over a fixed process set and assembles the
//! per-process metrics and Gantt timeline.
//!
//! # Pipeline
//!
//! 1. Validate the request (all issues reported at once).
//! 2. Build process records ([`ProcessRegistry`]).
//! 3. Run the selected policy on fresh per-run state.
//! 4. Assemble outcomes, averages and the timeline into a [`SimulationReport`].
//!
//! Runs share no state, so independent requests may be simulated in
//! parallel without locking.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod metrics;
mod non_preemptive;
mod preemptive;
mod state;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::SimulationReport;
use crate::policy::Policy;
use crate::registry::ProcessRegistry;
use crate::validation::{validate_request, ValidationError};
use state::SimulationState;

/// Input container for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Policy to simulate, with its parameters.
    #[serde(flatten)]
    pub policy: Policy,
    /// Arrival time per process, in input order.
    pub arrivals: Vec<i64>,
    /// Burst time per process, in input order.
    pub bursts: Vec<i64>,
}

impl SimulationRequest {
    /// Creates a new request.
    pub fn new(policy: Policy, arrivals: Vec<i64>, bursts: Vec<i64>) -> Self {
        Self {
            policy,
            arrivals,
            bursts,
        }
    }

    /// First-Come-First-Served request.
    pub fn fcfs(arrivals: Vec<i64>, bursts: Vec<i64>) -> Self {
        Self::new(Policy::Fcfs, arrivals, bursts)
    }

    /// Shortest-Job-First request.
    pub fn sjf(arrivals: Vec<i64>, bursts: Vec<i64>) -> Self {
        Self::new(Policy::Sjf, arrivals, bursts)
    }

    /// Shortest-Remaining-Time-First request.
    pub fn srtf(arrivals: Vec<i64>, bursts: Vec<i64>) -> Self {
        Self::new(Policy::Srtf, arrivals, bursts)
    }

    /// Round-Robin request.
    pub fn round_robin(arrivals: Vec<i64>, bursts: Vec<i64>, quantum: i64) -> Self {
        Self::new(Policy::RoundRobin { quantum }, arrivals, bursts)
    }

    /// Non-preemptive Priority request.
    pub fn priority(arrivals: Vec<i64>, bursts: Vec<i64>, priorities: Vec<i32>) -> Self {
        Self::new(Policy::Priority { priorities }, arrivals, bursts)
    }

    /// Replaces the policy, keeping the workload.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }
}

/// Deterministic uniprocessor scheduling simulator.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::scheduler::{SimulationRequest, Simulator};
///
/// let request = SimulationRequest::round_robin(vec![0, 1, 2], vec![4, 3, 2], 2);
/// let report = Simulator::new().run(&request).unwrap();
///
/// assert_eq!(report.start_times(), vec![0, 2, 4]);
/// assert_eq!(report.completion_times(), vec![8, 9, 6]);
/// assert!((report.average_waiting - 11.0 / 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    horizon_slack: i64,
}

impl Simulator {
    /// Creates a simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra clock units tolerated past `max(arrival) + sum(burst)` before
    /// a run is declared defective and aborted.
    pub fn with_horizon_slack(mut self, slack: i64) -> Self {
        self.horizon_slack = slack.max(0);
        self
    }

    /// Simulates a request.
    ///
    /// Returns every validation issue before any simulation state is
    /// created. Panics only on an internal scheduler defect.
    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationReport, Vec<ValidationError>> {
        validate_request(request)?;

        let mut registry = ProcessRegistry::from_sequences(&request.arrivals, &request.bursts)
            .map_err(|e| vec![e])?;
        if let Policy::Priority { priorities } = &request.policy {
            registry = registry.with_priorities(priorities).map_err(|e| vec![e])?;
        }

        let policy = &request.policy;
        debug!("{policy}: simulating {} processes", registry.len());

        let horizon = self.horizon_for(&registry).map_err(|e| vec![e])?;
        let mut state = SimulationState::new(registry.processes(), horizon, policy.name());
        match policy {
            Policy::Fcfs => non_preemptive::fcfs(&mut state),
            Policy::Sjf => non_preemptive::sjf(&mut state),
            Policy::Priority { .. } => non_preemptive::priority(&mut state),
            Policy::Srtf => preemptive::srtf(&mut state),
            Policy::RoundRobin { quantum } => preemptive::round_robin(&mut state, *quantum),
        }

        let report = metrics::assemble(policy, state);
        debug!(
            "{policy}: makespan={} segments={} avg_turnaround={:.3} avg_waiting={:.3}",
            report.makespan,
            report.timeline.len(),
            report.average_turnaround,
            report.average_waiting
        );
        Ok(report)
    }

    /// Clock bound past which a run over `registry` is aborted as defective.
    fn horizon_for(&self, registry: &ProcessRegistry) -> Result<i64, ValidationError> {
        Ok(registry.horizon()?.saturating_add(self.horizon_slack))
    }

    /// Runs several policies over the same workload, one report each.
    ///
    /// Stops at the first policy whose request fails validation.
    pub fn compare(
        &self,
        arrivals: &[i64],
        bursts: &[i64],
        policies: &[Policy],
    ) -> Result<Vec<SimulationReport>, Vec<ValidationError>> {
        policies
            .iter()
            .map(|policy| {
                self.run(&SimulationRequest::new(
                    policy.clone(),
                    arrivals.to_vec(),
                    bursts.to_vec(),
                ))
            })
            .collect()
    }
}

/// Simulates a request with default settings.
pub fn simulate(request: &SimulationRequest) -> Result<SimulationReport, Vec<ValidationError>> {
    Simulator::new().run(request)
}
