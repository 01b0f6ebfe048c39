//! Scheduling policies.
//!
//! A closed set of classical uniprocessor policies. Policy-specific
//! parameters travel inside the variant, so selecting a scheduler is an
//! exhaustive match rather than a lookup by name.
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | FCFS | no | earliest arrival |
//! | SJF | no | shortest burst among arrived |
//! | SRTF | yes | shortest remaining time, re-evaluated continuously |
//! | Round-Robin | yes | FIFO ready queue, fixed quantum |
//! | Priority | no | highest priority among arrived |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A CPU scheduling policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Shortest-Remaining-Time-First (preemptive SJF).
    Srtf,
    /// Round-Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum contiguous run per dispatch. Must be positive.
        quantum: i64,
    },
    /// Non-preemptive priority (higher value = more urgent).
    Priority {
        /// One priority per process, in input order.
        priorities: Vec<i32>,
    },
}

impl Policy {
    /// Short policy name (e.g. "SRTF").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Srtf => "SRTF",
            Self::RoundRobin { .. } => "RR",
            Self::Priority { .. } => "PRIORITY",
        }
    }

    /// Human-readable policy name.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Fcfs => "First Come First Serve",
            Self::Sjf => "Shortest Job First",
            Self::Srtf => "Shortest Remaining Time First",
            Self::RoundRobin { .. } => "Round Robin",
            Self::Priority { .. } => "Priority (Non-Preemptive)",
        }
    }

    /// Whether a process's service may be split across several segments.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::Srtf | Self::RoundRobin { .. })
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "{} (q={quantum})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}
