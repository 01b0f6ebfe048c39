//! Uniprocessor CPU scheduling simulator.
//!
//! Computes per-process timing outcomes (start, completion, waiting,
//! turnaround) for a fixed set of synthetic processes under a classical
//! scheduling policy, and emits the Gantt timeline of the run.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `GanttSegment`, `Timeline`,
//!   `ProcessOutcome`, `SimulationReport`
//! - **`policy`**: The closed set of policies: FCFS, SJF, SRTF,
//!   Round-Robin, Priority
//! - **`registry`**: Builds immutable process records from input sequences
//! - **`scheduler`**: The simulation engine (`Simulator`, `SimulationRequest`)
//! - **`validation`**: Request precondition checks
//! - **`input`**: Parsing of whitespace-separated integer text fields
//! - **`workload`**: Seeded random workload generation
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::scheduler::{simulate, SimulationRequest};
//!
//! let report = simulate(&SimulationRequest::sjf(vec![0, 1, 2], vec![4, 3, 2])).unwrap();
//! assert_eq!(report.start_times(), vec![0, 6, 4]);
//! assert_eq!(report.waiting_times(), vec![0, 5, 2]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod input;
pub mod models;
pub mod policy;
pub mod registry;
pub mod scheduler;
pub mod validation;
pub mod workload;
