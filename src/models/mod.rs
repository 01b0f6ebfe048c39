//! Simulation domain models.
//!
//! Provides the data types shared by every scheduling policy: the input
//! process records and the outputs (per-process outcomes, Gantt timeline,
//! run summary).
//!
//! # Lifecycle
//!
//! | Type | Created by | Mutated |
//! |------|-----------|---------|
//! | Process | Registry | never |
//! | Timeline | Active scheduler | during one run only |
//! | ProcessOutcome / SimulationReport | Assembler | never |

mod outcome;
mod process;
mod timeline;

pub use outcome::{ProcessOutcome, SimulationReport};
pub use process::Process;
pub use timeline::{GanttSegment, Timeline};
