//! Process registry.
//!
//! Builds the immutable process records of one simulation run from
//! caller-supplied sequences. Ids are assigned by input order starting at 1.
//!
//! The registry assumes sequences already passed
//! [`validate_input`](crate::validation::validate_input) and only re-checks
//! lengths, id capacity and the horizon bound, failing fast with a
//! [`ValidationError`].

use crate::models::Process;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Immutable set of processes for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRegistry {
    processes: Vec<Process>,
}

impl ProcessRegistry {
    /// Builds processes from arrival and burst sequences of equal length.
    pub fn from_sequences(arrivals: &[i64], bursts: &[i64]) -> Result<Self, ValidationError> {
        if arrivals.len() != bursts.len() {
            return Err(ValidationError::new(
                ValidationErrorKind::LengthMismatch,
                format!(
                    "Amount of arrival times ({}) and burst times ({}) do not match",
                    arrivals.len(),
                    bursts.len()
                ),
            ));
        }

        let processes = arrivals
            .iter()
            .zip(bursts)
            .enumerate()
            .map(|(i, (&arrival, &burst))| process_id(i).map(|id| Process::new(id, arrival, burst)))
            .collect::<Result<Vec<_>, ValidationError>>()?;

        Ok(Self { processes })
    }

    /// Attaches one priority per process, in input order.
    pub fn with_priorities(mut self, priorities: &[i32]) -> Result<Self, ValidationError> {
        if priorities.len() != self.processes.len() {
            return Err(ValidationError::new(
                ValidationErrorKind::LengthMismatch,
                format!(
                    "Amount of priorities ({}) and processes ({}) do not match",
                    priorities.len(),
                    self.processes.len()
                ),
            ));
        }

        for (process, &priority) in self.processes.iter_mut().zip(priorities) {
            process.priority = Some(priority);
        }
        Ok(self)
    }

    /// Processes in id order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the registry holds no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Upper bound on the clock of any correct run: every idle gap ends at
    /// some arrival, so no process can complete later than this.
    ///
    /// Fails with [`ValidationErrorKind::TimeOverflow`] when the bound does
    /// not fit in `i64`.
    pub fn horizon(&self) -> Result<i64, ValidationError> {
        let arrivals = self.processes.iter().map(|p| p.arrival_time);
        let bursts = self.processes.iter().map(|p| p.burst_time);
        checked_horizon(arrivals, bursts).ok_or_else(horizon_overflow)
    }
}

/// `max(arrival) + sum(burst)`, or `None` on `i64` overflow.
pub(crate) fn checked_horizon(
    arrivals: impl Iterator<Item = i64>,
    mut bursts: impl Iterator<Item = i64>,
) -> Option<i64> {
    let last_arrival = arrivals.max().unwrap_or(0);
    bursts.try_fold(last_arrival, i64::checked_add)
}

pub(crate) fn horizon_overflow() -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::TimeOverflow,
        format!(
            "Latest arrival plus total burst time exceeds the supported maximum ({})",
            i64::MAX
        ),
    )
}

/// Id of the process at input position `index`.
fn process_id(index: usize) -> Result<u32, ValidationError> {
    index
        .checked_add(1)
        .and_then(|id| u32::try_from(id).ok())
        .ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::TooManyProcesses,
                format!("At most {} processes are supported", u32::MAX),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_input_order() {
        let reg = ProcessRegistry::from_sequences(&[2, 0, 1], &[5, 6, 7]).unwrap();
        let ids: Vec<u32> = reg.processes().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(reg.processes()[1].arrival_time, 0);
        assert_eq!(reg.processes()[1].burst_time, 6);
        assert!(reg.processes().iter().all(|p| p.priority.is_none()));
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn test_length_mismatch_fails_fast() {
        let err = ProcessRegistry::from_sequences(&[0, 1], &[1]).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::LengthMismatch);
    }

    #[test]
    fn test_with_priorities() {
        let reg = ProcessRegistry::from_sequences(&[0, 1, 2], &[4, 3, 2])
            .unwrap()
            .with_priorities(&[1, 3, 2])
            .unwrap();
        let prios: Vec<Option<i32>> = reg.processes().iter().map(|p| p.priority).collect();
        assert_eq!(prios, vec![Some(1), Some(3), Some(2)]);
    }

    #[test]
    fn test_priority_length_mismatch() {
        let err = ProcessRegistry::from_sequences(&[0, 1], &[1, 1])
            .unwrap()
            .with_priorities(&[1])
            .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::LengthMismatch);
    }

    #[test]
    fn test_horizon() {
        let reg = ProcessRegistry::from_sequences(&[0, 10, 3], &[2, 2, 2]).unwrap();
        assert_eq!(reg.horizon().unwrap(), 16);
        assert_eq!(
            ProcessRegistry::from_sequences(&[], &[]).unwrap().horizon().unwrap(),
            0
        );
    }

    #[test]
    fn test_horizon_overflow_is_reported() {
        let reg = ProcessRegistry::from_sequences(&[1], &[i64::MAX]).unwrap();
        assert_eq!(
            reg.horizon().unwrap_err().kind,
            ValidationErrorKind::TimeOverflow
        );

        let half = i64::MAX / 2 + 1;
        let reg = ProcessRegistry::from_sequences(&[0, 0], &[half, half]).unwrap();
        assert!(reg.horizon().is_err());

        let reg = ProcessRegistry::from_sequences(&[0, 0], &[half, half - 1]).unwrap();
        assert_eq!(reg.horizon().unwrap(), i64::MAX);
    }

    #[test]
    fn test_process_id_capacity() {
        assert_eq!(process_id(0).unwrap(), 1);
        assert_eq!(process_id(u32::MAX as usize - 1).unwrap(), u32::MAX);
        assert_eq!(
            process_id(u32::MAX as usize).unwrap_err().kind,
            ValidationErrorKind::TooManyProcesses
        );
    }
}
