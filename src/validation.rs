//! Input validation for simulation requests.
//!
//! Checks the preconditions of a run before any simulation state exists.
//! Detects:
//! - Empty input
//! - Arrival / burst / priority sequences of unequal length
//! - Negative arrival times
//! - Non-positive burst times
//! - Non-positive Round-Robin quantum
//! - Workloads whose time horizon does not fit in `i64`
//!
//! Malformed text tokens are reported by [`crate::input`] with the same
//! error type.

use std::fmt;

use crate::policy::Policy;
use crate::registry::{checked_horizon, horizon_overflow};
use crate::scheduler::SimulationRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyInput,
    /// Arrival, burst or priority sequences differ in length.
    LengthMismatch,
    /// A burst time is zero or negative.
    InvalidBurst,
    /// An arrival time is negative.
    InvalidArrival,
    /// Round-Robin quantum is zero or negative.
    InvalidQuantum,
    /// A raw input token is not an integer.
    MalformedToken,
    /// Latest arrival plus total burst time exceeds `i64::MAX`.
    TimeOverflow,
    /// More processes than `u32` ids can number.
    TooManyProcesses,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a simulation request.
///
/// Checks:
/// 1. At least one process
/// 2. Arrival and burst sequences have equal length
/// 3. All arrivals are non-negative
/// 4. All bursts are positive
/// 5. Round-Robin quantum is positive
/// 6. Priority sequence matches the process count
/// 7. `max(arrival) + sum(burst)` fits in `i64` (checked only once the
///    individual values are valid)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &SimulationRequest) -> ValidationResult {
    validate_input(&request.arrivals, &request.bursts, &request.policy)
}

/// Validates raw sequences against a policy.
///
/// See [`validate_request`].
pub fn validate_input(arrivals: &[i64], bursts: &[i64], policy: &Policy) -> ValidationResult {
    let mut errors = Vec::new();

    if arrivals.is_empty() && bursts.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "At least one process is required",
        ));
    }

    if arrivals.len() != bursts.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "Amount of arrival times ({}) and burst times ({}) do not match",
                arrivals.len(),
                bursts.len()
            ),
        ));
    }

    for (i, &arrival) in arrivals.iter().enumerate() {
        if arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrival,
                format!("Process {} has negative arrival time {arrival}", i + 1),
            ));
        }
    }

    for (i, &burst) in bursts.iter().enumerate() {
        if burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!("Process {} has non-positive burst time {burst}", i + 1),
            ));
        }
    }

    match policy {
        Policy::RoundRobin { quantum } if *quantum <= 0 => {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Round-Robin quantum must be positive, got {quantum}"),
            ));
        }
        Policy::Priority { priorities } if priorities.len() != arrivals.len() => {
            errors.push(ValidationError::new(
                ValidationErrorKind::LengthMismatch,
                format!(
                    "Amount of priorities ({}) and arrival times ({}) do not match",
                    priorities.len(),
                    arrivals.len()
                ),
            ));
        }
        _ => {}
    }

    if errors.is_empty()
        && checked_horizon(arrivals.iter().copied(), bursts.iter().copied()).is_none()
    {
        errors.push(horizon_overflow());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result
            .unwrap_err()
            .into_iter()
            .map(|e| e.kind)
            .collect()
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&[0, 1, 2], &[4, 3, 2], &Policy::Fcfs).is_ok());
        assert!(validate_input(&[0, 1], &[1, 1], &Policy::RoundRobin { quantum: 1 }).is_ok());
        assert!(validate_input(
            &[0, 1],
            &[1, 1],
            &Policy::Priority {
                priorities: vec![1, -1]
            }
        )
        .is_ok());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            kinds(validate_input(&[], &[], &Policy::Sjf)),
            vec![ValidationErrorKind::EmptyInput]
        );
    }

    #[test]
    fn test_length_mismatch() {
        let errors = validate_input(&[0, 1, 2], &[4, 3], &Policy::Fcfs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::LengthMismatch);
        assert!(errors[0].message.contains("do not match"));
    }

    #[test]
    fn test_priority_length_mismatch() {
        let policy = Policy::Priority {
            priorities: vec![1, 2],
        };
        assert_eq!(
            kinds(validate_input(&[0, 1, 2], &[4, 3, 2], &policy)),
            vec![ValidationErrorKind::LengthMismatch]
        );
    }

    #[test]
    fn test_invalid_arrival() {
        assert_eq!(
            kinds(validate_input(&[0, -1], &[1, 1], &Policy::Fcfs)),
            vec![ValidationErrorKind::InvalidArrival]
        );
    }

    #[test]
    fn test_invalid_burst() {
        let errors = validate_input(&[0, 1], &[0, -3], &Policy::Srtf).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidBurst));
        assert!(errors[1].message.contains("Process 2"));
    }

    #[test]
    fn test_invalid_quantum() {
        assert_eq!(
            kinds(validate_input(&[0], &[1], &Policy::RoundRobin { quantum: 0 })),
            vec![ValidationErrorKind::InvalidQuantum]
        );
        assert_eq!(
            kinds(validate_input(&[0], &[1], &Policy::RoundRobin { quantum: -2 })),
            vec![ValidationErrorKind::InvalidQuantum]
        );
    }

    #[test]
    fn test_multiple_errors() {
        let errors =
            validate_input(&[-1, 0, 3], &[0, 2], &Policy::RoundRobin { quantum: 0 }).unwrap_err();
        assert!(errors.len() >= 4);
    }

    #[test]
    fn test_time_overflow() {
        let half = i64::MAX / 2 + 1;
        assert_eq!(
            kinds(validate_input(&[0, 0], &[half, half], &Policy::Fcfs)),
            vec![ValidationErrorKind::TimeOverflow]
        );
        assert_eq!(
            kinds(validate_input(&[1], &[i64::MAX], &Policy::Srtf)),
            vec![ValidationErrorKind::TimeOverflow]
        );
        assert!(validate_input(&[0], &[i64::MAX], &Policy::Sjf).is_ok());
    }

    #[test]
    fn test_error_display() {
        let e = ValidationError::new(ValidationErrorKind::MalformedToken, "bad token 'x'");
        assert_eq!(e.to_string(), "bad token 'x'");
    }
}
