//! Text input parsing.
//!
//! Turns free-text form fields such as `"2 4 6 8 10"` into integer
//! sequences. Tokens are separated by whitespace; any token that is not an
//! integer is reported verbatim as [`ValidationErrorKind::MalformedToken`].

use std::str::FromStr;

use crate::policy::Policy;
use crate::scheduler::SimulationRequest;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Parses a whitespace-separated list of integers.
///
/// `field` names the input in error messages (e.g. "arrival times").
/// Every malformed token is reported, not only the first.
pub fn parse_times(field: &str, text: &str) -> Result<Vec<i64>, Vec<ValidationError>> {
    parse_tokens(field, text)
}

/// Parses priority values (see [`parse_times`]).
pub fn parse_priorities(text: &str) -> Result<Vec<i32>, Vec<ValidationError>> {
    parse_tokens("priorities", text)
}

fn parse_tokens<T: FromStr>(field: &str, text: &str) -> Result<Vec<T>, Vec<ValidationError>> {
    let mut values = Vec::new();
    let mut errors = Vec::new();

    for token in text.split_whitespace() {
        match token.parse::<T>() {
            Ok(v) => values.push(v),
            Err(_) => errors.push(ValidationError::new(
                ValidationErrorKind::MalformedToken,
                format!("Invalid value '{token}' in {field}"),
            )),
        }
    }

    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}

/// Builds a request from the arrival and burst text fields.
///
/// Parsing errors from both fields are collected together. For
/// [`Policy::Priority`] the priorities carried by `policy` are used as is;
/// use [`parse_priority_request`] to read them from a third field.
pub fn parse_request(
    policy: Policy,
    arrivals: &str,
    bursts: &str,
) -> Result<SimulationRequest, Vec<ValidationError>> {
    let (arrivals, bursts) = collect(
        parse_times("arrival times", arrivals),
        parse_times("burst times", bursts),
    )?;
    Ok(SimulationRequest::new(policy, arrivals, bursts))
}

/// Builds a Priority request from the arrival, burst and priority text
/// fields, collecting parsing errors from all three.
pub fn parse_priority_request(
    arrivals: &str,
    bursts: &str,
    priorities: &str,
) -> Result<SimulationRequest, Vec<ValidationError>> {
    let times = collect(
        parse_times("arrival times", arrivals),
        parse_times("burst times", bursts),
    );
    let ((arrivals, bursts), priorities) = collect(times, parse_priorities(priorities))?;
    Ok(SimulationRequest::priority(arrivals, bursts, priorities))
}

fn collect<A, B>(
    a: Result<A, Vec<ValidationError>>,
    b: Result<B, Vec<ValidationError>>,
) -> Result<(A, B), Vec<ValidationError>> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (a, b) => {
            let mut errors = a.err().unwrap_or_default();
            errors.extend(b.err().unwrap_or_default());
            Err(errors)
        }
    }
}
