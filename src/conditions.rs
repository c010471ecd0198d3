//! Condition evaluation
//!
//! Decides whether an action runs. This is a pure function of the
//! condition and the failure count the caller passes in; the runner only
//! feeds it failures from suites that have already finished.

use crate::asserts::Assertion;
use crate::suite::Condition;

/// Whether an action may run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    Proceed,
    /// The condition was not satisfied; carries the breadcrumb reason
    Skip(String),
}

impl Gate {
    pub fn proceeds(&self) -> bool {
        matches!(self, Gate::Proceed)
    }
}

/// Evaluate an optional condition against the failures seen so far
pub fn evaluate(condition: Option<&Condition>, failures_so_far: u64) -> Gate {
    let Some(condition) = condition else {
        return Gate::Proceed;
    };

    if let Some(rule) = &condition.failures_so_far {
        let count = i64::try_from(failures_so_far).unwrap_or(i64::MAX);
        if let Err(failure) = rule.check(&count) {
            return Gate::Skip(failure.within("Count of failures so far").into_message());
        }
    }

    Gate::Proceed
}
