//! Assertion engine
//!
//! Each rule shape implements [`Assertion`] for the one value type it can
//! judge, so presenting a string to an integer rule does not compile.
//! Predicates are checked in a fixed order and the first one that fails
//! produces the whole report; failures are never aggregated.
//!
//! Failure messages are chained into breadcrumbs from the outermost
//! context to the innermost predicate, e.g.
//! `Unexpected body text content > Html > Title > Should have been: ...`.

mod html;
mod int;
mod string;

use std::fmt;

pub use html::{NO_TITLE, PARSE_FAILED};

/// A single, human-readable assertion failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure(String);

/// Outcome of evaluating a rule: `Ok(())` passes
pub type Outcome = std::result::Result<(), Failure>;

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Place this failure under `context`
    pub fn within(self, context: &str) -> Self {
        Self(message_with_context(&self.0, context))
    }

    pub fn message(&self) -> &str {
        &self.0
    }

    pub fn into_message(self) -> String {
        self.0
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hierarchically place `msg` within `context`
pub fn message_with_context(msg: &str, context: &str) -> String {
    format!("{context} > {msg}")
}

/// A rule that can judge values of one type
pub trait Assertion {
    /// The value type this rule is evaluated against
    type Subject: ?Sized;

    /// Check `value`, stopping at the first failing predicate
    fn check(&self, value: &Self::Subject) -> Outcome;
}

/// Assert `value` against `rule`
pub fn do_assert<A: Assertion + ?Sized>(value: &A::Subject, rule: &A) -> Outcome {
    rule.check(value)
}

/// Assert against an optional rule, wrapping any failure in `context`
///
/// An absent rule passes.
pub fn assert_within<A: Assertion + ?Sized>(
    value: &A::Subject,
    rule: Option<&A>,
    context: &str,
) -> Outcome {
    match rule {
        Some(rule) => rule.check(value).map_err(|f| f.within(context)),
        None => Ok(()),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    pub fn assert_should_pass<A: Assertion + ?Sized>(value: &A::Subject, rule: &A)
    where
        A::Subject: fmt::Debug,
    {
        if let Err(f) = do_assert(value, rule) {
            panic!("Expected to pass for value: {value:?}\n...but failed with error: {f}");
        }
    }

    pub fn assert_should_fail<A: Assertion + ?Sized>(value: &A::Subject, rule: &A) -> Failure
    where
        A::Subject: fmt::Debug,
    {
        match do_assert(value, rule) {
            Ok(()) => panic!("Expected to fail but was passing for value: {value:?}"),
            Err(f) => f,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::{IntAssert, StringAssert};

    #[test]
    fn test_message_with_context() {
        assert_eq!(message_with_context("boom", "Outer"), "Outer > boom");
    }

    #[test]
    fn test_context_chaining_builds_breadcrumbs() {
        let f = Failure::new("inner").within("Middle").within("Outer");
        assert_eq!(f.message(), "Outer > Middle > inner");
    }

    #[test]
    fn test_assert_within_absent_rule_passes() {
        assert!(assert_within::<IntAssert>(&5, None, "Ctx").is_ok());
    }

    #[test]
    fn test_assert_within_wraps_failure() {
        let rule = StringAssert {
            contains: Some("OK".to_string()),
            ..Default::default()
        };
        let f = assert_within("403 Forbidden", Some(&rule), "Unexpected response status text")
            .unwrap_err();
        assert!(f
            .message()
            .starts_with("Unexpected response status text > Should have contained:"));
    }
}
