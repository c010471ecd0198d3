//! String rule evaluation

use regex::Regex;

use super::{Assertion, Failure, Outcome};
use crate::suite::StringAssert;

impl Assertion for StringAssert {
    type Subject = str;

    /// Order: exactly, notContains, equals (trimmed), contains, matches
    fn check(&self, value: &str) -> Outcome {
        if let Some(expected) = &self.exactly {
            if value != expected {
                return Err(Failure::new(format!(
                    "Should have matched exactly:\n{expected}\n... but was:\n{value}"
                )));
            }
        }
        if let Some(excluded) = &self.not_contains {
            if value.contains(excluded.as_str()) {
                return Err(Failure::new(format!(
                    "Should have not contained:\n{excluded}\n... but was:\n{value}"
                )));
            }
        }
        if let Some(expected) = &self.equals {
            let trimmed = value.trim();
            if trimmed != expected {
                return Err(Failure::new(format!(
                    "Should have been:\n{expected}\n... but was:\n{trimmed}"
                )));
            }
        }
        if let Some(needle) = &self.contains {
            if !value.contains(needle.as_str()) {
                return Err(Failure::new(format!(
                    "Should have contained:\n{needle}\n... but was:\n{value}"
                )));
            }
        }
        if let Some(pattern) = &self.matches {
            let re = Regex::new(pattern)
                .map_err(|_| Failure::new(format!("Regex failed to compile: {pattern}")))?;
            if !re.is_match(value) {
                return Err(Failure::new(format!(
                    "Should have matched regex:\n{pattern}\n... but was:\n{value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{assert_should_fail, assert_should_pass};
    use super::*;

    fn rule(build: impl FnOnce(&mut StringAssert)) -> StringAssert {
        let mut rule = StringAssert::default();
        build(&mut rule);
        rule
    }

    #[test]
    fn test_exactly() {
        let r = rule(|r| r.exactly = Some("to be exact".into()));
        assert_should_pass("to be exact", &r);
        assert_should_fail("\nto be exact", &r);
        assert_should_fail("to be exact\n", &r);
        assert_should_fail(" to be exact", &r);
        assert_should_fail("to be exact ", &r);

        let r = rule(|r| r.exactly = Some(String::new()));
        assert_should_pass("", &r);
        assert_should_fail("\n", &r);
        assert_should_fail("a", &r);
    }

    #[test]
    fn test_equals_trims_observed_value() {
        let r = rule(|r| r.equals = Some("to be equal".into()));
        assert_should_pass("to be equal", &r);
        assert_should_pass("\nto be equal", &r);
        assert_should_pass("to be equal\n", &r);
        assert_should_pass(" to be equal", &r);
        assert_should_pass("to be equal ", &r);
        assert_should_fail("to be different", &r);
        assert_should_fail("to be equal\nbut", &r);

        let r = rule(|r| r.equals = Some(String::new()));
        assert_should_pass("", &r);
        assert_should_pass("\n", &r);
        assert_should_fail("a", &r);
    }

    #[test]
    fn test_equals_does_not_trim_expected_value() {
        let r = rule(|r| r.equals = Some(" padded ".into()));
        assert_should_fail(" padded ", &r);
    }

    #[test]
    fn test_contains() {
        let r = rule(|r| r.contains = Some("more".into()));
        assert_should_pass("Jane is more fun", &r);
        assert_should_pass("more is less", &r);
        assert_should_pass("less is more", &r);
        assert_should_fail("Jane is fun", &r);
    }

    #[test]
    fn test_matches_is_a_substring_search() {
        let r = rule(|r| r.matches = Some("a[bc]d".into()));
        assert_should_pass("abd", &r);
        assert_should_pass("123acd456", &r);
        assert_should_fail("ad", &r);
    }

    #[test]
    fn test_not_contains() {
        let r = rule(|r| r.not_contains = Some("to be excluded".into()));
        assert_should_fail("to be excluded", &r);
        assert_should_fail("\nto be excluded", &r);
        assert_should_fail("to be excluded\n", &r);
        assert_should_fail(" to be excluded", &r);
        assert_should_fail("to be excluded ", &r);

        let r = rule(|r| r.not_contains = Some(String::new()));
        assert_should_fail("\n", &r);
        assert_should_fail("a", &r);

        let r = rule(|r| r.not_contains = Some("more".into()));
        assert_should_fail("Jane is more fun", &r);
        assert_should_fail("lessmoreless", &r);
        assert_should_pass("Jane is fun", &r);
    }

    #[test]
    fn test_bad_regex_is_a_failure() {
        let r = rule(|r| r.matches = Some(r"\".into()));
        let f = assert_should_fail(r"\", &r);
        assert_eq!(f.message(), r"Regex failed to compile: \");
    }

    #[test]
    fn test_check_order_reports_not_contains_before_equals() {
        let r = rule(|r| {
            r.equals = Some("expected".into());
            r.not_contains = Some("bad".into());
        });
        let f = assert_should_fail("bad value", &r);
        assert!(f.message().starts_with("Should have not contained:"));
    }

    #[test]
    fn test_exactly_checked_first() {
        let r = rule(|r| {
            r.exactly = Some("x".into());
            r.contains = Some("zzz".into());
        });
        let f = assert_should_fail("y", &r);
        assert!(f.message().starts_with("Should have matched exactly:"));
    }
}
