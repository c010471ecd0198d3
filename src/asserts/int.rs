//! Integer rule evaluation

use super::{Assertion, Failure, Outcome};
use crate::suite::IntAssert;

impl Assertion for IntAssert {
    type Subject = i64;

    /// Order: equals, atLeast, atMost, lessThan, greaterThan, notEquals
    fn check(&self, value: &i64) -> Outcome {
        let value = *value;
        if let Some(expected) = self.equals {
            if value != expected {
                return Err(Failure::new(format!(
                    "Should have equaled {expected}, but was {value}"
                )));
            }
        }
        if let Some(bound) = self.at_least {
            if value < bound {
                return Err(Failure::new(format!(
                    "Should have been at least {bound}, but was {value}"
                )));
            }
        }
        if let Some(bound) = self.at_most {
            if value > bound {
                return Err(Failure::new(format!(
                    "Should have been at most {bound}, but was {value}"
                )));
            }
        }
        if let Some(bound) = self.less_than {
            if value >= bound {
                return Err(Failure::new(format!(
                    "Should have been less than {bound}, but was {value}"
                )));
            }
        }
        if let Some(bound) = self.greater_than {
            if value <= bound {
                return Err(Failure::new(format!(
                    "Should have been greater than {bound}, but was {value}"
                )));
            }
        }
        if let Some(other) = self.not_equals {
            if value == other {
                return Err(Failure::new(format!(
                    "Should have been different from {other}, but was {value}"
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

    #[test]
    fn test_equals() {
        let rule = IntAssert {
            equals: Some(10),
            ..Default::default()
        };
        assert_should_pass(&10, &rule);
        let f = assert_should_fail(&12, &rule);
        assert_eq!(f.message(), "Should have equaled 10, but was 12");
    }

    #[test]
    fn test_not_equals() {
        let rule = IntAssert {
            not_equals: Some(10),
            ..Default::default()
        };
        assert_should_fail(&10, &rule);
        assert_should_pass(&12, &rule);
    }

    #[test]
    fn test_at_least() {
        let rule = IntAssert {
            at_least: Some(0),
            ..Default::default()
        };
        assert_should_pass(&10, &rule);
        assert_should_pass(&0, &rule);
        assert_should_fail(&-1, &rule);
    }

    #[test]
    fn test_at_most() {
        let rule = IntAssert {
            at_most: Some(10),
            ..Default::default()
        };
        assert_should_pass(&10, &rule);
        assert_should_pass(&0, &rule);
        assert_should_fail(&11, &rule);
    }

    #[test]
    fn test_less_than() {
        let rule = IntAssert {
            less_than: Some(0),
            ..Default::default()
        };
        assert_should_pass(&-1, &rule);
        assert_should_fail(&0, &rule);
        assert_should_fail(&10, &rule);
    }

    #[test]
    fn test_greater_than() {
        let rule = IntAssert {
            greater_than: Some(10),
            ..Default::default()
        };
        assert_should_pass(&11, &rule);
        assert_should_fail(&10, &rule);
        assert_should_fail(&9, &rule);
    }

    #[test]
    fn test_empty_rule_passes_everything() {
        let rule = IntAssert::default();
        assert_should_pass(&i64::MIN, &rule);
        assert_should_pass(&0, &rule);
        assert_should_pass(&i64::MAX, &rule);
    }

    #[test]
    fn test_first_violated_bound_is_reported() {
        // Violates atLeast, lessThan and notEquals; atLeast comes first.
        let rule = IntAssert {
            at_least: Some(5),
            less_than: Some(0),
            not_equals: Some(3),
            ..Default::default()
        };
        let f = assert_should_fail(&3, &rule);
        assert_eq!(f.message(), "Should have been at least 5, but was 3");

        // Only lessThan and notEquals violated.
        let rule = IntAssert {
            less_than: Some(0),
            not_equals: Some(3),
            ..Default::default()
        };
        let f = assert_should_fail(&3, &rule);
        assert_eq!(f.message(), "Should have been less than 0, but was 3");
    }

    #[test]
    fn test_combined_range() {
        let rule = IntAssert {
            at_least: Some(200),
            less_than: Some(300),
            ..Default::default()
        };
        assert_should_pass(&200, &rule);
        assert_should_pass(&299, &rule);
        assert_should_fail(&300, &rule);
        assert_should_fail(&199, &rule);
    }
}
