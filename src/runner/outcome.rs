//! Per-action and per-suite results

use std::fmt;

pub const OUTCOME_PASSED: &str = "PASSED";
pub const OUTCOME_FAILED: &str = "FAILED";
pub const OUTCOME_SKIPPED: &str = "SKIPPED";

/// Terminal state of one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Passed,
    /// Carries the breadcrumb failure message
    Failed(String),
    /// Carries the condition's reason
    Skipped(String),
}

impl ActionOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            ActionOutcome::Passed => OUTCOME_PASSED,
            ActionOutcome::Failed(_) => OUTCOME_FAILED,
            ActionOutcome::Skipped(_) => OUTCOME_SKIPPED,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ActionOutcome::Failed(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ActionOutcome::Passed => None,
            ActionOutcome::Failed(msg) | ActionOutcome::Skipped(msg) => Some(msg),
        }
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one action, immutable once recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    /// Position within the suite
    pub index: usize,
    pub name: String,
    pub outcome: ActionOutcome,
}

impl ActionResult {
    /// `"  0: name"`, the label used in logs and reports
    pub fn display_name(&self) -> String {
        format!("{:3}: {}", self.index, self.name)
    }
}

/// Ordered results of one suite
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteReport {
    pub results: Vec<ActionResult>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.count(|o| matches!(o, ActionOutcome::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(ActionOutcome::is_failure)
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ActionOutcome::Skipped(_)))
    }

    fn count(&self, pred: impl Fn(&ActionOutcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(index: usize, outcome: ActionOutcome) -> ActionResult {
        ActionResult {
            index,
            name: format!("action {index}"),
            outcome,
        }
    }

    #[test]
    fn test_counts() {
        let report = SuiteReport {
            results: vec![
                result(0, ActionOutcome::Passed),
                result(1, ActionOutcome::Failed("x".into())),
                result(2, ActionOutcome::Skipped("y".into())),
                result(3, ActionOutcome::Failed("z".into())),
            ],
        };
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 2);
        assert_eq!(report.skipped(), 1);
    }

    #[test]
    fn test_display_name_pads_index() {
        assert_eq!(result(7, ActionOutcome::Passed).display_name(), "  7: action 7");
    }

    #[test]
    fn test_labels() {
        assert_eq!(ActionOutcome::Passed.to_string(), "PASSED");
        assert_eq!(ActionOutcome::Failed(String::new()).label(), "FAILED");
        assert_eq!(ActionOutcome::Skipped("why".into()).message(), Some("why"));
    }
}
