//! Human-readable run summaries

use colored::Colorize;
use std::path::Path;

use crate::runner::{ActionOutcome, RunStatus, SuiteReport, OUTCOME_FAILED, OUTCOME_PASSED, OUTCOME_SKIPPED};

/// One line summarising a suite
pub fn suite_summary_line(report: &SuiteReport) -> String {
    if report.failed() == 0 && report.skipped() == 0 {
        return OUTCOME_PASSED.to_string();
    }
    format!(
        "{} {}, {} {}, {} {}",
        report.failed(),
        OUTCOME_FAILED,
        report.skipped(),
        OUTCOME_SKIPPED,
        report.passed(),
        OUTCOME_PASSED
    )
}

/// One line summarising the whole run
pub fn run_summary_line(status: &RunStatus) -> String {
    match status.failures_so_far() {
        0 => "All passed".to_string(),
        n => format!("{n} failed"),
    }
}

/// Print a suite's summary followed by one line per action
pub fn print_suite(path: &Path, report: &SuiteReport) {
    let summary = suite_summary_line(report);
    let summary = if report.failed() == 0 {
        summary.green().bold()
    } else {
        summary.red().bold()
    };
    println!("\n{} {}", "Suite:".blue().bold(), path.display().to_string().white().bold());
    println!(" >> Summary: {}", summary);

    for result in &report.results {
        let name = result.display_name();
        match &result.outcome {
            ActionOutcome::Passed => println!("  {} {}: {}", "✓".green(), name, OUTCOME_PASSED),
            ActionOutcome::Skipped(reason) => println!(
                "  {} {}: {}\n      {}",
                "-".yellow(),
                name,
                OUTCOME_SKIPPED.yellow(),
                format!("Condition not satisfied > {reason}").dimmed()
            ),
            ActionOutcome::Failed(msg) => println!(
                "  {} {}: {}\n      {}",
                "✗".red(),
                name,
                OUTCOME_FAILED.red(),
                msg.dimmed()
            ),
        }
    }
}

/// Print the empty-suite notice
pub fn print_empty_suite(path: &Path) {
    println!("\n{} {}", "Suite:".blue().bold(), path.display().to_string().white().bold());
    println!(" > {}", "Nothing to run!".dimmed());
}

/// Print the final run summary
pub fn print_run(status: &RunStatus) {
    let line = run_summary_line(status);
    if status.failures_so_far() == 0 {
        println!("\n>>> SUMMARY: {}\n", line.green().bold());
    } else {
        println!("\n>>> SUMMARY: {}\n", line.red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::ActionResult;

    fn report(outcomes: Vec<ActionOutcome>) -> SuiteReport {
        SuiteReport {
            results: outcomes
                .into_iter()
                .enumerate()
                .map(|(index, outcome)| ActionResult {
                    index,
                    name: format!("a{index}"),
                    outcome,
                })
                .collect(),
        }
    }

    #[test]
    fn test_all_passed_summary() {
        let r = report(vec![ActionOutcome::Passed, ActionOutcome::Passed]);
        assert_eq!(suite_summary_line(&r), "PASSED");
    }

    #[test]
    fn test_mixed_summary() {
        let r = report(vec![
            ActionOutcome::Passed,
            ActionOutcome::Failed("x".into()),
            ActionOutcome::Skipped("y".into()),
        ]);
        assert_eq!(suite_summary_line(&r), "1 FAILED, 1 SKIPPED, 1 PASSED");
    }

    #[test]
    fn test_run_summary() {
        let mut status = RunStatus::new();
        assert_eq!(run_summary_line(&status), "All passed");
        status.record_suite(&report(vec![ActionOutcome::Failed("x".into())]));
        assert_eq!(run_summary_line(&status), "1 failed");
    }
}
