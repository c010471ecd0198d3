//! Run-scoped state carried across suites

use super::outcome::SuiteReport;

/// Cumulative failures across every suite run so far
///
/// Only updated between suites, so conditions inside a suite observe the
/// count as it was when that suite started.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    failure_count: u64,
}

impl RunStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures_so_far(&self) -> u64 {
        self.failure_count
    }

    /// Add a finished suite's failures
    pub fn record_suite(&mut self, report: &SuiteReport) {
        self.failure_count += report.failed() as u64;
    }

    /// Process exit status for this run
    ///
    /// Equals the failure count, capped below the fatal-error status 255.
    pub fn exit_code(&self) -> i32 {
        self.failure_count.min(254) as i32
    }
}
