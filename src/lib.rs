//! Declarative acceptance-test runner
//!
//! A suite file lists named actions (HTTP checks, shell-script checks,
//! runtime-config mutations). Actions run in order, optionally gated on
//! the failures of earlier suites, and each ends PASSED, FAILED or SKIPPED.

pub mod asserts;
pub mod cli;
pub mod commands;
pub mod common;
pub mod conditions;
pub mod executors;
pub mod report;
pub mod runner;
pub mod suite;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use runner::{ActionOutcome, RunStatus, SuiteReport};
