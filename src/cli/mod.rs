//! Top-level driver
//!
//! Loads each suite in turn, runs it against the shared [`RunStatus`] and
//! records the suite's failures only once the whole suite has finished.

use crate::commands::RunArgs;
use crate::common::{Config, Error, Result};
use crate::executors::Executors;
use crate::report;
use crate::runner::{self, RunStatus};
use crate::suite::{load_suite, TemplateValues};

/// Run every suite named on the command line
///
/// Returns the process exit code. Fatal configuration errors are returned
/// as `Err` and end the run immediately.
pub async fn dispatch(args: RunArgs) -> Result<i32> {
    if args.test_specs.is_empty() {
        return Err(Error::NoSuites);
    }

    let config = Config::load(args.config.as_deref())?;
    let values = TemplateValues::load(&args.vars, args.test_spec_values.as_deref())?;
    let executors = Executors::from_config(&config)?;

    let status = run_suites(&args, &values, &executors).await?;

    if status.failures_so_far() > 0 {
        tracing::error!(">>> SUMMARY: {}", report::run_summary_line(&status));
    } else {
        tracing::info!(">>> SUMMARY: {}", report::run_summary_line(&status));
    }
    report::print_run(&status);

    Ok(status.exit_code())
}

/// Run the suites in order, threading one status through them
pub async fn run_suites(
    args: &RunArgs,
    values: &TemplateValues,
    executors: &Executors,
) -> Result<RunStatus> {
    let mut status = RunStatus::new();

    for path in &args.test_specs {
        tracing::info!(">>> Running {}", path.display());
        let suite = load_suite(path, values)?;
        if suite.actions.is_empty() {
            tracing::info!(" > Nothing to run!");
            report::print_empty_suite(path);
            continue;
        }

        let suite_report = runner::run_suite(&suite, &status, executors).await?;
        status.record_suite(&suite_report);
        tracing::debug!(
            "Suite {} done; {} failures so far",
            path.display(),
            status.failures_so_far()
        );
        report::print_suite(path, &suite_report);
    }

    Ok(status)
}
