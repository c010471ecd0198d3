//! Action orchestration
//!
//! Runs a suite's actions strictly in order. For each action: check the
//! name, evaluate its condition, dispatch the selected test variant to its
//! executor and judge what the executor observed. The caller owns the
//! [`RunStatus`] and records the returned report once the suite is done.

mod outcome;
mod status;

pub use outcome::{
    ActionOutcome, ActionResult, SuiteReport, OUTCOME_FAILED, OUTCOME_PASSED, OUTCOME_SKIPPED,
};
pub use status::RunStatus;

use crate::asserts::{assert_within, Failure, Outcome};
use crate::common::{Error, Result};
use crate::conditions::{self, Gate};
use crate::executors::{Executors, HttpRequest, HttpResponse, ProcessOutput};
use crate::suite::{Action, ActionTest, BashTest, CliExpect, GcpAction, HttpExpect, HttpTest, Suite};

const DEFAULT_METHOD: &str = "GET";

/// Run every action of a suite
///
/// A nameless action is a fatal configuration error and aborts the suite.
pub async fn run_suite(
    suite: &Suite,
    status: &RunStatus,
    executors: &Executors,
) -> Result<SuiteReport> {
    let mut report = SuiteReport::default();
    for (index, action) in suite.actions.iter().enumerate() {
        let result = run_action(index, action, status, executors).await?;
        report.results.push(result);
    }
    Ok(report)
}

/// Run one action to its terminal state
pub async fn run_action(
    index: usize,
    action: &Action,
    status: &RunStatus,
    executors: &Executors,
) -> Result<ActionResult> {
    if action.name.is_empty() {
        return Err(Error::MissingActionName { index });
    }

    let mut result = ActionResult {
        index,
        name: action.name.clone(),
        outcome: ActionOutcome::Passed,
    };
    tracing::info!(" > {}", result.display_name());

    result.outcome = match conditions::evaluate(action.condition.as_ref(), status.failures_so_far()) {
        Gate::Skip(reason) => ActionOutcome::Skipped(reason),
        Gate::Proceed => match dispatch(action, executors).await {
            Ok(()) => ActionOutcome::Passed,
            Err(failure) => ActionOutcome::Failed(failure.into_message()),
        },
    };

    match &result.outcome {
        ActionOutcome::Passed => tracing::info!(" {}", OUTCOME_PASSED),
        ActionOutcome::Skipped(reason) => {
            tracing::info!(" {}: Condition not satisfied > {}", OUTCOME_SKIPPED, reason)
        }
        ActionOutcome::Failed(msg) => tracing::error!(" {} > {}", OUTCOME_FAILED, msg),
    }

    Ok(result)
}

async fn dispatch(action: &Action, executors: &Executors) -> Outcome {
    let tests = action.populated_tests();
    if tests.len() > 1 {
        let kinds: Vec<&str> = tests.iter().map(ActionTest::kind).collect();
        tracing::warn!(
            "Action '{}' defines {:?}; only {} runs",
            action.name,
            kinds,
            tests[0].kind()
        );
    }

    match tests.first() {
        Some(ActionTest::Http(test)) => run_http_test(test, executors).await,
        Some(ActionTest::Gcp(gcp)) => run_gcp_action(gcp, executors).await,
        Some(ActionTest::Bash(test)) => run_bash_test(test, executors).await,
        None => Ok(()),
    }
}

async fn run_http_test(test: &HttpTest, executors: &Executors) -> Outcome {
    if test.url.is_empty() {
        return Err(Failure::new("Url is required").within("Malformed HttpTest"));
    }
    let request = HttpRequest {
        url: &test.url,
        method: test.method.as_deref().unwrap_or(DEFAULT_METHOD),
        headers: &test.headers,
    };
    let response = executors.http.execute(request).await?;
    check_http_response(&test.expect, &response)
}

/// Judge an HTTP response: status code, then status text, then body
pub fn check_http_response(expect: &HttpExpect, response: &HttpResponse) -> Outcome {
    assert_within(
        &i64::from(response.status_code),
        expect.status_code.as_ref(),
        "Unexpected response status code",
    )?;
    assert_within(
        response.status_text.as_str(),
        expect.status_text.as_ref(),
        "Unexpected response status text",
    )?;
    assert_within(
        response.body.as_str(),
        expect.body_text.as_ref(),
        "Unexpected body text content",
    )
}

async fn run_bash_test(test: &BashTest, executors: &Executors) -> Outcome {
    let output = executors
        .script
        .run(&test.script)
        .await
        .map_err(|f| f.within("Failed to execute bash script"))?;
    match &test.expect {
        Some(expect) => check_process_output(expect, &output),
        None => Ok(()),
    }
}

/// Judge a finished process: exit code, then stdout, then stderr
pub fn check_process_output(expect: &CliExpect, output: &ProcessOutput) -> Outcome {
    assert_within(
        &i64::from(output.exit_code),
        expect.exit_code.as_ref(),
        "Unexpected exit status code",
    )?;
    assert_within(
        output.stdout.as_str(),
        expect.stdout.as_ref(),
        "Unexpected standard output stream",
    )?;
    assert_within(
        output.stderr.as_str(),
        expect.stderr.as_ref(),
        "Unexpected standard error stream",
    )
}

async fn run_gcp_action(gcp: &GcpAction, executors: &Executors) -> Outcome {
    match &gcp.set_runtime_config_var {
        Some(request) => executors.runtime_config.set_variable(request).await,
        None => Ok(()),
    }
}
