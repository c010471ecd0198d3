//! Suite and action configuration types
//!
//! Defines the data structures for deserializing YAML/JSON test suites.

use serde::Deserialize;
use std::collections::BTreeMap;

use super::rules::{Condition, IntAssert, StringAssert, TextContentAssert};

/// An ordered list of actions loaded from one suite file
#[derive(Deserialize, Debug, Default)]
pub struct Suite {
    #[serde(default)]
    pub actions: Vec<Action>,
}

/// A single named step of a suite
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Required; an empty name aborts the run
    #[serde(default)]
    pub name: String,
    /// Optional gate evaluated before the action runs
    pub condition: Option<Condition>,
    pub http_test: Option<HttpTest>,
    pub gcp: Option<GcpAction>,
    pub bash_test: Option<BashTest>,
}

/// The test variant an action runs
#[derive(Debug, Clone, Copy)]
pub enum ActionTest<'a> {
    Http(&'a HttpTest),
    Gcp(&'a GcpAction),
    Bash(&'a BashTest),
}

impl ActionTest<'_> {
    /// Short label used in logs and reports
    pub fn kind(&self) -> &'static str {
        match self {
            ActionTest::Http(_) => "HTTP",
            ActionTest::Gcp(_) => "GCP",
            ActionTest::Bash(_) => "Bash",
        }
    }
}

impl Action {
    /// Every populated test variant, in precedence order Http, Gcp, Bash
    pub fn populated_tests(&self) -> Vec<ActionTest<'_>> {
        let mut tests = Vec::with_capacity(1);
        if let Some(http) = &self.http_test {
            tests.push(ActionTest::Http(http));
        }
        if let Some(gcp) = &self.gcp {
            tests.push(ActionTest::Gcp(gcp));
        }
        if let Some(bash) = &self.bash_test {
            tests.push(ActionTest::Bash(bash));
        }
        tests
    }

    /// The variant that runs: the first populated one in precedence order
    pub fn test(&self) -> Option<ActionTest<'_>> {
        self.populated_tests().into_iter().next()
    }
}

/// An HTTP request plus expectations on the response
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct HttpTest {
    #[serde(default)]
    pub url: String,
    /// Defaults to GET
    pub method: Option<String>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub expect: HttpExpect,
}

/// Expectations for an HTTP response
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct HttpExpect {
    pub status_code: Option<IntAssert>,
    pub status_text: Option<StringAssert>,
    pub body_text: Option<TextContentAssert>,
}

/// A shell script plus expectations on the finished process
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct BashTest {
    #[serde(default)]
    pub script: String,
    pub expect: Option<CliExpect>,
}

/// Expectations for a finished process
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CliExpect {
    pub exit_code: Option<IntAssert>,
    pub stdout: Option<StringAssert>,
    pub stderr: Option<StringAssert>,
}

/// A side-effecting GCP mutation
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GcpAction {
    pub set_runtime_config_var: Option<SetRuntimeConfigVar>,
}

/// Set a variable on a Runtime Configurator config
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SetRuntimeConfigVar {
    /// e.g. `https://runtimeconfig.googleapis.com/v1beta1/projects/p/configs/c`
    pub runtime_config_self_link: String,
    /// e.g. `status/success`
    pub variable_path: String,
    pub base64_value: String,
}
