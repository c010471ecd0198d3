//! Executor collaborators
//!
//! The runner never performs side effects itself. Each test variant is
//! handed to one of these traits, which makes the orchestrator testable
//! with in-memory fakes.

mod gcp;
mod http;
mod script;

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::asserts::{Failure, Outcome};
use crate::common::{Config, Result};
use crate::suite::SetRuntimeConfigVar;

pub use gcp::RuntimeConfigClient;
pub use http::ReqwestExecutor;
pub use script::ShellExecutor;

/// An HTTP request derived from an `httpTest`
#[derive(Debug, Clone, Copy)]
pub struct HttpRequest<'a> {
    pub url: &'a str,
    pub method: &'a str,
    pub headers: &'a BTreeMap<String, String>,
}

/// What the HTTP executor observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    /// `"<code> <reason>"`, e.g. `"404 Not Found"`
    pub status_text: String,
    pub body: String,
}

/// What the script executor observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// -1 when the process did not exit normally
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Performs HTTP requests
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    /// Construction and transport errors are returned as failures
    async fn execute(&self, request: HttpRequest<'_>) -> std::result::Result<HttpResponse, Failure>;
}

/// Runs shell scripts
#[async_trait]
pub trait ScriptExecutor: Send + Sync {
    /// A non-zero exit is not an error; only failing to run the script is
    async fn run(&self, script: &str) -> std::result::Result<ProcessOutput, Failure>;
}

/// Mutates remote runtime configuration
#[async_trait]
pub trait RuntimeConfigExecutor: Send + Sync {
    async fn set_variable(&self, request: &SetRuntimeConfigVar) -> Outcome;
}

/// The collaborators one run uses
pub struct Executors {
    pub http: Box<dyn HttpExecutor>,
    pub script: Box<dyn ScriptExecutor>,
    pub runtime_config: Box<dyn RuntimeConfigExecutor>,
}

impl Executors {
    /// Build the real executors from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = http::build_client(&config.http)?;
        Ok(Self {
            http: Box::new(ReqwestExecutor::new(client.clone())),
            script: Box::new(ShellExecutor::new(config.script.shell.clone())),
            runtime_config: Box::new(RuntimeConfigClient::new(
                client,
                config.gcp.metadata_token_url.clone(),
            )),
        })
    }
}
