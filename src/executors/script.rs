//! Shell script executor

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

use super::{ProcessOutput, ScriptExecutor};
use crate::asserts::Failure;

/// Runs scripts with `<shell> -c <script>`, capturing both streams
pub struct ShellExecutor {
    shell: String,
}

impl ShellExecutor {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

#[async_trait]
impl ScriptExecutor for ShellExecutor {
    async fn run(&self, script: &str) -> std::result::Result<ProcessOutput, Failure> {
        tracing::debug!("$ {} -c {:?}", self.shell, script);

        let output = TokioCommand::new(&self.shell)
            .arg("-c")
            .arg(script)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| Failure::new(format!("Process running error: {e}")))?;

        Ok(ProcessOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
