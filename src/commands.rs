//! CLI argument definitions

use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Path to a yaml or json file containing a test suite.
    /// Can be specified multiple times; suites run in the given order
    #[arg(long = "test-spec", value_name = "PATH", required = true, value_parser = non_empty_path)]
    pub test_specs: Vec<PathBuf>,

    /// Directory of YAML files exposed to suites as `{{ .Values.<file-stem>.<key> }}`
    #[arg(long = "test-spec-values", value_name = "DIR")]
    pub test_spec_values: Option<PathBuf>,

    /// Template variable exposed to suites as `{{ .Vars.KEY }}`.
    /// Can be specified multiple times
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,

    /// Configuration file (default: platform config dir, testrunner/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

fn non_empty_path(value: &str) -> Result<PathBuf, String> {
    if value.is_empty() {
        return Err("empty value is not accepted".to_string());
    }
    Ok(PathBuf::from(value))
}
