//! Declarative acceptance-test runner
//!
//! Runs one or more suite files and exits with the number of failed actions.

use clap::Parser;
use testrunner::{cli, commands::RunArgs, common::logging};

/// Exit status for fatal configuration errors
const FATAL_EXIT_CODE: i32 = 255;

#[derive(Parser)]
#[command(name = "testrunner", about = "Declarative acceptance-test runner")]
#[command(version, long_about = None)]
struct Cli {
    #[command(flatten)]
    run: RunArgs,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init_cli(cli.run.verbose);

    match cli::dispatch(cli.run).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(FATAL_EXIT_CODE);
        }
    }
}
