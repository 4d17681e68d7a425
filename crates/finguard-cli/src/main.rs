//! Command-line front end for the finguard validation engine.

use clap::Parser;
use cli::{Cli, ERROR_EXIT_CODE};
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match Cli::parse().run() {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            tracing::error!("fail to run the command: {err}");
            eprintln!("error: {}", err.message());
            for source in err.chain().skip(1) {
                eprintln!("  caused by: {}", source.message());
            }
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}
