//! CLI arguments and subcommands.

use clap::Parser;
use finguard_core::{
    error::Error,
    state::{Env, State},
    validation::{FormValidationResult, Payload, ValidationOutcome, ValidationResult},
};
use serde::Serialize;
use std::{path::PathBuf, process::ExitCode};

mod check;
mod form;
mod sanitize;
mod tracing_subscriber;

/// Validation tools for financial input data.
#[derive(Parser)]
#[clap(name = "finguard", version)]
pub(crate) struct Cli {
    /// Directory containing the `config.<env>.toml` files.
    #[clap(global = true, long, default_value = "config")]
    config_dir: PathBuf,
    /// Environment name, overriding `FINGUARD_ENV`.
    #[clap(global = true, long)]
    env: Option<String>,
    /// Subcommands.
    #[clap(subcommand)]
    action: Subcommands,
}

impl Cli {
    /// Loads the state, initializes logging and runs the subcommand.
    pub(crate) fn run(self) -> Result<Outcome, Error> {
        let env = self
            .env
            .as_deref()
            .map(Env::from)
            .unwrap_or_else(Env::from_env);
        let state = State::load(env, &self.config_dir)?;
        tracing_subscriber::init(&state);
        match self.action {
            Subcommands::Check(opts) => opts.run(&state),
            Subcommands::Form(opts) => opts.run(&state),
            Subcommands::Sanitize(opts) => opts.run(&state),
        }
    }
}

/// CLI subcommands.
#[derive(Parser)]
enum Subcommands {
    /// Validate a single value.
    Check(check::Check),
    /// Validate a form against a rules file.
    Form(form::Form),
    /// Sanitize markup with the configured allow-lists.
    Sanitize(sanitize::Sanitize),
}

/// Exit code for a command which fails to run.
pub(crate) const ERROR_EXIT_CODE: u8 = 2;

/// Result of a successful command run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The input is valid.
    Valid,
    /// The input is invalid.
    Invalid,
}

impl Outcome {
    /// Returns the numeric exit status.
    pub(crate) fn code(self) -> u8 {
        match self {
            Self::Valid => 0,
            Self::Invalid => 1,
        }
    }

    /// Returns the process exit code.
    #[inline]
    pub(crate) fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

/// A serializable result with a validity flag.
trait Report: Serialize {
    /// Returns `true` if the checked input is valid.
    fn passed(&self) -> bool;

    /// Prints the report as JSON and maps it to an outcome.
    #[allow(clippy::print_stdout)]
    fn print(&self) -> Result<Outcome, Error> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(if self.passed() {
            Outcome::Valid
        } else {
            Outcome::Invalid
        })
    }
}

impl Report for ValidationResult {
    fn passed(&self) -> bool {
        self.is_valid()
    }
}

impl<T: Payload> Report for ValidationOutcome<T> {
    fn passed(&self) -> bool {
        self.is_valid()
    }
}

impl Report for FormValidationResult {
    fn passed(&self) -> bool {
        self.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, ERROR_EXIT_CODE, Outcome, Report, Subcommands};
    use clap::Parser;
    use finguard_core::{
        SharedString,
        validation::{CardType, Rejection, ValidationOutcome, ValidationResult},
    };

    #[test]
    fn it_maps_outcomes_to_exit_codes() {
        assert_eq!(Outcome::Valid.code(), 0);
        assert_eq!(Outcome::Invalid.code(), 1);
        assert_eq!(ERROR_EXIT_CODE, 2);
    }

    #[test]
    fn it_reports_validity() {
        assert!(ValidationResult::valid().passed());
        let result = ValidationResult::with_errors([SharedString::from("Invalid email format")]);
        assert!(!result.passed());

        let outcome = ValidationOutcome::from(Ok::<_, Rejection>(CardType::Visa));
        assert!(outcome.passed());
        let outcome =
            ValidationOutcome::<CardType>::from(Err(Rejection::with_message("Invalid card number")));
        assert!(!outcome.passed());
    }

    #[test]
    fn it_parses_global_options() {
        let cli = Cli::try_parse_from([
            "finguard",
            "check",
            "email",
            "ops@bank.example",
            "--config-dir",
            "demos",
            "--env",
            "prod",
        ])
        .unwrap();
        assert_eq!(cli.config_dir.to_str(), Some("demos"));
        assert_eq!(cli.env.as_deref(), Some("prod"));
        assert!(matches!(cli.action, Subcommands::Check(_)));

        let cli = Cli::try_parse_from(["finguard", "form", "data.json", "rules.toml"]).unwrap();
        assert_eq!(cli.config_dir.to_str(), Some("config"));
        assert!(cli.env.is_none());
        assert!(matches!(cli.action, Subcommands::Form(_)));
    }

    #[test]
    fn it_rejects_unknown_check_kinds() {
        assert!(Cli::try_parse_from(["finguard", "check", "iban", "x"]).is_err());
        assert!(Cli::try_parse_from(["finguard"]).is_err());
    }
}
