use super::Outcome;
use clap::Parser;
use finguard_core::{
    error::Error,
    sanitizer::{self, SanitizeOverrides},
    state::State,
};

/// Sanitize markup with the configured allow-lists.
#[derive(Parser)]
#[clap(name = "sanitize")]
pub(crate) struct Sanitize {
    /// Text to sanitize.
    text: String,
    /// Tags to allow instead of the configured ones.
    #[clap(long, value_delimiter = ',')]
    allowed_tags: Option<Vec<String>>,
    /// Attributes to allow instead of the configured ones.
    #[clap(long, value_delimiter = ',')]
    allowed_attributes: Option<Vec<String>>,
    /// Whether `data-*` attributes are retained.
    #[clap(long)]
    allow_data_attributes: Option<bool>,
}

impl Sanitize {
    /// Runs the `sanitize` subcommand.
    #[allow(clippy::print_stdout)]
    pub(crate) fn run(self, state: &State) -> Result<Outcome, Error> {
        let overrides = SanitizeOverrides {
            allowed_tags: self.allowed_tags,
            allowed_attributes: self.allowed_attributes,
            allow_data_attributes: self.allow_data_attributes,
        };
        println!(
            "{}",
            sanitizer::sanitize_str(&self.text, state.security(), overrides)
        );
        Ok(Outcome::Valid)
    }
}
