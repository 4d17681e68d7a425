use super::{Outcome, Report};
use clap::Parser;
use finguard_core::{
    Map, bail,
    error::Error,
    state::State,
    validation::{FormValidator, RuleSet, StrengthPolicy},
};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Validate a form against a rules file.
#[derive(Parser)]
#[clap(name = "form")]
pub(crate) struct Form {
    /// JSON object with the field values.
    data: PathBuf,
    /// Rules keyed by field name, in TOML or JSON.
    rules: PathBuf,
}

impl Form {
    /// Runs the `form` subcommand.
    pub(crate) fn run(self, state: &State) -> Result<Outcome, Error> {
        let data = fs::read_to_string(&self.data).map_err(|err| {
            let path = self.data.display();
            Error::with_source(format!("fail to read the form data `{path}`"), err)
        })?;
        let form_data = serde_json::from_str::<Map>(&data)?;

        let rules = fs::read_to_string(&self.rules).map_err(|err| {
            let path = self.rules.display();
            Error::with_source(format!("fail to read the rules `{path}`"), err)
        })?;
        let rules = parse_rules(&self.rules, &rules)?;

        let policy = StrengthPolicy::new(state.security().password);
        let result = FormValidator::new(state.security(), &policy).validate(&form_data, &rules);
        if !result.is_valid() {
            tracing::info!(invalid_fields = ?result.invalid_fields(), "form is invalid");
        }
        result.print()
    }
}

/// Parses the rules as JSON or TOML according to the file extension.
/// A file without an extension is read as TOML.
fn parse_rules(path: &Path, rules: &str) -> Result<RuleSet, Error> {
    let parsed = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str::<RuleSet>(rules).map_err(Error::from),
        Some("toml") | None => toml::from_str::<RuleSet>(rules).map_err(Error::from),
        Some(ext) => bail!("unsupported rules format `{ext}`"),
    };
    parsed.map_err(|err| {
        let path = path.display();
        err.wrap(format!("fail to parse the rules `{path}`"))
    })
}
