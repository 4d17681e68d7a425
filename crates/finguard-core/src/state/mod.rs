//! Environment, configuration and the security policy derived from it.

use crate::{error::Error, extension::TomlTableExt};
use std::path::{Path, PathBuf};
use toml::value::Table;

mod config;
mod env;
mod security;

pub use env::Env;
pub use security::{
    DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_INPUT_LENGTH, PasswordSettings, SecurityConfig,
};

/// A state is a record of the env, the raw config and the security policy.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Environment.
    env: Env,
    /// Configuration.
    config: Table,
    /// Security policy.
    security: SecurityConfig,
}

impl State {
    /// Creates a new instance with an empty config.
    #[inline]
    pub fn new(env: Env) -> Self {
        Self {
            env,
            config: Table::new(),
            security: SecurityConfig::default(),
        }
    }

    /// Creates a new instance from a parsed config table.
    pub fn with_config(env: Env, config: Table) -> Self {
        let security = config
            .get_table("security")
            .map(SecurityConfig::from_table)
            .unwrap_or_default();
        Self {
            env,
            config,
            security,
        }
    }

    /// Loads `config.{env}.toml` from the directory.
    ///
    /// A missing file is not an error: the defaults are used and a warning is emitted.
    pub fn load(env: Env, config_dir: impl AsRef<Path>) -> Result<Self, Error> {
        let config_file = Self::config_file(&env, config_dir.as_ref());
        if !config_file.exists() {
            let file = config_file.display();
            tracing::warn!(env = env.as_str(), "`{file}` does not exist, using defaults");
            return Ok(Self::new(env));
        }
        Self::load_file(env, &config_file)
    }

    /// Loads the config from a specific file.
    pub fn load_file(env: Env, config_file: &Path) -> Result<Self, Error> {
        let config = config::read_config_file(config_file, env.as_str())?;
        Ok(Self::with_config(env, config))
    }

    /// Returns the path of the config file for the env.
    #[inline]
    pub fn config_file(env: &Env, config_dir: &Path) -> PathBuf {
        config_dir.join(format!("config.{env}.toml"))
    }

    /// Returns the env.
    #[inline]
    pub fn env(&self) -> &Env {
        &self.env
    }

    /// Returns a reference to the config.
    #[inline]
    pub fn config(&self) -> &Table {
        &self.config
    }

    /// Returns a reference to the security policy.
    #[inline]
    pub fn security(&self) -> &SecurityConfig {
        &self.security
    }
}

#[cfg(test)]
mod tests {
    use super::{Env, State};
    use std::{env, fs};

    #[test]
    fn it_loads_security_table() {
        let dir = env::temp_dir().join(format!("finguard-state-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("config.test.toml"),
            "[security]\nmax-input-length = 64\n\n[tracing]\nformat = \"compact\"\n",
        )
        .unwrap();
        let state = State::load(Env::from("test"), &dir).unwrap();
        assert_eq!(state.security().max_input_length, 64);
        assert!(state.config().contains_key("tracing"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn it_falls_back_to_defaults() {
        let dir = env::temp_dir().join("finguard-state-missing");
        let state = State::load(Env::Prod, &dir).unwrap();
        assert!(state.env().is_prod());
        assert_eq!(state.security(), &Default::default());
    }

    #[test]
    fn it_reports_malformed_config() {
        let dir = env::temp_dir().join(format!("finguard-state-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.dev.toml"), "[security\n").unwrap();
        let err = State::load(Env::Dev, &dir).unwrap_err();
        assert!(err.message().starts_with("fail to parse the config file"));
        assert!(err.message().ends_with("config.dev.toml`"));
        assert_eq!(err.chain().count(), 2);
        fs::remove_dir_all(&dir).unwrap();
    }
}
