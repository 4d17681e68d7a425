use self::Env::*;
use crate::SharedString;
use std::fmt;

/// Running environment which selects the config file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Env {
    #[default]
    /// The `dev` environment.
    Dev,
    /// The `prod` environment.
    Prod,
    /// A custom environment.
    Custom(SharedString),
}

impl Env {
    /// Name of the environment variable read by [`Env::from_env`].
    pub const VAR: &'static str = "FINGUARD_ENV";

    /// Reads the environment from the `FINGUARD_ENV` variable, defaulting to `dev`.
    pub fn from_env() -> Self {
        match std::env::var(Self::VAR) {
            Ok(value) if !value.trim().is_empty() => Self::from(value.trim()),
            _ => Dev,
        }
    }

    /// Returns `true` if `self` is the `dev` environment.
    #[inline]
    pub fn is_dev(&self) -> bool {
        matches!(self, Dev)
    }

    /// Returns `true` if `self` is the `prod` environment.
    #[inline]
    pub fn is_prod(&self) -> bool {
        matches!(self, Prod)
    }

    /// Returns `self` as `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Dev => "dev",
            Prod => "prod",
            Custom(name) => name.as_ref(),
        }
    }
}

impl fmt::Display for Env {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let env = self.as_str();
        write!(f, "{env}")
    }
}

impl From<&str> for Env {
    #[inline]
    fn from(env: &str) -> Self {
        match env {
            "dev" => Dev,
            "prod" => Prod,
            _ => Custom(env.to_owned().into()),
        }
    }
}
