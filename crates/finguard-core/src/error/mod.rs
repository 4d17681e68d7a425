//! Type-erased errors for configuration loading and other fallible plumbing.
//!
//! Validators never return these errors; invalid input is reported as data.
use crate::SharedString;
use std::{error, fmt};

mod chain;

pub use chain::Chain;

/// An error type backed by an allocation-optimized string.
#[derive(Debug)]
pub struct Error {
    /// Error message.
    message: SharedString,
    /// Error source.
    source: Option<Box<Error>>,
}

impl Error {
    /// Creates a new instance with the supplied message.
    #[inline]
    pub fn new(message: impl Into<SharedString>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new instance with the supplied message and the error source.
    #[inline]
    pub fn with_source(message: impl Into<SharedString>, source: impl Into<Error>) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source.into())),
        }
    }

    /// Returns a new instance with the supplied message and `self` as the error source.
    #[inline]
    pub fn wrap(self, message: impl Into<SharedString>) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(self)),
        }
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the source.
    #[inline]
    pub fn source(&self) -> Option<&Error> {
        self.source.as_deref()
    }

    /// Returns an iterator of the chain of source errors, starting with `self`.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }
}

impl<E: error::Error + 'static> From<E> for Error {
    #[inline]
    fn from(err: E) -> Self {
        Self {
            message: err.to_string().into(),
            source: err.source().map(|err| Box::new(Self::new(err.to_string()))),
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = &self.message;
        if let Some(source) = &self.source {
            write!(f, "{message}: {source}")
        } else {
            write!(f, "{message}")
        }
    }
}

/// Emits a `tracing::warn!` event and creates an [`Error`] with the same message.
#[macro_export]
macro_rules! warn {
    ($message:literal $(,)?) => {{
        let message = format!($message);
        tracing::warn!("{message}");
        $crate::error::Error::new(message)
    }};
    ($fmt:expr, $($arg:tt)+) => {{
        let message = format!($fmt, $($arg)+);
        tracing::warn!("{message}");
        $crate::error::Error::new(message)
    }};
}

/// Returns early with an [`Error`], logging the message as a warning.
#[macro_export]
macro_rules! bail {
    ($message:literal $(,)?) => {
        return Err($crate::warn!($message))
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err($crate::warn!($fmt, $($arg)+))
    };
}
