//! Errors that can be reported by gamelog.
//!
//! Logging itself never fails. Only maintenance operations, such as clearing the console or
//! loading settings, report errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// An error raised while clearing the console of the host.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The host has no console that can be cleared.
    #[error("console can not be cleared: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ConsoleError {
    /// Create a new unavailable error
    pub fn unavailable(reason: impl AsRef<str>) -> Self {
        Self::Unavailable(reason.as_ref().to_string())
    }
}

/// A color string could not be parsed
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("{value:?} is not a valid color (expected `light`, `dark`, `#RRGGBB` or `#RRGGBBAA`)")]
pub struct ParseColorError {
    value: String,
}

impl ParseColorError {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self {
            value: value.as_ref().to_string(),
        }
    }

    /// The value that failed to parse
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// An error raised while loading [`DebuggerSettings`](crate::settings::DebuggerSettings).
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Parse(#[from] toml::de::Error),
}
