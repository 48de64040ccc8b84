// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!           PathregError (~24 bytes)
//!                     |
//!   +--------+--------+--------+--------+
//!   |        |        |        |        |
//!   v        v        v        v        v
//! Bail     Cfg    Bootstrap  Shell      Io
//! Box<str>  Box      Box       Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Config     ParseError, InvalidValue, NotFound
//!   Bootstrap  CurrentExe, Canonicalize, NotADirectory, NotUtf8
//!   Shell      NotEvaluated, InvalidVariableName, NotUtf8
//! ```
//!
//! Skipped candidates are not errors and never show up here.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`PathregError`].
pub type PathregResult<T> = std::result::Result<T, PathregError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum PathregError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Project root could not be resolved.
    #[error("bootstrap error: {0}")]
    Bootstrap(#[from] Box<BootstrapError>),

    /// Shell statements could not be emitted.
    #[error("shell error: {0}")]
    Shell(#[from] Box<ShellError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Create a fatal [`PathregError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> PathregError {
    PathregError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for PathregError {
                fn from(err: $error) -> Self {
                    PathregError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    BootstrapError => Bootstrap,
    ShellError => Shell,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse a configuration override.
    #[error("failed to parse option '{option}': {message}")]
    ParseError { option: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Bootstrap Errors ---

/// Errors resolving the project root during `init`.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The running executable could not be located.
    #[error("failed to locate the running executable")]
    CurrentExe(#[source] std::io::Error),

    /// The root path could not be made canonical.
    #[error("failed to resolve root '{path}': {source}")]
    Canonicalize {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The root exists but is not a directory.
    #[error("root is not a directory: {0}")]
    NotADirectory(String),

    /// The root cannot be exported because it is not valid UTF-8.
    #[error("root is not valid UTF-8: {0}")]
    NotUtf8(String),
}

// --- Shell Errors ---

/// Errors emitting statements for the calling shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Output goes straight to a terminal, so no shell will evaluate it.
    #[error(
        "'pathreg {command}' must be evaluated by the calling shell, e.g. \
         eval \"$(pathreg {command})\" (use --force to print anyway)"
    )]
    NotEvaluated { command: String },

    /// The name cannot be used as a shell variable.
    #[error("invalid variable name '{0}'")]
    InvalidVariableName(String),

    /// The variable is set to a value that cannot be read back, so any
    /// assignment would discard its current entries.
    #[error("'{var}' is set to a value that is not valid UTF-8, refusing to replace it")]
    NotUtf8 { var: String },
}
