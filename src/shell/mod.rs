// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Statements for the calling shell.
//!
//! A child process cannot change its parent's environment, so `init` and
//! `add` print assignments that the caller evaluates:
//!
//! ```text
//! posix:  eval "$(pathreg init)"        export NAME='value'
//! fish:   pathreg init --shell fish | source
//!                                       set -gx NAME 'value'
//! ```
//!
//! # Guard
//!
//! ```text
//! stdout is a terminal && !--force  --> ShellError::NotEvaluated, nothing printed
//! otherwise                         --> statements on stdout
//! ```


use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, PathregResult, ShellError};

/// Shell syntax used for emitted statements.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// sh, bash, zsh, dash, ksh.
    #[default]
    Posix,
    /// fish.
    Fish,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Fish => write!(f, "fish"),
        }
    }
}

impl std::str::FromStr for Dialect {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "posix" | "sh" | "bash" | "zsh" => Ok(Self::Posix),
            "fish" => Ok(Self::Fish),
            _ => Err(ConfigError::InvalidValue {
                section: "global".to_string(),
                key: "shell".to_string(),
                message: format!("expected 'posix' or 'fish', got '{s}'"),
            }),
        }
    }
}

impl Dialect {
    /// Renders an assignment that exports `name` to child processes.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::InvalidVariableName`] if `name` is not a valid
    /// shell identifier.
    pub fn export(self, name: &str, value: &str) -> Result<String, ShellError> {
        validate_name(name)?;
        let quoted = self.quote(value);
        Ok(match self {
            Self::Posix => format!("export {name}={quoted}"),
            Self::Fish => format!("set -gx {name} {quoted}"),
        })
    }

    /// Wraps `value` in single quotes, escaping what the dialect requires.
    #[must_use]
    pub fn quote(self, value: &str) -> String {
        match self {
            Self::Posix => format!("'{}'", value.replace('\'', r"'\''")),
            Self::Fish => format!("'{}'", value.replace('\\', r"\\").replace('\'', r"\'")),
        }
    }
}

/// Checks that `name` matches `[A-Za-z_][A-Za-z0-9_]*`.
///
/// # Errors
///
/// Returns [`ShellError::InvalidVariableName`] otherwise.
pub fn validate_name(name: &str) -> Result<(), ShellError> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(ShellError::InvalidVariableName(name.to_string()))
    }
}

/// Whether the emitted statements will reach a shell that evaluates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    /// stdout is captured (`$(...)`, a pipe, a file).
    Captured,
    /// stdout is an interactive terminal.
    Terminal,
}

impl OutputTarget {
    /// Inspects the process's stdout.
    #[must_use]
    pub fn detect() -> Self {
        use std::io::IsTerminal;

        if std::io::stdout().is_terminal() {
            Self::Terminal
        } else {
            Self::Captured
        }
    }
}

/// Refuses to run when the output would only be displayed, never applied.
///
/// # Errors
///
/// Returns [`ShellError::NotEvaluated`] for a terminal target unless `force`
/// is set.
pub fn ensure_evaluated(target: OutputTarget, command: &str, force: bool) -> Result<(), ShellError> {
    if target == OutputTarget::Terminal && !force {
        return Err(ShellError::NotEvaluated {
            command: command.to_string(),
        });
    }
    Ok(())
}

/// Ordered list of variable assignments for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exports {
    vars: Vec<(String, String)>,
}

impl Exports {
    #[must_use]
    pub const fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Queues an assignment. A later assignment to the same name replaces
    /// the value but keeps the original position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.vars.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.vars.push((name, value)),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterates over `(name, value)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Renders every assignment in `dialect`, one per line.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::InvalidVariableName`] for the first bad name;
    /// nothing is rendered in that case.
    pub fn render(&self, dialect: Dialect) -> Result<Vec<String>, ShellError> {
        self.iter()
            .map(|(name, value)| dialect.export(name, value))
            .collect()
    }

    /// Writes the rendered statements to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is invalid or `out` cannot be written.
    pub fn write_to(&self, dialect: Dialect, out: &mut impl Write) -> PathregResult<()> {
        for line in self.render(dialect)? {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(())
    }
}
