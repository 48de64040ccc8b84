// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell-style variable expansion for candidate paths.
//!
//! ```text
//! ~            -> $HOME
//! ~/lib        -> $HOME/lib
//! $NAME        -> value of NAME ("" when unset)
//! ${NAME}/x    -> value of NAME followed by /x
//! $1, $-, ${   -> kept literally
//! ```
//!
//! Expansion is a single pass: substituted values are not expanded again.

use std::collections::BTreeMap;

use anyhow::Context;
use regex::{Captures, Regex};

use crate::core::env::container::Env;
use crate::error::Result;

/// Source of variable values for expansion.
pub trait VarLookup {
    fn lookup(&self, name: &str) -> Option<String>;
}

impl VarLookup for Env {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_owned)
    }
}

impl VarLookup for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<L: VarLookup + ?Sized> VarLookup for &L {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}

/// A lookup that answers one variable from `value` and defers the rest.
pub(crate) struct Overlay<'a, L: ?Sized> {
    pub(crate) base: &'a L,
    pub(crate) name: &'a str,
    pub(crate) value: &'a str,
}

impl<L: VarLookup + ?Sized> VarLookup for Overlay<'_, L> {
    fn lookup(&self, name: &str) -> Option<String> {
        if name == self.name {
            Some(self.value.to_owned())
        } else {
            self.base.lookup(name)
        }
    }
}

/// Expands `$NAME`, `${NAME}` and a leading `~` in candidate strings.
#[derive(Debug, Clone)]
pub struct Expander {
    var_ref: Regex,
}

impl Expander {
    /// Creates an expander.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable reference pattern fails to compile.
    pub fn new() -> Result<Self> {
        let var_ref = Regex::new(r"\$(?:\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))")
            .context("failed to compile variable reference regex")?;
        Ok(Self { var_ref })
    }

    /// Expands `input` against `vars`.
    #[must_use]
    pub fn expand(&self, input: &str, vars: &impl VarLookup) -> String {
        let input = expand_tilde(input, vars);
        self.var_ref
            .replace_all(&input, |caps: &Captures<'_>| {
                caps.get(1)
                    .or_else(|| caps.get(2))
                    .and_then(|name| vars.lookup(name.as_str()))
                    .unwrap_or_default()
            })
            .into_owned()
    }
}

/// Replaces a leading `~` or `~/` with `HOME`. `~user` forms are left alone,
/// and so is everything when `HOME` is unset.
fn expand_tilde(input: &str, vars: &impl VarLookup) -> String {
    let Some(rest) = input.strip_prefix('~') else {
        return input.to_owned();
    };
    if !(rest.is_empty() || rest.starts_with('/')) {
        return input.to_owned();
    }
    vars.lookup("HOME")
        .map_or_else(|| input.to_owned(), |home| format!("{home}{rest}"))
}
