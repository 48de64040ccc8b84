// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;

use super::types::EnvKey;
use crate::error::ShellError;

/// A snapshot of environment variables.
///
/// `init` and `add` work on an `Env` instead of the real process
/// environment; the calling shell applies the result by evaluating the
/// emitted statements.
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: BTreeMap<EnvKey, String>,
    /// Set variables whose value is not valid UTF-8.
    unreadable: BTreeSet<EnvKey>,
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
            unreadable: BTreeSet::new(),
        }
    }

    /// Creates an environment from OS-encoded pairs.
    ///
    /// Names that are not UTF-8 are dropped; they can never be targeted.
    /// Values that are not UTF-8 keep their name so the variable still
    /// counts as set.
    #[must_use]
    pub fn from_os_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let mut env = Self::new();
        for (key, value) in vars {
            let Ok(key) = key.into().into_string() else {
                continue;
            };
            match value.into().into_string() {
                Ok(value) => {
                    env.set(key, value);
                }
                Err(_) => {
                    env.unreadable.insert(EnvKey::new(key));
                }
            }
        }
        env
    }

    /// Sets an environment variable, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = EnvKey::new(key);
        self.unreadable.remove(&key);
        self.vars.insert(key, value.into());
        self
    }

    /// Gets an environment variable value. Unreadable values yield `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(&EnvKey::new(key)).map(String::as_str)
    }

    /// Returns true if the variable is set, even to an empty or unreadable
    /// value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        let key = EnvKey::new(key);
        self.vars.contains_key(&key) || self.unreadable.contains(&key)
    }

    /// Checks that `key` is unset or holds valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::NotUtf8`] if the variable is set to a value
    /// that cannot be read back, and so cannot be extended without losing it.
    pub fn ensure_utf8(&self, key: &str) -> Result<(), ShellError> {
        if self.unreadable.contains(&EnvKey::new(key)) {
            return Err(ShellError::NotUtf8 {
                var: key.to_string(),
            });
        }
        Ok(())
    }
}
