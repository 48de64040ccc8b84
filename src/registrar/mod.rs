// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Idempotent registration of directories on path-like variables.
//!
//! # Pipeline
//!
//! ```text
//! candidate --expand--> resolved --is_dir?--> --already present?--> added
//!                                     | no            | yes
//!                                     v               v
//!                                   skip            skip
//! ```
//!
//! `register_paths` is pure: the environment comes in through [`VarLookup`]
//! and the filesystem through [`DirProbe`]. `pathadd` is the one place that
//! writes the result back into an [`Env`].
//!
//! Skipped candidates are expected (optional directories vary between
//! checkouts) and are neither reported nor logged.

pub mod expand;
pub mod probe;
pub mod search_path;


use std::path::Path;

use crate::core::env::container::Env;
use crate::error::{Result, ShellError};

use expand::{Expander, Overlay, VarLookup};
use probe::{DirProbe, FsProbe};
use search_path::SearchPath;

/// Where accepted candidates go relative to the existing entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// After the existing entries.
    #[default]
    Append,
    /// Before the existing entries, keeping the candidates' own order.
    Prepend,
}

/// Outcome of a registration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    path: SearchPath,
    added: Vec<String>,
}

impl Registration {
    /// The updated search path.
    #[must_use]
    pub const fn path(&self) -> &SearchPath {
        &self.path
    }

    /// Resolved entries that were added, in the order they were accepted.
    #[must_use]
    pub fn added(&self) -> &[String] {
        &self.added
    }

    /// True if at least one candidate was added.
    #[must_use]
    pub const fn changed(&self) -> bool {
        !self.added.is_empty()
    }

    #[must_use]
    pub fn into_path(self) -> SearchPath {
        self.path
    }
}

/// Extends path-like variables without introducing duplicates.
#[derive(Debug, Clone)]
pub struct Registrar<P = FsProbe> {
    expander: Expander,
    probe: P,
}

impl Registrar<FsProbe> {
    /// Creates a registrar that checks the real filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if the expander cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_probe(FsProbe)
    }
}

impl<P: DirProbe> Registrar<P> {
    /// Creates a registrar with a custom directory probe.
    ///
    /// # Errors
    ///
    /// Returns an error if the expander cannot be built.
    pub fn with_probe(probe: P) -> Result<Self> {
        Ok(Self {
            expander: Expander::new()?,
            probe,
        })
    }

    /// Computes the value of `var_name` after registering `candidates`.
    ///
    /// Each candidate is expanded against `lookup`, where `var_name` itself
    /// resolves to the value built so far. Candidates that are not existing
    /// directories, or that already occur as a whole entry, are skipped.
    pub fn register_paths<L, S>(
        &self,
        existing: &SearchPath,
        var_name: &str,
        candidates: &[S],
        lookup: &L,
        placement: Placement,
    ) -> Registration
    where
        L: VarLookup + ?Sized,
        S: AsRef<str>,
    {
        let mut added: Vec<String> = Vec::new();

        for candidate in candidates {
            let current = combine(existing, &added, placement);
            let value = current.to_value();
            let overlay = Overlay {
                base: lookup,
                name: var_name,
                value: &value,
            };

            let resolved = self.expander.expand(candidate.as_ref(), &overlay);
            if !self.probe.is_dir(Path::new(&resolved)) || current.contains(&resolved) {
                continue;
            }
            added.push(resolved);
        }

        Registration {
            path: combine(existing, &added, placement),
            added,
        }
    }

    /// Registers `candidates` on `var_name` inside `env`.
    ///
    /// `env` is only written when something was added: a variable that was
    /// unset stays unset if every candidate was skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::NotUtf8`] if `var_name` is set to a value that
    /// is not valid UTF-8; its entries could not be preserved.
    pub fn pathadd<S: AsRef<str>>(
        &self,
        env: &mut Env,
        var_name: &str,
        candidates: &[S],
        placement: Placement,
    ) -> std::result::Result<Registration, ShellError> {
        env.ensure_utf8(var_name)?;
        let existing = SearchPath::parse(env.get(var_name).unwrap_or_default());
        let registration = self.register_paths(&existing, var_name, candidates, &*env, placement);

        if registration.changed() {
            env.set(var_name, registration.path().to_value());
        }
        Ok(registration)
    }
}

fn combine(existing: &SearchPath, added: &[String], placement: Placement) -> SearchPath {
    let (first, second) = match placement {
        Placement::Append => (existing.entries(), added),
        Placement::Prepend => (added, existing.entries()),
    };
    SearchPath::from_entries(first.iter().chain(second).cloned().collect())
}
