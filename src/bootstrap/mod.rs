// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Session bootstrap: export the project root and register it.
//!
//! ```text
//! --root / bootstrap.root / dir of running exe
//!        |
//!        v  canonicalize (absolute, symlinks resolved)
//!      root
//!        |
//!        +--> ROOT_VAR=root                        (always exported)
//!        |
//!        +--> pathadd(SEARCH_PATH_VAR,
//!                     ["${ROOT_VAR}", extra...],   (exported if changed)
//!                     Prepend)
//! ```


use std::path::{Path, PathBuf};

use crate::core::env::container::Env;
use crate::error::{BootstrapError, PathregResult};
use crate::registrar::probe::DirProbe;
use crate::registrar::{Placement, Registrar, Registration};
use crate::shell::Exports;

/// Variable names and extra candidates for one bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapPlan {
    pub root_var: String,
    pub search_path_var: String,
    pub extra: Vec<String>,
}

/// What a bootstrap run changed.
#[derive(Debug, Clone)]
pub struct BootstrapOutcome {
    root: String,
    registration: Registration,
    exports: Exports,
}

impl BootstrapOutcome {
    /// The canonical root directory.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    #[must_use]
    pub const fn registration(&self) -> &Registration {
        &self.registration
    }

    /// Assignments for the calling shell, root variable first.
    #[must_use]
    pub const fn exports(&self) -> &Exports {
        &self.exports
    }
}

/// Resolves the project root to a canonical directory.
///
/// Without an explicit root, the directory holding the running executable
/// is used; the executable path is canonicalized first so a symlinked
/// binary resolves to its real checkout.
///
/// # Errors
///
/// Returns a [`BootstrapError`] if the executable cannot be located, the
/// path cannot be canonicalized, or it is not a directory.
pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf, BootstrapError> {
    let candidate = match explicit {
        Some(path) => path.to_path_buf(),
        None => executable_dir()?,
    };

    let root = canonicalize(&candidate)?;
    if !root.is_dir() {
        return Err(BootstrapError::NotADirectory(root.display().to_string()));
    }
    Ok(root)
}

fn executable_dir() -> Result<PathBuf, BootstrapError> {
    let exe = std::env::current_exe().map_err(BootstrapError::CurrentExe)?;
    let exe = canonicalize(&exe)?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| BootstrapError::NotADirectory(exe.display().to_string()))
}

fn canonicalize(path: &Path) -> Result<PathBuf, BootstrapError> {
    std::fs::canonicalize(path).map_err(|source| BootstrapError::Canonicalize {
        path: path.display().to_string(),
        source,
    })
}

/// Exports `root` and prepends it, followed by the plan's extra
/// candidates, onto the search path variable in `env`.
///
/// The root is registered through a `${ROOT_VAR}` reference, so the path is
/// used verbatim even if it contains `$` or `~`.
///
/// # Errors
///
/// Returns [`BootstrapError::NotUtf8`] if `root` cannot be exported as text,
/// or a shell error if the search path variable holds a non-UTF-8 value.
/// `env` is left untouched in both cases.
pub fn bootstrap<P: DirProbe>(
    registrar: &Registrar<P>,
    env: &mut Env,
    root: &Path,
    plan: &BootstrapPlan,
) -> PathregResult<BootstrapOutcome> {
    let root = root
        .to_str()
        .ok_or_else(|| BootstrapError::NotUtf8(root.display().to_string()))?
        .to_owned();
    env.ensure_utf8(&plan.search_path_var)?;

    let mut exports = Exports::new();
    env.set(plan.root_var.as_str(), root.as_str());
    exports.set(plan.root_var.as_str(), root.as_str());

    let candidates: Vec<String> = std::iter::once(format!("${{{}}}", plan.root_var))
        .chain(plan.extra.iter().cloned())
        .collect();
    let registration = registrar.pathadd(
        env,
        &plan.search_path_var,
        &candidates,
        Placement::Prepend,
    )?;

    if registration.changed() {
        exports.set(
            plan.search_path_var.as_str(),
            registration.path().to_value(),
        );
    }

    tracing::debug!(
        root = %root,
        var = %plan.search_path_var,
        added = ?registration.added(),
        "bootstrap complete"
    );

    Ok(BootstrapOutcome {
        root,
        registration,
        exports,
    })
}
