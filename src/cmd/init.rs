// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `init` command: export the project root and register it.

use std::io::Write;

use crate::bootstrap::{BootstrapPlan, bootstrap, resolve_root};
use crate::cli::init::InitArgs;
use crate::config::Config;
use crate::core::env::container::Env;
use crate::error::Result;
use crate::registrar::Registrar;
use crate::shell::{OutputTarget, ensure_evaluated};

/// Run the init command.
///
/// Statements go to `out`; the confirmation line goes to `err`. Nothing is
/// written to `out` unless every step succeeded.
///
/// # Errors
///
/// Returns an error if the output would not be evaluated, the variable
/// names are invalid, or the root cannot be resolved.
pub fn run_init_command(
    args: &InitArgs,
    config: &Config,
    env: &mut Env,
    target: OutputTarget,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    ensure_evaluated(target, "init", args.force)?;

    let plan = resolve_plan(args, config)?;
    let root = resolve_root(args.root.as_deref().or(config.bootstrap.root.as_deref()))?;

    let registrar = Registrar::new()?;
    let outcome = bootstrap(&registrar, env, &root, &plan)?;

    tracing::info!(
        root = %outcome.root(),
        added = outcome.registration().added().len(),
        "initialized"
    );

    writeln!(err, "{} is set to {}", plan.root_var, outcome.root())?;
    outcome
        .exports()
        .write_to(args.shell.unwrap_or(config.global.shell), out)?;
    Ok(())
}

/// Merge CLI overrides into the bootstrap section and validate the result.
fn resolve_plan(args: &InitArgs, config: &Config) -> Result<BootstrapPlan> {
    let mut effective = config.clone();
    if let Some(ref name) = args.root_var {
        effective.bootstrap.root_var.clone_from(name);
    }
    if let Some(ref name) = args.search_path_var {
        effective.bootstrap.search_path_var.clone_from(name);
    }
    effective.validate()?;

    Ok(BootstrapPlan {
        root_var: effective.bootstrap.root_var,
        search_path_var: effective.bootstrap.search_path_var,
        extra: effective.bootstrap.extra,
    })
}
