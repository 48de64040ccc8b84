// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `add` command: register directories on any path-like variable.

use std::io::Write;

use crate::cli::add::AddArgs;
use crate::config::Config;
use crate::core::env::container::Env;
use crate::error::Result;
use crate::registrar::{Placement, Registrar};
use crate::shell::{Exports, OutputTarget, ensure_evaluated, validate_name};

/// Run the add command.
///
/// Emits one statement when the variable changed and nothing otherwise.
///
/// # Errors
///
/// Returns an error if the output would not be evaluated, the variable name
/// is invalid, the variable holds a non-UTF-8 value, or `out` cannot be
/// written.
pub fn run_add_command(
    args: &AddArgs,
    config: &Config,
    env: &mut Env,
    target: OutputTarget,
    out: &mut impl Write,
) -> Result<()> {
    ensure_evaluated(target, "add", args.force)?;
    validate_name(&args.var)?;

    let placement = if args.prepend {
        Placement::Prepend
    } else {
        Placement::Append
    };

    let registrar = Registrar::new()?;
    let registration = registrar.pathadd(env, &args.var, &args.candidates, placement)?;

    if !registration.changed() {
        tracing::debug!(var = %args.var, "nothing to add");
        return Ok(());
    }

    tracing::info!(var = %args.var, added = ?registration.added(), "registered");

    let mut exports = Exports::new();
    exports.set(args.var.as_str(), registration.path().to_value());
    exports.write_to(args.shell.unwrap_or(config.global.shell), out)?;
    Ok(())
}
