// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `add` command arguments.

use clap::Args;

use crate::shell::Dialect;

/// Arguments for the `add` command.
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Path-like variable to extend, e.g. PYTHONPATH.
    #[arg(value_name = "VAR")]
    pub var: String,

    /// Directories to register. `$NAME`, `${NAME}` and `~` are expanded;
    /// quote them to keep the calling shell from expanding them first.
    #[arg(value_name = "CANDIDATE", required = true, num_args = 1..)]
    pub candidates: Vec<String>,

    /// Puts new entries in front of the existing ones.
    #[arg(short, long)]
    pub prepend: bool,

    /// Syntax of the emitted statement (default: global.shell).
    #[arg(long, value_enum)]
    pub shell: Option<Dialect>,

    /// Prints the statement even when stdout is a terminal.
    #[arg(short, long)]
    pub force: bool,
}
