// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `init` command arguments.

use clap::Args;
use std::path::PathBuf;

use crate::shell::Dialect;

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, Args)]
pub struct InitArgs {
    /// Project root (default: bootstrap.root, else the directory of this executable).
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Syntax of the emitted statements (default: global.shell).
    #[arg(long, value_enum)]
    pub shell: Option<Dialect>,

    /// Variable that receives the root (default: bootstrap.root_var).
    #[arg(long = "root-var", value_name = "NAME")]
    pub root_var: Option<String>,

    /// Variable the root is registered on (default: bootstrap.search_path_var).
    #[arg(long = "search-path-var", value_name = "NAME")]
    pub search_path_var: Option<String>,

    /// Prints the statements even when stdout is a terminal.
    #[arg(short, long)]
    pub force: bool,
}
