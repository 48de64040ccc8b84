// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for pathreg using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! pathreg [global options] <command>
//! init [--root DIR] [--shell posix|fish] [--force]
//! add <VAR> <CANDIDATE>... [--prepend] [--shell posix|fish] [--force]
//! options
//! configs
//! version
//! ```

pub mod add;
pub mod global;
pub mod init;


use crate::cli::add::AddArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::init::InitArgs;
use clap::{Parser, Subcommand};

/// Idempotent search-path registration for shell sessions.
#[derive(Debug, Parser)]
#[command(
    name = "pathreg",
    author,
    version,
    about = "Idempotent search-path registration",
    long_about = "pathreg Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Registers a project root on an interpreter's module search path\n\
                  without ever adding the same directory twice.\n\n\
                  pathreg prints shell statements; the calling shell applies them:\n\n    \
                  eval \"$(pathreg init)\"                 # sh, bash, zsh\n    \
                  pathreg init --shell fish | source     # fish",
    after_help = "CONFIG FILES:\n\n\
                  By default, pathreg reads `pathreg.toml` from the current\n\
                  directory if it exists. Additional files can be given with\n\
                  --config and are loaded after it, later files overriding\n\
                  earlier ones. PATHREG_CONF_<SECTION>__<KEY> environment\n\
                  variables and --set override files. Use --no-default-config\n\
                  to skip `pathreg.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the config files used by pathreg.
    Configs,

    /// Exports the project root and registers it on the search path.
    Init(InitArgs),

    /// Registers directories on a path-like variable.
    Add(AddArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
