// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for pathreg.
//!
//! ```text
//! Config: GlobalConfig, BootstrapConfig
//! GlobalConfig:    log levels, log file, shell dialect
//! BootstrapConfig: root, root_var, search_path_var, extra candidates
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;
use crate::shell::Dialect;

/// Variable that receives the project root.
pub const DEFAULT_ROOT_VAR: &str = "PATHREG_ROOT";

/// Interpreter module search path extended by `init`.
pub const DEFAULT_SEARCH_PATH_VAR: &str = "PYTHONPATH";

/// Global options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. No file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Syntax of emitted statements.
    pub shell: Dialect,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::WARN,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            shell: Dialect::Posix,
        }
    }
}

/// Options for `pathreg init`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Project root. Defaults to the directory of the running executable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Variable exported with the canonical root.
    pub root_var: String,
    /// Path-like variable the root is registered on.
    pub search_path_var: String,
    /// More candidates registered after the root; may reference the root
    /// variable, e.g. `$PATHREG_ROOT/tools`.
    pub extra: Vec<String>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            root: None,
            root_var: DEFAULT_ROOT_VAR.to_string(),
            search_path_var: DEFAULT_SEARCH_PATH_VAR.to_string(),
            extra: Vec::new(),
        }
    }
}
