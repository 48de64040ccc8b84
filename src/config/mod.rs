// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for pathreg.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. pathreg.toml (cwd, unless --no-default-config)
//! 3. --config FILE
//! 4. PATHREG_CONF_* env vars
//! 5. --set section/key=value, dedicated CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! PATHREG_CONF_GLOBAL__SHELL=fish                → global.shell = "fish"
//! PATHREG_CONF_BOOTSTRAP__SEARCH_PATH_VAR=PERL5LIB → bootstrap.search_path_var
//! ```
//!
//! The prefix differs from the exported `PATHREG_ROOT` on purpose, so an
//! initialized session never feeds its own exports back into the config.
//!
//! # Example
//!
//! ```toml
//! [global]
//! shell = "posix"
//!
//! [bootstrap]
//! search_path_var = "PYTHONPATH"
//! extra = ["$PATHREG_ROOT/tools", "~/.local/lib/site"]
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::shell::validate_name;

use loader::ConfigLoader;
use types::{BootstrapConfig, GlobalConfig};

/// Default config file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "pathreg.toml";

/// Prefix of environment variables that override configuration.
pub const ENV_PREFIX: &str = "PATHREG_CONF";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Bootstrap options.
    pub bootstrap: BootstrapConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pathreg::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("pathreg.toml")
    ///     .with_env_prefix("PATHREG_CONF")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check the variable names used by `init`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError::InvalidValue`] if a name is not a shell
    /// identifier or both names are the same.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let invalid = |key: &str, message: String| ConfigError::InvalidValue {
            section: "bootstrap".to_string(),
            key: key.to_string(),
            message,
        };

        for (key, name) in [
            ("root_var", &self.bootstrap.root_var),
            ("search_path_var", &self.bootstrap.search_path_var),
        ] {
            validate_name(name).map_err(|e| invalid(key, e.to_string()))?;
        }

        if self.bootstrap.root_var == self.bootstrap.search_path_var {
            return Err(invalid(
                "search_path_var",
                format!("must differ from root_var '{}'", self.bootstrap.root_var),
            ));
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_bootstrap_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert("global.log_file".into(), fmt_path(self.global.log_file.as_ref()));
        options.insert("global.shell".into(), self.global.shell.to_string());
    }

    fn format_bootstrap_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("bootstrap.root".into(), fmt_path(self.bootstrap.root.as_ref()));
        options.insert("bootstrap.root_var".into(), self.bootstrap.root_var.clone());
        options.insert(
            "bootstrap.search_path_var".into(),
            self.bootstrap.search_path_var.clone(),
        );
        options.insert("bootstrap.extra".into(), self.bootstrap.extra.join(", "));
    }
}

fn fmt_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(String::new, |p| p.display().to_string())
}
