// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Options | Configs | Init | Add
//! ```

use std::process::ExitCode;

use pathreg::cli::global::GlobalOptions;
use pathreg::cli::{self, Command};
use pathreg::cmd::add::run_add_command;
use pathreg::cmd::config::{run_configs_command, run_options_command};
use pathreg::cmd::init::run_init_command;
use pathreg::config::loader::ConfigLoader;
use pathreg::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use pathreg::core::env::current_env;
use pathreg::error::{ConfigError, Result, bail_out};
use pathreg::logging::{LogConfig, init_logging};
use pathreg::shell::OutputTarget;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let (config_files, config) = match load_config(&cli.global) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(files = ?config_files, "config loaded");

    dispatch_command(&cli, &config_files, &config)
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

fn dispatch_command(cli: &cli::Cli, config_files: &[String], config: &Config) -> ExitCode {
    let result: Result<()> = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Configs) => {
            run_configs_command(config_files);
            Ok(())
        }
        Some(Command::Init(args)) => run_init_command(
            args,
            config,
            &mut current_env(),
            OutputTarget::detect(),
            &mut std::io::stdout().lock(),
            &mut std::io::stderr().lock(),
        ),
        Some(Command::Add(args)) => run_add_command(
            args,
            config,
            &mut current_env(),
            OutputTarget::detect(),
            &mut std::io::stdout().lock(),
        ),
        None => Err(bail_out("no command specified, use --help for usage information").into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for option in global.to_config_overrides() {
        loader = loader.set_option(&option)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> Result<(Vec<String>, Config)> {
    let loader = build_config_loader(global)?;
    let config_files = loader.format_loaded_files();
    let config = loader.build()?;
    Ok((config_files, config))
}
