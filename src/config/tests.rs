// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::loader::parse_option;
use super::{Config, ConfigLoader};
use crate::logging::LogLevel;
use crate::shell::Dialect;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.global.output_log_level, LogLevel::WARN);
    assert_eq!(config.global.shell, Dialect::Posix);
    assert_eq!(config.bootstrap.root_var, "PATHREG_ROOT");
    assert_eq!(config.bootstrap.search_path_var, "PYTHONPATH");
    assert!(config.bootstrap.root.is_none());
    assert!(config.bootstrap.extra.is_empty());
}

#[test]
fn test_config_parse() {
    let config = Config::parse(
        r#"
[global]
output_log_level = 4
shell = "fish"

[bootstrap]
root = "/srv/proj"
search_path_var = "PERL5LIB"
extra = ["$PATHREG_ROOT/tools"]
"#,
    )
    .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.shell, Dialect::Fish);
    assert_eq!(config.bootstrap.root, Some(PathBuf::from("/srv/proj")));
    assert_eq!(config.bootstrap.search_path_var, "PERL5LIB");
    assert_eq!(config.bootstrap.extra, ["$PATHREG_ROOT/tools"]);
}

#[test]
fn test_deny_unknown_fields_top_level() {
    assert!(Config::parse("[paths]\nprefix = \"/x\"").is_err());
    assert!(Config::parse("[bootstrap]\nroots = \"/x\"").is_err());
}

#[test]
fn test_log_level_bounds() {
    assert!(Config::parse("[global]\noutput_log_level = 6").is_ok());
    assert!(Config::parse("[global]\noutput_log_level = 7").is_err());
}

#[test]
fn test_invalid_shell_rejected() {
    assert!(Config::parse("[global]\nshell = \"tcsh\"").is_err());
}

#[test]
fn test_validate_variable_names() {
    let bad_name = Config::parse("[bootstrap]\nroot_var = \"MY-ROOT\"").unwrap_err();
    insta::assert_snapshot!(
        bad_name.to_string(),
        @"invalid value for 'root_var' in section '[bootstrap]': invalid variable name 'MY-ROOT'"
    );

    let same = Config::parse("[bootstrap]\nroot_var = \"X\"\nsearch_path_var = \"X\"").unwrap_err();
    insta::assert_snapshot!(
        same.to_string(),
        @"invalid value for 'search_path_var' in section '[bootstrap]': must differ from root_var 'X'"
    );
}

#[test]
fn test_format_options_deterministic() {
    let config = Config::parse(
        r#"
[global]
log_file = "pathreg.log"

[bootstrap]
root = "/srv/proj"
extra = ["/a", "/b"]
"#,
    )
    .unwrap();

    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    bootstrap.extra           = /a, /b
    bootstrap.root            = /srv/proj
    bootstrap.root_var        = PATHREG_ROOT
    bootstrap.search_path_var = PYTHONPATH
    global.file_log_level     = 5
    global.log_file           = pathreg.log
    global.output_log_level   = 2
    global.shell              = posix
    ");
}

// --- ConfigLoader Tests ---

#[test]
fn test_config_loader_add_toml_file_success() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(
        file,
        r#"
[bootstrap]
root_var = "PROJ_HOME"
"#
    )
    .expect("failed to write temp file");

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .build()
        .expect("build should succeed");

    assert_eq!(config.bootstrap.root_var, "PROJ_HOME");
}

#[test]
fn test_config_loader_add_toml_file_not_found() {
    let loader = ConfigLoader::new().add_toml_file("/nonexistent/path/to/pathreg.toml");

    // add_toml_file returns Self, but build() should fail for required files
    assert!(loader.build().is_err());
}

#[test]
fn test_config_loader_add_toml_file_invalid_toml() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "this is not valid toml {{{{{{").expect("failed to write");

    let result = ConfigLoader::new().add_toml_file(file.path()).build();
    assert!(result.is_err(), "build should fail with invalid TOML");
}

#[test]
fn test_config_loader_optional_only_tracks_existing() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/pathreg.toml");
    assert!(loader.loaded_files().is_empty());
    assert!(loader.build().is_ok());
}

#[test]
fn test_config_loader_format_loaded_files() {
    let loader = ConfigLoader::new()
        .add_toml_file("/etc/pathreg.toml")
        .add_toml_str("");

    assert_eq!(
        loader.format_loaded_files(),
        ["1. [file] /etc/pathreg.toml", "2. [string] <string>"]
    );
}

#[test]
fn test_config_loader_with_env_prefix() {
    // SAFETY: the variable name is unique to this test
    unsafe {
        std::env::set_var("PATHREGTEST_BOOTSTRAP__SEARCH_PATH_VAR", "PERL5LIB");
    }

    let config = ConfigLoader::new()
        .add_toml_str("[bootstrap]\nsearch_path_var = \"PYTHONPATH\"")
        .with_env_prefix("PATHREGTEST")
        .build()
        .expect("build should succeed");

    // SAFETY: same as above
    unsafe {
        std::env::remove_var("PATHREGTEST_BOOTSTRAP__SEARCH_PATH_VAR");
    }

    assert_eq!(config.bootstrap.search_path_var, "PERL5LIB");
}

#[test]
fn test_config_loader_env_list_for_extra() {
    // SAFETY: the variable name is unique to this test
    unsafe {
        std::env::set_var("PATHREGLISTTEST_BOOTSTRAP__EXTRA", "/opt/a:$PATHREG_ROOT/tools");
    }

    let config = ConfigLoader::new()
        .with_env_prefix("PATHREGLISTTEST")
        .build()
        .expect("build should succeed");

    // SAFETY: same as above
    unsafe {
        std::env::remove_var("PATHREGLISTTEST_BOOTSTRAP__EXTRA");
    }

    assert_eq!(config.bootstrap.extra, ["/opt/a", "$PATHREG_ROOT/tools"]);
}

#[test]
fn test_config_loader_set_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[global]\nshell = \"posix\"")
        .set("global.shell", "fish")
        .expect("set should succeed")
        .build()
        .expect("build should succeed");

    assert_eq!(config.global.shell, Dialect::Fish);
}

#[test]
fn test_config_loader_set_option() {
    let config = ConfigLoader::new()
        .set_option("global/output_log_level=4")
        .and_then(|loader| loader.set_option("bootstrap/root_var=PROJ_ROOT"))
        .expect("set_option should succeed")
        .build()
        .expect("build should succeed");

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.bootstrap.root_var, "PROJ_ROOT");
}

#[test]
fn test_parse_option() {
    assert_eq!(
        parse_option("bootstrap/root=/a=b").unwrap(),
        ("bootstrap.root".to_string(), "/a=b".to_string())
    );
    assert!(parse_option("bootstrap.root=/a").is_err());
    assert!(parse_option("bootstrap/root").is_err());
    assert!(parse_option("/root=/a").is_err());
}
