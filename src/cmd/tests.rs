// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use tempfile::TempDir;

use super::add::run_add_command;
use super::init::run_init_command;
use crate::cli::add::AddArgs;
use crate::cli::init::InitArgs;
use crate::config::Config;
use crate::core::env::container::Env;
use crate::error::ShellError;
use crate::shell::{Dialect, OutputTarget};

fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn canonical(path: &Path) -> String {
    std::fs::canonicalize(path)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

fn init_args(root: &Path) -> InitArgs {
    InitArgs {
        root: Some(root.to_path_buf()),
        ..InitArgs::default()
    }
}

fn add_args(var: &str, candidates: &[&str]) -> AddArgs {
    AddArgs {
        var: var.to_string(),
        candidates: candidates.iter().map(ToString::to_string).collect(),
        prepend: false,
        shell: None,
        force: false,
    }
}

#[test]
fn test_init_emits_statements() {
    let dir = create_test_dir();
    let root = canonical(dir.path());
    let mut env = Env::new();
    let (mut out, mut err) = (Vec::new(), Vec::new());

    run_init_command(
        &init_args(dir.path()),
        &Config::default(),
        &mut env,
        OutputTarget::Captured,
        &mut out,
        &mut err,
    )
    .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("export PATHREG_ROOT='{root}'\nexport PYTHONPATH='{root}'\n")
    );
    assert_eq!(
        String::from_utf8(err).unwrap(),
        format!("PATHREG_ROOT is set to {root}\n")
    );
}

#[test]
fn test_init_second_run_keeps_search_path() {
    let dir = create_test_dir();
    let root = canonical(dir.path());
    let mut env = Env::new();
    env.set("PYTHONPATH", format!("{root}:/usr/lib/py"));
    let (mut out, mut err) = (Vec::new(), Vec::new());

    run_init_command(
        &init_args(dir.path()),
        &Config::default(),
        &mut env,
        OutputTarget::Captured,
        &mut out,
        &mut err,
    )
    .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("export PATHREG_ROOT='{root}'\n")
    );
}

#[test]
fn test_init_uses_config_and_fish() {
    let dir = create_test_dir();
    let root = canonical(dir.path());
    let config = Config::parse(&format!(
        "[global]\nshell = \"fish\"\n\n[bootstrap]\nroot = '{root}'\nroot_var = \"PROJ\"\nsearch_path_var = \"PERL5LIB\"\n"
    ))
    .unwrap();
    let mut env = Env::new();
    let (mut out, mut err) = (Vec::new(), Vec::new());

    run_init_command(
        &InitArgs::default(),
        &config,
        &mut env,
        OutputTarget::Captured,
        &mut out,
        &mut err,
    )
    .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("set -gx PROJ '{root}'\nset -gx PERL5LIB '{root}'\n")
    );
    assert_eq!(env.get("PERL5LIB"), Some(root.as_str()));
}

#[test]
fn test_init_cli_overrides_config() {
    let dir = create_test_dir();
    let mut env = Env::new();
    let args = InitArgs {
        shell: Some(Dialect::Fish),
        search_path_var: Some("CLASSPATH".to_string()),
        ..init_args(dir.path())
    };
    let (mut out, mut err) = (Vec::new(), Vec::new());

    run_init_command(
        &args,
        &Config::default(),
        &mut env,
        OutputTarget::Captured,
        &mut out,
        &mut err,
    )
    .unwrap();

    assert!(env.contains("CLASSPATH"));
    assert!(!env.contains("PYTHONPATH"));
    assert!(String::from_utf8(out).unwrap().starts_with("set -gx PATHREG_ROOT "));
}

#[test]
fn test_init_refuses_terminal() {
    let dir = create_test_dir();
    let mut env = Env::new();
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let result = run_init_command(
        &init_args(dir.path()),
        &Config::default(),
        &mut env,
        OutputTarget::Terminal,
        &mut out,
        &mut err,
    );

    let error = result.unwrap_err();
    assert!(matches!(
        error.downcast_ref::<ShellError>(),
        Some(ShellError::NotEvaluated { .. })
    ));
    assert!(out.is_empty());
    assert!(!env.contains("PATHREG_ROOT"));
    assert!(!env.contains("PYTHONPATH"));
}

#[test]
fn test_init_force_on_terminal() {
    let dir = create_test_dir();
    let mut env = Env::new();
    let args = InitArgs {
        force: true,
        ..init_args(dir.path())
    };
    let (mut out, mut err) = (Vec::new(), Vec::new());

    run_init_command(
        &args,
        &Config::default(),
        &mut env,
        OutputTarget::Terminal,
        &mut out,
        &mut err,
    )
    .unwrap();

    assert!(!out.is_empty());
}

#[test]
fn test_init_rejects_same_variable() {
    let dir = create_test_dir();
    let mut env = Env::new();
    let args = InitArgs {
        search_path_var: Some("PATHREG_ROOT".to_string()),
        ..init_args(dir.path())
    };
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let result = run_init_command(
        &args,
        &Config::default(),
        &mut env,
        OutputTarget::Captured,
        &mut out,
        &mut err,
    );

    assert!(result.is_err());
    assert!(out.is_empty());
}

#[test]
fn test_init_missing_root() {
    let dir = create_test_dir();
    let mut env = Env::new();
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let result = run_init_command(
        &init_args(&dir.path().join("missing")),
        &Config::default(),
        &mut env,
        OutputTarget::Captured,
        &mut out,
        &mut err,
    );

    assert!(result.is_err());
    assert!(out.is_empty());
    assert!(err.is_empty());
}

#[test]
#[cfg(unix)]
fn test_init_refuses_non_utf8_search_path() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let dir = create_test_dir();
    let mut env = Env::from_os_vars([(
        OsString::from("PYTHONPATH"),
        OsString::from_vec(b"/opt/lib\xff".to_vec()),
    )]);
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let error = run_init_command(
        &init_args(dir.path()),
        &Config::default(),
        &mut env,
        OutputTarget::Captured,
        &mut out,
        &mut err,
    )
    .unwrap_err();

    assert!(error.to_string().contains("'PYTHONPATH' is set to a value that is not valid UTF-8"));
    assert!(out.is_empty());
    assert!(err.is_empty());
    assert!(!env.contains("PATHREG_ROOT"));
}

#[test]
#[cfg(unix)]
fn test_add_refuses_non_utf8_variable() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let dir = create_test_dir();
    let path = canonical(dir.path());
    let mut env = Env::from_os_vars([(
        OsString::from("MYPATH"),
        OsString::from_vec(b"/opt/lib\xff".to_vec()),
    )]);
    let args = add_args("MYPATH", &[path.as_str()]);

    let mut out = Vec::new();
    let error = run_add_command(&args, &Config::default(), &mut env, OutputTarget::Captured, &mut out)
        .unwrap_err();

    assert!(matches!(
        error.downcast_ref::<ShellError>(),
        Some(ShellError::NotUtf8 { .. })
    ));
    assert!(out.is_empty());
    assert_eq!(env.get("MYPATH"), None);
}

#[test]
fn test_add_appends_and_is_idempotent() {
    let dir = create_test_dir();
    let path = canonical(dir.path());
    let mut env = Env::new();
    env.set("MYPATH", "/usr/lib");
    let args = add_args("MYPATH", &[path.as_str()]);

    let mut out = Vec::new();
    run_add_command(&args, &Config::default(), &mut env, OutputTarget::Captured, &mut out)
        .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("export MYPATH='/usr/lib:{path}'\n")
    );

    let mut again = Vec::new();
    run_add_command(&args, &Config::default(), &mut env, OutputTarget::Captured, &mut again)
        .unwrap();
    assert!(again.is_empty());
}

#[test]
fn test_add_prepend_with_expansion() {
    let dir = create_test_dir();
    let path = canonical(dir.path());
    let mut env = Env::new();
    env.set("PROJ", path.as_str());
    env.set("MYPATH", "/usr/lib");
    let args = AddArgs {
        prepend: true,
        ..add_args("MYPATH", &["${PROJ}"])
    };

    let mut out = Vec::new();
    run_add_command(&args, &Config::default(), &mut env, OutputTarget::Captured, &mut out)
        .unwrap();

    assert_eq!(env.get("MYPATH"), Some(format!("{path}:/usr/lib").as_str()));
}

#[test]
fn test_add_nothing_existing_leaves_unset() {
    let dir = create_test_dir();
    let mut env = Env::new();
    let missing = dir.path().join("missing");
    let args = add_args("MYPATH", &[missing.to_str().unwrap()]);

    let mut out = Vec::new();
    run_add_command(&args, &Config::default(), &mut env, OutputTarget::Captured, &mut out)
        .unwrap();

    assert!(out.is_empty());
    assert!(!env.contains("MYPATH"));
}

#[test]
fn test_add_invalid_name() {
    let mut env = Env::new();
    let args = add_args("MY-PATH", &["/tmp"]);

    let mut out = Vec::new();
    let error = run_add_command(&args, &Config::default(), &mut env, OutputTarget::Captured, &mut out)
        .unwrap_err();

    insta::assert_snapshot!(error.to_string(), @"invalid variable name 'MY-PATH'");
    assert!(!env.contains("MY-PATH"));
}

#[test]
fn test_add_refuses_terminal() {
    let mut env = Env::new();
    let args = add_args("MYPATH", &["/tmp"]);

    let mut out = Vec::new();
    let error = run_add_command(&args, &Config::default(), &mut env, OutputTarget::Terminal, &mut out)
        .unwrap_err();

    insta::assert_snapshot!(
        error.to_string(),
        @r#"'pathreg add' must be evaluated by the calling shell, e.g. eval "$(pathreg add)" (use --force to print anyway)"#
    );
    assert!(out.is_empty());
}
