// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_range() {
    assert_eq!(LogLevel::new(0).ok(), Some(LogLevel::SILENT));
    assert_eq!(LogLevel::new(6).map(|level| level.as_u8()).ok(), Some(6));

    let err = LogLevel::new(7).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'log_level' in section '[global]': log level must be 0-6, got 7"
    );
}

#[test]
fn test_filter_strings_scope_to_crate() {
    let filters: Vec<_> = (0..=6)
        .map(|level| LogLevel::new(level).unwrap().to_filter_string())
        .collect();
    assert_eq!(
        filters,
        [
            "off",
            "pathreg=error",
            "pathreg=warn",
            "pathreg=info",
            "pathreg=debug",
            "pathreg=trace",
            "trace",
        ]
    );
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_timestamps());
    assert!(!config.show_target());
}

#[test]
fn test_log_level_serde() {
    let level: LogLevel = serde_json::from_str("4").unwrap();
    assert_eq!(level, LogLevel::DEBUG);
    assert_eq!(serde_json::to_string(&LogLevel::WARN).unwrap(), "2");
    assert!(serde_json::from_str::<LogLevel>("9").is_err());
}
