// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable snapshot.
//!
//! ```text
//! current_env() --vars_os()--> Env
//!                                |  UTF-8 value      -> vars
//!                                |  non-UTF-8 value  -> unreadable (name only)
//!                                v
//!                     get / set / contains / ensure_utf8
//! ```
//!
//! - **Case-insensitive on Windows**, exact elsewhere
//! - A variable with a non-UTF-8 value still counts as set; it cannot be
//!   read or extended, only replaced

pub mod container;
pub mod types;


/// Captures the current process environment.
#[must_use]
pub fn current_env() -> container::Env {
    container::Env::from_os_vars(std::env::vars_os())
}
