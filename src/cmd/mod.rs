// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   init, add      statements on `out`, diagnostics on `err`
//!   options, configs
//! ```
//!
//! Handlers that emit shell statements take their environment snapshot,
//! output target and writers as arguments, so they never touch the real
//! process environment or stdout themselves.

pub mod add;
pub mod config;
pub mod init;

#[cfg(test)]
mod tests;
