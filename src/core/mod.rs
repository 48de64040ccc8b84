// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment management.
//!
//! ```text
//!    core
//!     |
//!     v
//!    env
//!     |
//!   Env (copy-on-write snapshot)
//!   EnvKey (case-insensitive on Windows)
//! ```

pub mod env;
