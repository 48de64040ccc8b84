// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered, colon-separated search path values.
//!
//! ```text
//! ""            -> []
//! "/a:/b"       -> ["/a", "/b"]
//! "/a::/b"      -> ["/a", "", "/b"]   (kept verbatim)
//! ```

use std::fmt;

/// Separator between search path entries.
pub const SEPARATOR: char = ':';

/// The value of a path-like environment variable as a list of entries.
///
/// Parsing then rendering gives back the original value, so entries that
/// were already present are never rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<String>,
}

impl SearchPath {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Splits a variable value into entries. An empty value has no entries.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.is_empty() {
            return Self::new();
        }
        Self {
            entries: value.split(SEPARATOR).map(str::to_owned).collect(),
        }
    }

    #[must_use]
    pub const fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks whether `entry` occurs as a whole segment of the value.
    ///
    /// The match is anchored at the start of the value or after a separator,
    /// and at the end of the value or before a separator, so `/opt/foo` never
    /// matches `/opt/foobar`. Comparison is exact: no case folding, no
    /// trailing-slash or symlink normalization.
    #[must_use]
    pub fn contains(&self, entry: &str) -> bool {
        if entry.contains(SEPARATOR) {
            // A single entry with a separator in it spans several segments
            let value = self.to_value();
            let sep = SEPARATOR;
            return value == entry
                || value.starts_with(&format!("{entry}{sep}"))
                || value.ends_with(&format!("{sep}{entry}"))
                || value.contains(&format!("{sep}{entry}{sep}"));
        }
        self.entries.iter().any(|e| e == entry)
    }

    /// Adds an entry after the existing ones.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Renders the entries back into a variable value.
    #[must_use]
    pub fn to_value(&self) -> String {
        let mut sep = [0_u8; 4];
        self.entries.join(SEPARATOR.encode_utf8(&mut sep))
    }
}

impl fmt::Display for SearchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_value())
    }
}

impl From<&str> for SearchPath {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}
