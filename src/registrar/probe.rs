// pathreg: Idempotent search-path registration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directory existence checks.

use std::path::Path;

/// Answers whether a resolved candidate names an existing directory.
pub trait DirProbe {
    fn is_dir(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem. Symbolic links are followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl DirProbe for FsProbe {
    fn is_dir(&self, path: &Path) -> bool {
        !path.as_os_str().is_empty() && path.is_dir()
    }
}

impl<P: DirProbe + ?Sized> DirProbe for &P {
    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }
}
