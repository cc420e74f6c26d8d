// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Source scanner.
//!
//! Files directly under the source root are considered, and the walk only
//! descends into subdirectories named like [`ScanConfig::descend_into`]
//! (`include` by default), at any depth. Everything else is pruned.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::split_file_name;
use super::walk::{WalkOptions, walk};
use crate::config::types::ScanConfig;

/// Collects compile units below `root` as paths prefixed with `root`.
#[must_use]
pub fn scan_sources(root: &Path, scan: &ScanConfig) -> Vec<PathBuf> {
    let options = WalkOptions::builder()
        .with_descend_only(scan.descend_into.clone())
        .build();

    let mut entries = walk(root, &options);
    let sources: Vec<PathBuf> = entries
        .by_ref()
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .and_then(split_file_name)
                .is_some_and(|(_, extension)| scan.is_source_extension(extension))
        })
        .map(ignore::DirEntry::into_path)
        .collect();

    debug!(
        root = %root.display(),
        count = sources.len(),
        errors = entries.error_count(),
        "source scan finished"
    );
    sources
}
