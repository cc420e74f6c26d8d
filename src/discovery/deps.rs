// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dependency and library scanners.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::split_file_name;
use super::walk::{WalkOptions, opens, walk};
use crate::config::types::ScanConfig;

/// Result of scanning the dependency root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyScan {
    pub include_paths: Vec<PathBuf>,
    pub library_search_paths: Vec<PathBuf>,
    pub libraries: Vec<String>,
}

/// Result of scanning one binary directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryScan {
    pub search_path: PathBuf,
    pub libraries: Vec<String>,
}

/// Scans the immediate entries of `root`; every entry that is not a regular
/// file is a dependency unit.
///
/// Each unit contributes `<unit>/include` as an include path (whether or not
/// it exists) and whatever the library scan of `<unit>/bin` finds.
#[must_use]
pub fn scan_dependencies(root: &Path, scan: &ScanConfig) -> DependencyScan {
    let mut result = DependencyScan::default();

    if !opens(root) {
        debug!(root = %root.display(), "no dependency directory");
        return result;
    }

    for entry in walk(root, &WalkOptions::immediate()) {
        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let unit = entry.path();
        debug!(dependency = %unit.display(), "found dependency");
        result.include_paths.push(unit.join(&scan.include_dir));

        if let Some(libs) = scan_library_dir(&unit.join(&scan.bin_dir), scan) {
            result.library_search_paths.push(libs.search_path);
            result.libraries.extend(libs.libraries);
        }
    }

    result
}

/// Scans one binary directory for linkable libraries.
///
/// Returns `None` if the directory cannot be opened. Otherwise the directory
/// is the search path, and every regular file whose extension (after the
/// first `.`) is a library extension contributes its stem.
#[must_use]
pub fn scan_library_dir(dir: &Path, scan: &ScanConfig) -> Option<LibraryScan> {
    if !opens(dir) {
        debug!(dir = %dir.display(), "no library directory");
        return None;
    }

    let libraries = walk(dir, &WalkOptions::immediate())
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?;
            let (stem, extension) = split_file_name(name)?;
            if !scan.is_library_extension(extension) {
                trace!(file = name, "not a library");
                return None;
            }
            Some(stem.to_string())
        })
        .collect();

    Some(LibraryScan {
        search_path: dir.to_path_buf(),
        libraries,
    })
}
