// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Convention-based discovery of sources and dependencies.
//!
//! ```text
//! depend/                      src/
//!   <dep>/include  -> -I         a.cpp          -> compiled
//!   <dep>/bin      -> -L         include/c.c    -> compiled
//!   <dep>/bin/x.a  -> -lx        sub/b.cpp      -> not visited
//! ```
//!
//! The two scans are independent; missing directories contribute nothing.

pub mod deps;
pub mod sources;
pub mod walk;

#[cfg(test)]
mod tests;

use serde::Serialize;
use std::path::PathBuf;

use crate::config::Config;

/// Everything the scanners found, in discovery order, duplicates kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Discovery {
    /// Compile units below the source root.
    pub source_files: Vec<PathBuf>,
    /// Library names found in dependency binary directories.
    pub libraries: Vec<String>,
    /// One header directory per dependency.
    pub include_paths: Vec<PathBuf>,
    /// One library directory per dependency whose binary directory opens.
    pub library_search_paths: Vec<PathBuf>,
}

/// Runs the dependency scan and the source scan with the configured layout.
#[must_use]
pub fn discover(config: &Config) -> Discovery {
    let deps = deps::scan_dependencies(&config.layout.depend, &config.scan);
    let source_files = sources::scan_sources(&config.layout.source, &config.scan);

    tracing::debug!(
        dependencies = deps.include_paths.len(),
        libraries = deps.libraries.len(),
        sources = source_files.len(),
        "discovery finished"
    );

    Discovery {
        source_files,
        libraries: deps.libraries,
        include_paths: deps.include_paths,
        library_search_paths: deps.library_search_paths,
    }
}

/// Splits a file name on its first `.` into stem and extension.
///
/// `libfoo.dll.a` has the extension `dll.a`; a name without `.` has none.
pub(crate) fn split_file_name(name: &str) -> Option<(&str, &str)> {
    name.split_once('.')
}
