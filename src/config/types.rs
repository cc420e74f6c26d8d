// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings sections.
//!
//! ```text
//! Config: ToolchainConfig, LayoutConfig, ScanConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// External compiler driver and the flags every invocation carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolchainConfig {
    /// Compiler driver executable (resolved via PATH when not a path).
    pub program: String,
    /// Baseline flags, always passed first.
    pub flags: Vec<String>,
    /// Flags appended when the debug mode token is given.
    pub debug_flags: Vec<String>,
    /// Marker prepended to each library search path.
    pub library_path_marker: String,
    /// Marker prepended to each link library.
    pub link_marker: String,
    /// Marker prepended to each include path.
    pub include_marker: String,
    /// Output path directive.
    pub output_marker: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            program: "g++".to_string(),
            flags: vec!["-Wall".to_string()],
            debug_flags: vec!["-g".to_string()],
            library_path_marker: "-L".to_string(),
            link_marker: "-l".to_string(),
            include_marker: "-I".to_string(),
            output_marker: "-o".to_string(),
        }
    }
}

/// Project directory layout, relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Project descriptor file.
    pub descriptor: PathBuf,
    /// Source root.
    pub source: PathBuf,
    /// Dependency root, one subdirectory per dependency.
    pub depend: PathBuf,
    /// Output root, holds `debug/` and `release/`.
    pub target: PathBuf,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            descriptor: PathBuf::from("proj.bild"),
            source: PathBuf::from("src"),
            depend: PathBuf::from("depend"),
            target: PathBuf::from("target"),
        }
    }
}

/// Discovery rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Extensions (after the first `.`) of compile units.
    pub source_extensions: Vec<String>,
    /// Extensions (after the first `.`) of linkable libraries.
    pub library_extensions: Vec<String>,
    /// The only subdirectory name the source scan descends into.
    pub descend_into: String,
    /// Per-dependency header directory.
    pub include_dir: String,
    /// Per-dependency library directory.
    pub bin_dir: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            source_extensions: vec!["c".to_string(), "cpp".to_string()],
            library_extensions: vec!["lib".to_string(), "a".to_string()],
            descend_into: "include".to_string(),
            include_dir: "include".to_string(),
            bin_dir: "bin".to_string(),
        }
    }
}

impl ScanConfig {
    /// Returns true if `extension` names a compile unit.
    #[must_use]
    pub fn is_source_extension(&self, extension: &str) -> bool {
        self.source_extensions.iter().any(|e| e == extension)
    }

    /// Returns true if `extension` names a linkable library.
    #[must_use]
    pub fn is_library_extension(&self, extension: &str) -> bool {
        self.library_extensions.iter().any(|e| e == extension)
    }
}
