// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Driver settings for bild.
//!
//! These settings describe the toolchain and the directory conventions; the
//! project itself (name, explicit link libraries) lives in the descriptor
//! file, see [`crate::descriptor`].
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. bild.toml (cwd, optional)
//! 3. --config FILE
//! 4. BILD_* env vars
//! 5. CLI overrides (--compiler)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! BILD_TOOLCHAIN__PROGRAM=clang++  → toolchain.program = "clang++"
//! BILD_LAYOUT__TARGET=out          → layout.target = "out"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{LayoutConfig, ScanConfig, ToolchainConfig};

/// Complete driver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Compiler driver and flags.
    pub toolchain: ToolchainConfig,
    /// Directory conventions.
    pub layout: LayoutConfig,
    /// Discovery rules.
    pub scan: ScanConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bild::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("bild.toml")
    ///     .with_env_prefix("BILD")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display, one `key = value` per line,
    /// sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let list = |items: &[String]| items.join(",");

        let mut options = BTreeMap::new();
        options.insert("toolchain.program", self.toolchain.program.clone());
        options.insert("toolchain.flags", list(&self.toolchain.flags));
        options.insert("toolchain.debug_flags", list(&self.toolchain.debug_flags));
        options.insert(
            "toolchain.library_path_marker",
            self.toolchain.library_path_marker.clone(),
        );
        options.insert("toolchain.link_marker", self.toolchain.link_marker.clone());
        options.insert(
            "toolchain.include_marker",
            self.toolchain.include_marker.clone(),
        );
        options.insert(
            "toolchain.output_marker",
            self.toolchain.output_marker.clone(),
        );
        options.insert(
            "layout.descriptor",
            self.layout.descriptor.display().to_string(),
        );
        options.insert("layout.source", self.layout.source.display().to_string());
        options.insert("layout.depend", self.layout.depend.display().to_string());
        options.insert("layout.target", self.layout.target.display().to_string());
        options.insert("scan.source_extensions", list(&self.scan.source_extensions));
        options.insert(
            "scan.library_extensions",
            list(&self.scan.library_extensions),
        );
        options.insert("scan.descend_into", self.scan.descend_into.clone());
        options.insert("scan.include_dir", self.scan.include_dir.clone());
        options.insert("scan.bin_dir", self.scan.bin_dir.clone());

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
