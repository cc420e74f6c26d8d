// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project model.
//!
//! ```text
//! mode tokens ──> BuildOptions { flags, compiler_flags }
//! proj.bild   ──> Descriptor   { name, link_libraries }
//! src/ depend/ ─> Discovery    { sources, libraries, paths }
//!                     |
//!                     v
//!               Project (immutable snapshot)
//! ```
//!
//! Each stage produces a value that is moved into the next one; nothing is
//! mutated after [`Project::new`] returns.

use serde::Serialize;
use std::path::PathBuf;

use crate::config::types::ToolchainConfig;
use crate::descriptor::Descriptor;
use crate::discovery::Discovery;

/// Mode token that selects a debug build.
pub const DEBUG_TOKEN: &str = "-debug";

/// A single build mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BuildFlag {
    Debug,
    SharedLib,
    StaticLib,
}

/// Set of non-exclusive build mode flags.
///
/// Only `Debug` affects the build; `SharedLib` and `StaticLib` are reserved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildFlags {
    debug: bool,
    shared_lib: bool,
    static_lib: bool,
}

impl BuildFlags {
    /// Returns an empty flag set.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            debug: false,
            shared_lib: false,
            static_lib: false,
        }
    }

    /// Returns a copy of this set with `flag` added.
    #[must_use]
    pub const fn with(mut self, flag: BuildFlag) -> Self {
        match flag {
            BuildFlag::Debug => self.debug = true,
            BuildFlag::SharedLib => self.shared_lib = true,
            BuildFlag::StaticLib => self.static_lib = true,
        }
        self
    }

    /// Returns whether `flag` is in the set.
    #[must_use]
    pub const fn contains(&self, flag: BuildFlag) -> bool {
        match flag {
            BuildFlag::Debug => self.debug,
            BuildFlag::SharedLib => self.shared_lib,
            BuildFlag::StaticLib => self.static_lib,
        }
    }

    #[must_use]
    pub const fn is_debug(&self) -> bool {
        self.debug
    }

    #[must_use]
    pub const fn is_shared_lib(&self) -> bool {
        self.shared_lib
    }

    #[must_use]
    pub const fn is_static_lib(&self) -> bool {
        self.static_lib
    }

    /// Output subdirectory for this build flavor.
    #[must_use]
    pub const fn mode_dir(&self) -> &'static str {
        if self.debug { "debug" } else { "release" }
    }
}

/// Options derived from the command-line mode tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    flags: BuildFlags,
    compiler_flags: Vec<String>,
}

impl BuildOptions {
    /// Interprets mode tokens against the toolchain's flag sets.
    ///
    /// The baseline flags are always present. [`DEBUG_TOKEN`] sets the debug
    /// flag and appends the debug flags, once per occurrence. Any other token
    /// is ignored.
    pub fn from_modes<I, S>(modes: I, toolchain: &ToolchainConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flags = BuildFlags::none();
        let mut compiler_flags = toolchain.flags.clone();

        for mode in modes {
            let mode = mode.as_ref();
            if mode == DEBUG_TOKEN {
                flags = flags.with(BuildFlag::Debug);
                compiler_flags.extend(toolchain.debug_flags.iter().cloned());
            } else {
                tracing::debug!(token = mode, "ignoring unrecognized mode token");
            }
        }

        Self {
            flags,
            compiler_flags,
        }
    }

    #[must_use]
    pub const fn flags(&self) -> BuildFlags {
        self.flags
    }

    #[must_use]
    pub fn compiler_flags(&self) -> &[String] {
        &self.compiler_flags
    }
}

/// Everything known about the project once discovery has finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    name: String,
    build_flags: BuildFlags,
    compiler_flags: Vec<String>,
    source_files: Vec<PathBuf>,
    link_libraries: Vec<String>,
    include_paths: Vec<PathBuf>,
    library_search_paths: Vec<PathBuf>,
}

impl Project {
    /// Merges the three stage outputs.
    ///
    /// Descriptor `link` entries come before discovered libraries, matching
    /// the order the stages run in. Duplicates are kept.
    #[must_use]
    pub fn new(options: BuildOptions, descriptor: Descriptor, discovery: Discovery) -> Self {
        let (name, mut link_libraries) = descriptor.into_parts();
        let Discovery {
            source_files,
            libraries,
            include_paths,
            library_search_paths,
        } = discovery;
        link_libraries.extend(libraries);

        Self {
            name,
            build_flags: options.flags,
            compiler_flags: options.compiler_flags,
            source_files,
            link_libraries,
            include_paths,
            library_search_paths,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn build_flags(&self) -> BuildFlags {
        self.build_flags
    }

    #[must_use]
    pub fn compiler_flags(&self) -> &[String] {
        &self.compiler_flags
    }

    #[must_use]
    pub fn source_files(&self) -> &[PathBuf] {
        &self.source_files
    }

    #[must_use]
    pub fn link_libraries(&self) -> &[String] {
        &self.link_libraries
    }

    #[must_use]
    pub fn include_paths(&self) -> &[PathBuf] {
        &self.include_paths
    }

    #[must_use]
    pub fn library_search_paths(&self) -> &[PathBuf] {
        &self.library_search_paths
    }
}
