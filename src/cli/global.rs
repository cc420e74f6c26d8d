// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options: logging and settings sources.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Extra settings file, loaded after bild.toml
//! --compiler PROG   ← toolchain.program override
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (defaults to --log-level)
//! --log-file FILE   ← Also log to FILE
//!
//! Precedence: CLI flags > BILD_* env > --config > bild.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Additional TOML settings file, loaded after bild.toml.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Compiler driver to run instead of toolchain.program.
    #[arg(long = "compiler", value_name = "PROGRAM")]
    pub compiler: Option<String>,

    /// Prints the effective settings and exits.
    #[arg(long = "show-config")]
    pub show_config: bool,
}

impl GlobalOptions {
    /// Converts command-line options to settings overrides, as
    /// `(dotted key, value)` pairs.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();

        if let Some(ref compiler) = self.compiler {
            overrides.push(("toolchain.program", compiler.clone()));
        }

        overrides
    }
}
