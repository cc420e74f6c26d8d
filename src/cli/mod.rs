// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for bild using clap derive.
//!
//! # Invocation
//!
//! ```text
//! bild [global options] [build options] [MODE]...
//!
//! bild                 release build
//! bild -debug          debug build (-g, target/debug/)
//! bild --dry -debug    show the debug command, run nothing
//! bild --show-config   print effective settings
//! ```

pub mod build;
pub mod global;


use crate::cli::build::BuildArgs;
use crate::cli::global::GlobalOptions;
use clap::Parser;

/// Convention-Based C/C++ Build Driver
///
/// Builds a single binary from the sources and dependencies found in the
/// working directory.
#[derive(Debug, Parser)]
#[command(
    name = "bild",
    author,
    version,
    about = "Convention-based C/C++ build driver",
    long_about = "bild Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Compiles every .c/.cpp file under src/ (and src/include/) into\n\
                  target/{release|debug}/<name>, linking against the libraries\n\
                  found under depend/<dep>/bin and adding depend/<dep>/include to\n\
                  the header search path. The project name and extra libraries\n\
                  come from proj.bild in the working directory.",
    after_help = "PROJECT FILE:\n\n\
                  proj.bild holds one `key=value` entry per line. Whitespace is\n\
                  ignored.\n\n\
                  \tname=myapp\n\
                  \tlink=pthread,m\n\n\
                  SETTINGS:\n\n\
                  The toolchain and directory names can be changed in bild.toml\n\
                  (working directory), a file given with --config, or BILD_*\n\
                  environment variables such as BILD_TOOLCHAIN__PROGRAM=clang++."
)]
pub struct Cli {
    /// Logging and settings options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Build options and mode tokens
    #[command(flatten)]
    pub build: BuildArgs,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
