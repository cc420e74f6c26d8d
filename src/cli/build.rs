// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build arguments.

use clap::Args;

/// Arguments controlling the build itself.
#[derive(Debug, Clone, Default, Args)]
pub struct BuildArgs {
    /// Mode tokens. `-debug` builds with debug information into the debug
    /// output directory; other tokens are ignored. Options must come
    /// before the first token.
    #[arg(value_name = "MODE", allow_hyphen_values = true)]
    pub modes: Vec<String>,

    /// Assembles and prints the compiler command without creating
    /// directories or running it.
    #[arg(long)]
    pub dry: bool,

    /// Prints the project and the compiler invocation as JSON on stdout.
    #[arg(long)]
    pub json: bool,

    /// Exits with a failure status when the compiler cannot be run or fails.
    #[arg(long)]
    pub strict: bool,
}
