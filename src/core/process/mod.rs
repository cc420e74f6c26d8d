// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::new("g++")
//!   .args() .name() .flag(ALLOW_FAILURE)
//!   .run()
//!       --> tokio::process::Command, awaited to completion
//!       --> ProcessOutput { exit_code }
//! ```

pub mod builder;
mod runner;
#[cfg(test)]
mod tests;
