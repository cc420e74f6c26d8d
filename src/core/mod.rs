// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for running external tools.
//!
//! ```text
//!   core
//!    |
//!    v
//! process
//!    |
//! Builder, Output, PATH lookup
//! ```

pub mod process;
