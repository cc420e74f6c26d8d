// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |              build / config
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  toolchain, layout, scan  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!            descriptor   discovery  project
//!            proj.bild   depend/ src/  merge
//!                 |           |        |
//!                 +-----------+--------+
//!                             v
//!                           build
//!                  assemble, dirs, execute
//!
//!   +-----------------------------------------+
//!   |  core   process (spawn, PATH lookup)    |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod build;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod descriptor;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod project;
