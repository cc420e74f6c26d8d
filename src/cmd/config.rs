// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings display for `--show-config`.

use crate::config::Config;

/// Display the effective settings and the files they were read from.
pub fn run_show_config_command(config: &Config, config_files: &[String]) {
    if config_files.is_empty() {
        println!("# no settings files loaded, using defaults");
    } else {
        for line in config_files {
            println!("# {line}");
        }
    }

    for line in config.format_options() {
        println!("{line}");
    }
}
