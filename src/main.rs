// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Settings --> show-config | build
//! ```

use std::process::ExitCode;

use bild::build::BuildOutcome;
use bild::cli::{self, Cli};
use bild::cli::global::GlobalOptions;
use bild::cmd::build::run_build_command;
use bild::cmd::config::run_show_config_command;
use bild::config::loader::ConfigLoader;
use bild::logging::init_logging;
use bild::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Settings file picked up from the working directory.
const DEFAULT_SETTINGS_FILE: &str = "bild.toml";

/// Prefix for settings environment variables.
const ENV_PREFIX: &str = "BILD";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch(cli: &Cli) -> ExitCode {
    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let config_files = loader.format_loaded_files();

    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load settings: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    if cli.global.show_config {
        run_show_config_command(&config, &config_files);
        return ExitCode::SUCCESS;
    }

    match run_build_command(&cli.build, &config).await {
        Ok(outcome) => exit_code_for(outcome, cli.build.strict),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// The driver succeeds regardless of the compiler unless `--strict` is set.
fn exit_code_for(outcome: BuildOutcome, strict: bool) -> ExitCode {
    if !strict || !outcome.failed() {
        return ExitCode::SUCCESS;
    }
    match outcome.exit_code() {
        Some(code) => u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from),
        None => ExitCode::FAILURE,
    }
}

fn build_config_loader(global: &GlobalOptions) -> bild::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(DEFAULT_SETTINGS_FILE);
    if let Some(ref path) = global.config {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);

    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}
