// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Compiler command assembly and execution.
//!
//! ```text
//! Project + Config
//!      |
//!  assemble()          None if there are no sources
//!      |
//!      v
//! Invocation
//!   program  flags..  sources..  -L<dir>..  -l<lib>..  -I<dir>..  -o <target>/<mode>/<name>
//!      |
//!  execute()
//!   prepare_output_dirs   target/, target/{debug|release}/
//!   "Generated command: ..."
//!   run compiler, inherited stdio, wait
//!      |
//!      v
//! BuildOutcome { NoSources | DryRun | LaunchFailed | Completed(exit_code) }
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::process::builder::{ProcessBuilder, ProcessFlags};
use crate::error::{BildResult, FsError};
use crate::project::Project;

/// A fully assembled compiler invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    output_root: PathBuf,
    output_dir: PathBuf,
    output_path: PathBuf,
}

/// What happened to the build step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BuildOutcome {
    /// No compile units were found; nothing was run.
    NoSources,
    /// The command was assembled and shown but not run.
    DryRun,
    /// The compiler could not be found or started.
    LaunchFailed,
    /// The compiler ran to completion.
    Completed { exit_code: i32 },
}

impl BuildOutcome {
    /// Compiler exit code, if it ran.
    #[must_use]
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Completed { exit_code } => Some(*exit_code),
            _ => None,
        }
    }

    /// True if a compiler run was attempted and did not succeed.
    #[must_use]
    pub const fn failed(&self) -> bool {
        match self {
            Self::LaunchFailed => true,
            Self::Completed { exit_code } => *exit_code != 0,
            Self::NoSources | Self::DryRun => false,
        }
    }
}

/// Assembles the compiler invocation for `project`.
///
/// Returns `None`, after reporting it, when the project has no sources.
#[must_use]
pub fn assemble(project: &Project, config: &Config) -> Option<Invocation> {
    if project.source_files().is_empty() {
        warn!(
            "No .c or .cpp file found in {} directory.",
            config.layout.source.display()
        );
        return None;
    }

    let toolchain = &config.toolchain;

    let empty_links = project
        .link_libraries()
        .iter()
        .filter(|lib| lib.is_empty())
        .count();
    if empty_links > 0 {
        warn!(
            count = empty_links,
            "empty library name, passing a bare {} to the compiler", toolchain.link_marker
        );
    }

    let mut args: Vec<String> = project.compiler_flags().to_vec();

    args.extend(project.source_files().iter().map(|p| path_arg(p)));
    args.extend(
        project
            .library_search_paths()
            .iter()
            .map(|p| format!("{}{}", toolchain.library_path_marker, p.display())),
    );
    args.extend(
        project
            .link_libraries()
            .iter()
            .map(|lib| format!("{}{lib}", toolchain.link_marker)),
    );
    args.extend(
        project
            .include_paths()
            .iter()
            .map(|p| format!("{}{}", toolchain.include_marker, p.display())),
    );

    let output_root = config.layout.target.clone();
    let output_dir = output_root.join(project.build_flags().mode_dir());
    let output_path = output_dir.join(project.name());

    args.push(toolchain.output_marker.clone());
    args.push(path_arg(&output_path));

    Some(Invocation {
        program: toolchain.program.clone(),
        args,
        output_root,
        output_dir,
        output_path,
    })
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl Invocation {
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Top-level output directory.
    #[must_use]
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Mode-specific output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the binary the compiler is asked to produce.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// A process for this invocation, running `program` instead of the
    /// configured name (e.g. its resolved path).
    #[must_use]
    pub fn to_process(&self, program: impl AsRef<Path>) -> ProcessBuilder {
        ProcessBuilder::new(program)
            .args(&self.args)
            .name(self.program.clone())
    }

    /// The command line shown to the operator.
    ///
    /// # Errors
    ///
    /// Returns `BildError::Format` if the string cannot be assembled.
    pub fn command_line(&self) -> BildResult<String> {
        self.to_process(&self.program).command_line()
    }

    /// Ensures the output root and then the mode directory exist.
    ///
    /// Returns the errors hit, already logged; the compiler will report the
    /// consequence if the directory is really missing.
    pub fn prepare_output_dirs(&self) -> Vec<FsError> {
        [&self.output_root, &self.output_dir]
            .into_iter()
            .filter_map(|dir| ensure_dir(dir).err())
            .inspect(|e| warn!("{e}"))
            .collect()
    }
}

/// Creates `dir` unless it already exists.
fn ensure_dir(dir: &Path) -> std::result::Result<(), FsError> {
    if dir.is_dir() {
        return Ok(());
    }
    debug!(dir = %dir.display(), "creating output directory");
    std::fs::create_dir_all(dir).map_err(|source| FsError::CreateDir {
        path: dir.display().to_string(),
        source,
    })
}

/// Lists the search locations, libraries and include paths for the operator.
pub fn report(project: &Project) {
    info!("Binary Search Locations:");
    for path in project.library_search_paths() {
        info!("\t{}", path.display());
    }

    info!("Linking:");
    for lib in project.link_libraries() {
        info!("\t{lib}");
    }

    info!("Including:");
    for path in project.include_paths() {
        info!("\t{}", path.display());
    }
}

/// Prepares output directories, shows the command, and runs the compiler.
///
/// With `dry_run` the command is shown and nothing touches the disk. The
/// compiler's exit status is returned, never turned into an error.
///
/// # Errors
///
/// Only a failure to format the command line is an error.
pub async fn execute(invocation: &Invocation, dry_run: bool) -> BildResult<BuildOutcome> {
    let command_line = invocation.command_line()?;

    if dry_run {
        info!("Generated command: {command_line}");
        info!("[dry-run] not running the compiler");
        return Ok(BuildOutcome::DryRun);
    }

    invocation.prepare_output_dirs();
    info!("Generated command: {command_line}");

    let program = match ProcessBuilder::which(invocation.program()) {
        Ok(builder) => builder.program().clone(),
        Err(e) => {
            warn!("{e}");
            return Ok(BuildOutcome::LaunchFailed);
        }
    };

    let outcome = match invocation
        .to_process(program)
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await
    {
        Ok(output) => BuildOutcome::Completed {
            exit_code: output.exit_code(),
        },
        Err(e) => {
            warn!("failed to run {}: {e:#}", invocation.program());
            BuildOutcome::LaunchFailed
        }
    };

    match outcome {
        BuildOutcome::Completed { exit_code: 0 } => {
            info!(output = %invocation.output_path().display(), "compiler finished");
        }
        BuildOutcome::Completed { exit_code } => {
            warn!(exit_code, "compiler exited with a failure status");
        }
        _ => {}
    }

    Ok(outcome)
}
