// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command implementation for bild.
//!
//! ```text
//! modes ----> BuildOptions --+
//! proj.bild -> Descriptor ---+--> Project --> Invocation --> BuildOutcome
//! depend/, src/ -> Discovery +
//! ```

use serde::Serialize;

use crate::build::{self, BuildOutcome, Invocation};
use crate::cli::build::BuildArgs;
use crate::config::Config;
use crate::descriptor::Descriptor;
use crate::discovery::discover;
use crate::error::Result;
use crate::project::{BuildOptions, Project};

#[derive(Serialize)]
struct BuildReport<'a> {
    project: &'a Project,
    invocation: Option<&'a Invocation>,
}

/// Main handler for the build.
///
/// Runs the pipeline from mode tokens to compiler exit. Only a fatal error
/// is returned as `Err`; everything else ends up in the [`BuildOutcome`].
///
/// # Errors
///
/// Returns an error if the command line cannot be formatted or the JSON
/// report cannot be written.
pub async fn run_build_command(args: &BuildArgs, config: &Config) -> Result<BuildOutcome> {
    let options = BuildOptions::from_modes(&args.modes, &config.toolchain);
    let descriptor = Descriptor::load(&config.layout.descriptor);
    let discovery = discover(config);
    let project = Project::new(options, descriptor, discovery);

    tracing::debug!(
        name = project.name(),
        mode = project.build_flags().mode_dir(),
        sources = project.source_files().len(),
        "project assembled"
    );

    let invocation = build::assemble(&project, config);

    if args.json {
        print_report(&project, invocation.as_ref())?;
    }

    let Some(invocation) = invocation else {
        return Ok(BuildOutcome::NoSources);
    };

    build::report(&project);
    let outcome = build::execute(&invocation, args.dry).await?;
    Ok(outcome)
}

fn print_report(project: &Project, invocation: Option<&Invocation>) -> Result<()> {
    let report = BuildReport {
        project,
        invocation,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
