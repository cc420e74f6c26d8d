// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::{ProcessBuilder, ProcessFlags};
use crate::error::ProcessError;

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_success() {
    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "exit 0"])
        .run()
        .await
        .expect("sh should succeed");

    assert!(output.success());
    assert_eq!(output.exit_code(), 0);
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_exit_code_allowed() {
    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "exit 42"])
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await
        .expect("process should complete");

    assert_eq!(output.exit_code(), 42);
    assert!(!output.success());
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_exit_code_rejected() {
    let result = ProcessBuilder::new("/bin/sh")
        .args(["-c", "exit 3"])
        .name("failing")
        .run()
        .await;

    let err = result.unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"failing exited with code 3");
}

#[tokio::test]
async fn test_spawn_failure_is_process_error() {
    let err = ProcessBuilder::new("nonexistent_program_12345")
        .run()
        .await
        .unwrap_err();

    assert!(
        matches!(
            err.downcast_ref::<ProcessError>(),
            Some(ProcessError::SpawnFailed { .. })
        ),
        "unexpected error: {err:#}"
    );
    assert!(err.to_string().contains("nonexistent_program_12345"));
}

#[test]
fn test_command_line_quotes_spaces() {
    let builder = ProcessBuilder::new("g++").args([
        "-Wall",
        "src/my file.cpp",
        "-o",
        "target/release/app",
    ]);

    insta::assert_snapshot!(
        builder.command_line().unwrap(),
        @r#"g++ -Wall "src/my file.cpp" -o target/release/app"#
    );
}

#[test]
fn test_executable_lookup_not_found() {
    let program = "nonexistent_program_12345";

    let err = ProcessBuilder::which(program).unwrap_err();
    assert!(err.to_string().contains(program));
    assert!(ProcessBuilder::find(program).is_none());
}

#[cfg(not(windows))]
#[test]
fn test_executable_lookup_found() {
    let builder = ProcessBuilder::which("sh").expect("sh should be in PATH");
    assert!(builder.program().exists());
    // Second lookup is served from the cache
    assert_eq!(ProcessBuilder::find("sh"), Some(builder.program().clone()));
}
