// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{BildError, BildResult, DescriptorError, FsError, ProcessError, format_failure};

#[test]
fn test_process_error_display() {
    let err = ProcessError::ExecutableNotFound {
        name: "g++".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"executable not found: 'g++' (not in PATH)");
}

#[test]
fn test_descriptor_error_is_boxed_into_bild_error() {
    let err: BildError = DescriptorError::Open {
        path: "proj.bild".to_string(),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    }
    .into();

    assert!(matches!(err, BildError::Descriptor(_)));
    assert!(err.to_string().starts_with("descriptor error: could not open project file 'proj.bild'"));
}

#[test]
fn test_fs_error_display() {
    let err = FsError::ReadDir {
        path: "depend".to_string(),
        message: "permission denied".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"failed to read directory 'depend': permission denied");
}

#[test]
fn test_format_failure_maps_fmt_error() {
    let err = format_failure("command line")(std::fmt::Error);
    insta::assert_snapshot!(err.to_string(), @"failed to format command line");
}

#[test]
fn test_bild_error_size() {
    // Format(Box<str>) is 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<BildError>();
    assert!(size <= 24, "BildError is {size} bytes, expected <= 24");
}

#[test]
fn test_bild_result_size() {
    let size = std::mem::size_of::<BildResult<()>>();
    assert!(size <= 24, "BildResult<()> is {size} bytes, expected <= 24");
}
