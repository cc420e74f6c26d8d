// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::deps::{scan_dependencies, scan_library_dir};
use super::sources::scan_sources;
use super::walk::{WalkOptions, walk};
use super::{discover, split_file_name};
use crate::config::Config;
use crate::config::types::ScanConfig;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

#[test]
fn test_split_file_name_uses_first_dot() {
    assert_eq!(split_file_name("libfoo.a"), Some(("libfoo", "a")));
    assert_eq!(split_file_name("libfoo.dll.a"), Some(("libfoo", "dll.a")));
    assert_eq!(split_file_name(".hidden"), Some(("", "hidden")));
    assert_eq!(split_file_name("Makefile"), None);
}

#[test]
fn test_walk_missing_root_is_empty() {
    let temp = temp_dir();
    let mut entries = walk(temp.path().join("nope"), &WalkOptions::default());
    assert!(entries.next().is_none());
    assert_eq!(entries.error_count(), 0);
}

#[test]
fn test_walk_immediate_is_sorted_and_shallow() {
    let temp = temp_dir();
    touch(temp.path(), "b.txt");
    touch(temp.path(), "a.txt");
    touch(temp.path(), "sub/c.txt");

    let names: Vec<String> = walk(temp.path(), &WalkOptions::immediate())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["a.txt", "b.txt", "sub"]);
}

#[test]
fn test_dependency_scan() {
    let temp = temp_dir();
    let depend = temp.path().join("depend");
    fs::create_dir_all(depend.join("foo/include")).unwrap();
    touch(&depend, "foo/bin/libfoo.a");

    let scan = scan_dependencies(&depend, &ScanConfig::default());

    assert_eq!(scan.include_paths, [depend.join("foo").join("include")]);
    assert_eq!(scan.library_search_paths, [depend.join("foo").join("bin")]);
    assert_eq!(scan.libraries, ["libfoo"]);
}

#[test]
fn test_dependency_without_bin_still_contributes_include() {
    let temp = temp_dir();
    let depend = temp.path().join("depend");
    fs::create_dir_all(depend.join("headers_only")).unwrap();
    touch(&depend, "README.md");

    let scan = scan_dependencies(&depend, &ScanConfig::default());

    assert_eq!(
        scan.include_paths,
        [depend.join("headers_only").join("include")]
    );
    assert!(scan.library_search_paths.is_empty());
    assert!(scan.libraries.is_empty());
}

#[test]
fn test_dependency_scan_missing_root() {
    let temp = temp_dir();
    let scan = scan_dependencies(&temp.path().join("depend"), &ScanConfig::default());
    assert_eq!(scan, super::deps::DependencyScan::default());
}

#[test]
fn test_multiple_dependencies_in_name_order() {
    let temp = temp_dir();
    let depend = temp.path().join("depend");
    touch(&depend, "zlib/bin/z.lib");
    touch(&depend, "glfw/bin/glfw3.a");
    touch(&depend, "glfw/bin/glfw3dll.a");

    let scan = scan_dependencies(&depend, &ScanConfig::default());

    assert_eq!(
        scan.include_paths,
        [
            depend.join("glfw").join("include"),
            depend.join("zlib").join("include")
        ]
    );
    assert_eq!(
        scan.library_search_paths,
        [depend.join("glfw").join("bin"), depend.join("zlib").join("bin")]
    );
    assert_eq!(scan.libraries, ["glfw3", "glfw3dll", "z"]);
}

#[test]
fn test_library_scan_filters_extensions() {
    let temp = temp_dir();
    let bin = temp.path().join("bin");
    touch(&bin, "libbar.a");
    touch(&bin, "bar.lib");
    touch(&bin, "bar.dll");
    touch(&bin, "libbar.so.1");
    touch(&bin, "libbaz.dll.a");
    touch(&bin, "notes");
    touch(&bin, ".a");
    fs::create_dir_all(bin.join("nested.a")).unwrap();

    let scan = scan_library_dir(&bin, &ScanConfig::default()).unwrap();

    assert_eq!(scan.search_path, bin);
    // `.a` has an empty stem and is still a library
    assert_eq!(scan.libraries, ["", "bar", "libbar"]);
}

#[test]
fn test_library_scan_empty_dir_still_registers_search_path() {
    let temp = temp_dir();
    let bin = temp.path().join("bin");
    fs::create_dir_all(&bin).unwrap();

    let scan = scan_library_dir(&bin, &ScanConfig::default()).unwrap();
    assert_eq!(scan.search_path, bin);
    assert!(scan.libraries.is_empty());

    assert!(scan_library_dir(&temp.path().join("missing"), &ScanConfig::default()).is_none());
}

#[test]
fn test_source_scan_skips_non_include_subdirs() {
    let temp = temp_dir();
    let src = temp.path().join("src");
    touch(&src, "a.cpp");
    touch(&src, "sub/b.cpp");

    let sources = scan_sources(&src, &ScanConfig::default());
    assert_eq!(sources, [src.join("a.cpp")]);
}

#[test]
fn test_source_scan_descends_into_include() {
    let temp = temp_dir();
    let src = temp.path().join("src");
    touch(&src, "include/c.c");
    touch(&src, "include/include/d.cpp");
    touch(&src, "include/other/e.cpp");
    touch(&src, "main.cpp");

    let sources = scan_sources(&src, &ScanConfig::default());
    assert_eq!(
        sources,
        [
            src.join("include").join("c.c"),
            src.join("include").join("include").join("d.cpp"),
            src.join("main.cpp"),
        ]
    );
}

#[test]
fn test_source_scan_extension_rules() {
    let temp = temp_dir();
    let src = temp.path().join("src");
    touch(&src, "a.c");
    touch(&src, "b.cpp");
    touch(&src, "c.h");
    touch(&src, "d.test.cpp");
    touch(&src, "cpp");
    touch(&src, ".hidden.c");

    let sources = scan_sources(&src, &ScanConfig::default());
    // `.hidden.c` has the extension `hidden.c`
    assert_eq!(sources, [src.join("a.c"), src.join("b.cpp")]);
}

#[test]
fn test_source_scan_missing_root() {
    let scan = ScanConfig::default();
    let sources = scan_sources(Path::new("definitely/not/here"), &scan);
    assert!(sources.is_empty());
}

#[test]
fn test_discover_combines_scans() {
    let temp = temp_dir();
    let root = temp.path();
    touch(root, "src/main.cpp");
    touch(root, "depend/foo/bin/libfoo.a");

    let mut config = Config::default();
    config.layout.source = root.join("src");
    config.layout.depend = root.join("depend");

    let discovery = discover(&config);

    assert_eq!(discovery.source_files, [root.join("src").join("main.cpp")]);
    assert_eq!(discovery.libraries, ["libfoo"]);
    assert_eq!(
        discovery.include_paths,
        [root.join("depend").join("foo").join("include")]
    );
    assert_eq!(
        discovery.library_search_paths,
        [root.join("depend").join("foo").join("bin")]
    );
}
