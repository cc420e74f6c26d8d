// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.toolchain.program, "g++");
    assert_eq!(config.toolchain.flags, ["-Wall"]);
    assert_eq!(config.toolchain.debug_flags, ["-g"]);
    assert_eq!(config.layout.descriptor, PathBuf::from("proj.bild"));
    assert_eq!(config.layout.source, PathBuf::from("src"));
    assert_eq!(config.layout.depend, PathBuf::from("depend"));
    assert_eq!(config.layout.target, PathBuf::from("target"));
    assert_eq!(config.scan.source_extensions, ["c", "cpp"]);
    assert_eq!(config.scan.library_extensions, ["lib", "a"]);
    assert_eq!(config.scan.descend_into, "include");
}

#[test]
fn test_empty_sources_yield_defaults() {
    let config = ConfigLoader::new().build().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_sections() {
    let config = Config::parse(
        r#"
[toolchain]
program = "clang++"

[layout]
target = "out"
"#,
    )
    .unwrap();

    assert_eq!(config.toolchain.program, "clang++");
    // Untouched keys keep their defaults
    assert_eq!(config.toolchain.flags, ["-Wall"]);
    assert_eq!(config.layout.target, PathBuf::from("out"));
    assert_eq!(config.layout.source, PathBuf::from("src"));
}

#[test]
fn test_parse_rejects_unknown_keys() {
    let result = Config::parse(
        r#"
[toolchain]
compiler = "clang++"
"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_later_sources_override_earlier() {
    let config = ConfigLoader::new()
        .add_toml_str("[toolchain]\nprogram = \"gcc\"\nflags = [\"-O2\"]\n")
        .add_toml_str("[toolchain]\nprogram = \"clang\"\n")
        .build()
        .unwrap();

    assert_eq!(config.toolchain.program, "clang");
    assert_eq!(config.toolchain.flags, ["-O2"]);
}

#[test]
fn test_set_override_wins() {
    let config = ConfigLoader::new()
        .add_toml_str("[toolchain]\nprogram = \"gcc\"\n")
        .set("toolchain.program", "cc")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.toolchain.program, "cc");
}

#[test]
fn test_from_file_and_loaded_files() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("bild.toml");
    std::fs::write(&path, "[scan]\nsource_extensions = [\"c\"]\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.scan.source_extensions, ["c"]);

    let missing = temp.path().join("missing.toml");
    let loader = ConfigLoader::new()
        .add_toml_file_optional(&missing)
        .add_toml_file(&path);
    assert_eq!(loader.loaded_files(), vec![("file".to_string(), path.clone())]);
    assert_eq!(
        loader.format_loaded_files(),
        vec![format!("1. [file] {}", path.display())]
    );
}

#[test]
fn test_missing_required_file_fails() {
    let temp = tempfile::tempdir().unwrap();
    let result = Config::from_file(temp.path().join("nope.toml"));
    assert!(result.is_err());
}

#[test]
fn test_scan_extension_predicates() {
    let config = Config::default();
    assert!(config.scan.is_source_extension("cpp"));
    assert!(config.scan.is_source_extension("c"));
    assert!(!config.scan.is_source_extension("h"));
    assert!(!config.scan.is_source_extension("test.cpp"));
    assert!(config.scan.is_library_extension("a"));
    assert!(config.scan.is_library_extension("lib"));
    assert!(!config.scan.is_library_extension("so"));
}

#[test]
fn test_format_options() {
    let options = Config::default().format_options();
    assert_eq!(options.len(), 16);
    insta::assert_snapshot!(options[0], @"layout.depend                 = depend");
    assert!(options.contains(&"toolchain.program             = g++".to_string()));
    assert!(options.contains(&"scan.source_extensions        = c,cpp".to_string()));
    assert!(options.contains(&"toolchain.library_path_marker = -L".to_string()));
}
