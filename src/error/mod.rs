// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          BildError (~24 bytes)
//!                 |
//!   +------+------+------+------+
//!   |      |      |      |      |
//!   v      v      v      v      v
//!  Cfg   Descr    Fs    Proc   Fmt
//!  Box    Box    Box    Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Config      ParseError, InvalidValue
//!   Descriptor  Open, Read
//!   Fs          CreateDir, ReadDir
//!   Process     ExecutableNotFound, SpawnFailed
//!
//! Only `Format` aborts a run; everything else
//! is logged by the stage that hit it.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`BildError`].
pub type BildResult<T> = std::result::Result<T, BildError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum BildError {
    /// Driver settings error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Project descriptor error.
    #[error("descriptor error: {0}")]
    Descriptor(#[from] Box<DescriptorError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Assembling an internal string failed.
    #[error("failed to format {0}")]
    Format(Box<str>),
}

/// Create a [`BildError::Format`] for a `fmt::Error` raised while building `what`.
pub fn format_failure(what: impl Into<String>) -> impl FnOnce(std::fmt::Error) -> BildError {
    let what = what.into();
    move |_| BildError::Format(what.into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for BildError {
                fn from(err: $error) -> Self {
                    BildError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    DescriptorError => Descriptor,
    FsError => Fs,
    ProcessError => Process,
}

// --- Config Errors ---

/// Driver settings errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse a settings source.
    #[error("failed to parse settings: {message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Descriptor Errors ---

/// Project descriptor errors.
///
/// These never abort a build; the parser logs them and continues with an
/// empty descriptor.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The descriptor file could not be opened.
    #[error("could not open project file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The descriptor file could not be read to the end.
    #[error("failed to read project file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Creating an output directory failed.
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Listing a directory failed part way.
    #[error("failed to read directory '{path}': {message}")]
    ReadDir { path: String, message: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
