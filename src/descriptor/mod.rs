// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project descriptor (`proj.bild`) parser.
//!
//! ```text
//! name=<identifier>
//! link=<lib1>,<lib2>,...
//! ```
//!
//! Whitespace anywhere on a line is removed before the line is split on its
//! first `=`. A line without `=` is a key with an empty value. Unknown keys
//! are ignored.

use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{BildResult, DescriptorError};

/// Parsed descriptor contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    name: String,
    link_libraries: Vec<String>,
}

impl Descriptor {
    /// Loads the descriptor at `path`.
    ///
    /// Never fails: an unreadable file is reported and yields an empty
    /// descriptor, and a missing `name` is reported naming the file.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(descriptor) => {
                if descriptor.name.is_empty() {
                    warn!("Project name not set in {}", path.display());
                }
                descriptor
            }
            Err(e) => {
                warn!("{e}");
                Self::default()
            }
        }
    }

    /// Reads and parses the descriptor at `path`.
    ///
    /// # Errors
    ///
    /// Returns `DescriptorError::Open` if the file cannot be opened and
    /// `DescriptorError::Read` if reading a line fails.
    pub fn read(path: &Path) -> BildResult<Self> {
        let file = std::fs::File::open(path).map_err(|source| DescriptorError::Open {
            path: path.display().to_string(),
            source,
        })?;

        let mut descriptor = Self::default();
        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| DescriptorError::Read {
                    path: path.display().to_string(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            descriptor.apply_line(&String::from_utf8_lossy(&buf));
        }
        Ok(descriptor)
    }

    /// Parses descriptor text held in memory.
    #[must_use]
    pub fn parse_str(content: &str) -> Self {
        let mut descriptor = Self::default();
        for line in content.lines() {
            descriptor.apply_line(line);
        }
        descriptor
    }

    fn apply_line(&mut self, line: &str) {
        let line: String = line.chars().filter(|&c| !is_space(c)).collect();
        let (key, value) = split_entry(&line);

        match key {
            "name" => self.name = value.to_string(),
            "link" => self
                .link_libraries
                .extend(value.split(',').map(str::to_string)),
            "" => {}
            other => debug!(key = other, "ignoring unknown descriptor key"),
        }
    }

    /// Output binary name, empty if the descriptor never set one.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Libraries listed by `link` entries, in order.
    #[must_use]
    pub fn link_libraries(&self) -> &[String] {
        &self.link_libraries
    }

    pub(crate) fn into_parts(self) -> (String, Vec<String>) {
        (self.name, self.link_libraries)
    }
}

/// ASCII whitespace, vertical tab included.
const fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Splits a whitespace-free line on its first `=`.
fn split_entry(line: &str) -> (&str, &str) {
    line.split_once('=').unwrap_or((line, ""))
}
