// bild: Convention-Based C/C++ Build Driver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lazy, sequential directory traversal on top of `ignore::Walk`.
//!
//! ```text
//! walk(root, &WalkOptions)
//!   root missing      --> empty Entries
//!   WalkBuilder       no ignore files, no hidden filtering,
//!                     follow links, sorted by file name
//!   filter_entry      only descend into `descend_only` dirs
//!        |
//!        v
//!   Entries: Iterator<Item = DirEntry> (root itself skipped)
//! ```

use std::path::{Path, PathBuf};

use bon::Builder;
use ignore::{DirEntry, Walk, WalkBuilder};
use tracing::{trace, warn};

use crate::error::FsError;

/// Options for a directory traversal.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Maximum depth to traverse (None = unlimited)
    #[builder(setters(name = with_max_depth))]
    max_depth: Option<usize>,
    /// Follow symbolic links
    #[builder(setters(name = with_follow_links), default = true)]
    follow_links: bool,
    /// If set, subdirectories are only entered when named exactly this
    #[builder(setters(name = with_descend_only))]
    descend_only: Option<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    /// Options listing the immediate entries of a directory.
    #[must_use]
    pub fn immediate() -> Self {
        Self::builder().with_max_depth(1).build()
    }

    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    #[must_use]
    pub const fn follow_links(&self) -> bool {
        self.follow_links
    }

    #[must_use]
    pub fn descend_only(&self) -> Option<&str> {
        self.descend_only.as_deref()
    }
}

/// Entries produced by [`walk`]. Finite and not restartable.
pub struct Entries {
    root: PathBuf,
    inner: Option<Walk>,
    error_count: usize,
}

impl Entries {
    /// Number of entries that could not be read so far.
    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.error_count
    }
}

impl Iterator for Entries {
    type Item = DirEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let inner = self.inner.as_mut()?;
        loop {
            match inner.next()? {
                Ok(entry) if entry.depth() == 0 => {}
                Ok(entry) => {
                    trace!(path = %entry.path().display(), "visit");
                    return Some(entry);
                }
                Err(e) => {
                    let err = FsError::ReadDir {
                        path: self.root.display().to_string(),
                        message: e.to_string(),
                    };
                    warn!("{err}");
                    self.error_count += 1;
                }
            }
        }
    }
}

/// Builds a `WalkBuilder` with the given options.
fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);

    // Every entry counts, hidden or ignored
    builder.standard_filters(false);
    builder.follow_links(options.follow_links());
    builder.max_depth(options.max_depth());
    builder.sort_by_file_name(|a, b| a.cmp(b));

    if let Some(name) = options.descend_only() {
        let name = name.to_string();
        builder.filter_entry(move |entry| {
            entry.depth() == 0
                || !entry.file_type().is_some_and(|ft| ft.is_dir())
                || entry.file_name() == name.as_str()
        });
    }

    builder
}

/// Returns true if `dir` can be opened for listing.
#[must_use]
pub fn opens(dir: &Path) -> bool {
    std::fs::read_dir(dir).is_ok()
}

/// Walks `root` lazily.
///
/// A root that cannot be opened yields no entries; it is not an error.
///
/// # Example
/// ```no_run
/// use bild::discovery::walk::{walk, WalkOptions};
///
/// for entry in walk("src", &WalkOptions::immediate()) {
///     println!("{}", entry.path().display());
/// }
/// ```
pub fn walk<P: AsRef<Path>>(root: P, options: &WalkOptions) -> Entries {
    let root = root.as_ref();
    let inner = opens(root).then(|| build_walker(root, options).build());
    Entries {
        root: root.to_path_buf(),
        inner,
        error_count: 0,
    }
}
