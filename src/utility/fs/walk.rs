// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Glob search over a parallel directory walk.
//!
//! ```text
//! find_files(root, "build/libs/*.jar", options)
//!   ignore::WalkParallel --(file, path relative to root)--> wax glob
//!        |                                                    |
//!        +-- skip_dirs pruned before descending               v
//!                                              flume channel --> sorted Vec
//! ```

use crate::error::Result;
use bon::Builder;
use ignore::{WalkBuilder, WalkState};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wax::{Glob, Program};

/// Directory traversal options.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Depth limit; `None` walks the whole tree.
    #[builder(setters(name = with_max_depth))]
    max_depth: Option<usize>,
    #[builder(setters(name = with_include_hidden), default = false)]
    include_hidden: bool,
    /// Honor `.gitignore`, global git excludes and `.git/info/exclude`.
    #[builder(setters(name = with_respect_gitignore), default = true)]
    respect_gitignore: bool,
    /// Directory names never descended into.
    #[builder(setters(name = with_skip_dirs), default)]
    skip_dirs: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    #[must_use]
    pub const fn respect_gitignore(&self) -> bool {
        self.respect_gitignore
    }

    #[must_use]
    pub fn skip_dirs(&self) -> &[String] {
        &self.skip_dirs
    }

    /// Options for scanning a project's build output.
    ///
    /// Build directories are usually git-ignored, so ignore files are not
    /// consulted; VCS metadata and the Gradle cache are skipped.
    #[must_use]
    pub fn for_artifacts() -> Self {
        Self::builder()
            .with_respect_gitignore(false)
            .with_skip_dirs(vec![".git".to_string(), ".gradle".to_string()])
            .build()
    }

    fn walker(&self, root: &Path) -> WalkBuilder {
        let mut builder = WalkBuilder::new(root);
        builder
            .max_depth(self.max_depth)
            .hidden(!self.include_hidden)
            .git_ignore(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .git_exclude(self.respect_gitignore);

        if !self.skip_dirs.is_empty() {
            let skip_dirs = Arc::new(self.skip_dirs.clone());
            builder.filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                !(is_dir
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| skip_dirs.iter().any(|skip| skip == name)))
            });
        }
        builder
    }
}

/// Files under `root` whose path relative to `root` matches `pattern`.
///
/// Results are sorted.
///
/// # Errors
///
/// Returns an error if `root` does not exist or the pattern is invalid.
///
/// # Example
/// ```no_run
/// use mgpp_rs::utility::fs::walk::{find_files, WalkOptions};
///
/// let jars = find_files("core", "build/libs/*.jar", &WalkOptions::for_artifacts())?;
/// for jar in jars {
///     println!("{}", jar.display());
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn find_files<P: AsRef<Path>>(
    root: P,
    pattern: &str,
    options: &WalkOptions,
) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.exists() {
        anyhow::bail!("root directory does not exist: {}", root.display());
    }

    let glob =
        Glob::new(pattern).map_err(|e| anyhow::anyhow!("invalid glob pattern '{pattern}': {e}"))?;

    // Drained after the walk returns.
    let (tx, rx) = flume::unbounded::<PathBuf>();

    options.walker(root).build_parallel().run(|| {
        let tx = tx.clone();
        let glob = &glob;
        Box::new(move |entry| {
            if let Ok(entry) = entry
                && entry.file_type().is_some_and(|ft| ft.is_file())
                && let Ok(relative) = entry.path().strip_prefix(root)
                && glob.is_match(relative)
            {
                let _ = tx.send(entry.into_path());
            }
            WalkState::Continue
        })
    });

    drop(tx);
    let mut files: Vec<PathBuf> = rx.into_iter().collect();
    files.sort();
    Ok(files)
}
