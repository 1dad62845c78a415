// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! root/
//!   build/mgpp/     (cache)
//!     mods/         resolver scratch directory
//!     game/         client/server game files
//! ```
//!
//! All paths are optional; relative ones are resolved against `root`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project and cache paths configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Project root (default: current directory).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Download cache directory (default: root/build/mgpp).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<PathBuf>,
}

impl PathsConfig {
    /// Resolve relative paths against `root` and fill in defaults.
    pub fn resolve(&mut self) {
        let root = self.root.clone().unwrap_or_else(|| PathBuf::from("."));
        self.cache = Some(match self.cache.take() {
            Some(cache) if cache.is_relative() && !cache.starts_with(&root) => root.join(cache),
            Some(cache) => cache,
            None => root.join("build").join("mgpp"),
        });
        self.root = Some(root);
    }

    /// Project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_deref().unwrap_or_else(|| Path::new("."))
    }

    /// Cache directory; call [`PathsConfig::resolve`] first for defaults.
    #[must_use]
    pub fn cache(&self) -> PathBuf {
        self.cache
            .clone()
            .unwrap_or_else(|| self.root().join("build").join("mgpp"))
    }

    /// Scratch directory the resolver downloads mods into.
    #[must_use]
    pub fn mods_dir(&self) -> PathBuf {
        self.cache().join("mods")
    }

    /// Directory holding client and server game files.
    #[must_use]
    pub fn game_dir(&self) -> PathBuf {
        self.cache().join("game")
    }

    /// Resolves a path from the configuration against `root`.
    #[must_use]
    pub fn under_root(&self, path: &Path) -> PathBuf {
        if path.is_relative() {
            self.root().join(path)
        } else {
            path.to_path_buf()
        }
    }
}
