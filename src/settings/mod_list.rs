// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Builder for the mod dependency list.

use std::path::PathBuf;

use tracing::warn;

use super::{ConfigWarning, Props, mod_from_props};
use crate::location::Location;
use crate::mods::Mod;

#[derive(Debug, Clone, Default)]
pub struct ModsSpec {
    mods: Vec<Mod>,
    warnings: Vec<ConfigWarning>,
}

impl ModsSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the list from `[[mods]]` tables; bad entries are skipped with a warning.
    #[must_use]
    pub fn from_config(entries: &[Props]) -> Self {
        let mut spec = Self::new();
        for props in entries {
            spec.add_map(props);
        }
        spec
    }

    pub fn add(&mut self, m: Mod) -> &mut Self {
        self.mods.push(m);
        self
    }

    pub fn github(
        &mut self,
        user: impl Into<String>,
        repo: impl Into<String>,
        tag: impl Into<String>,
        file: impl Into<String>,
    ) -> &mut Self {
        self.add(Mod::remote(Location::GitHub {
            user: user.into(),
            repo: repo.into(),
            tag: tag.into(),
            file: file.into(),
        }))
    }

    pub fn local(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.add(Mod::remote(Location::LocalPath { path: path.into() }))
    }

    pub fn official(&mut self, version: impl Into<String>) -> &mut Self {
        self.add(Mod::remote(Location::Official {
            version: version.into(),
        }))
    }

    pub fn be(&mut self, build: impl Into<String>) -> &mut Self {
        self.add(Mod::remote(Location::BleedingEdge {
            build: build.into(),
        }))
    }

    /// JVM mod from the latest release of `user/repo`.
    pub fn jvm(&mut self, repo: impl Into<String>) -> &mut Self {
        self.add(Mod::jvm(repo))
    }

    /// JSON mod zipped from `branch` of `user/repo`.
    pub fn json(&mut self, repo: impl Into<String>, branch: Option<&str>) -> &mut Self {
        self.add(Mod::json(repo, branch.map(str::to_string)))
    }

    pub fn from_task(&mut self, task_name: impl Into<String>) -> &mut Self {
        self.add(Mod::task(task_name))
    }

    pub fn project(&mut self, project: impl Into<String>) -> &mut Self {
        self.add(Mod::project(project))
    }

    /// Adds a mod given as a key/value table with a `kind` key.
    pub fn add_map(&mut self, props: &Props) -> &mut Self {
        match mod_from_props(props) {
            Ok(m) => self.add(m),
            Err(warning) => {
                warn!("{warning}");
                self.warnings.push(warning);
                self
            }
        }
    }

    #[must_use]
    pub fn mods(&self) -> &[Mod] {
        &self.mods
    }

    #[must_use]
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    #[must_use]
    pub fn freeze(self) -> Vec<Mod> {
        self.mods
    }
}
