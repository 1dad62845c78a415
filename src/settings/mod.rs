// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration front-end for run targets and the mod list.
//!
//! ```text
//! typed setters ----+
//!                   +--> TargetSpec (CommonSettings backend) --freeze--> RunTarget
//! apply_map(props) -+          |
//!                              +-- warnings: Configuration | LocationOverride
//!
//! ModsSpec: add()/jvm()/... + add_map(props) --freeze--> Vec<Mod>
//! ```
//!
//! Nothing here fails: bad input becomes a [`ConfigWarning`], is logged, and
//! leaves the previous state in place.

pub mod mod_list;
pub mod props;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::config::types::TargetConfig;
use crate::location::{GameSide, Location};
use crate::notation::{LATEST, TaskNamer, normalize};

pub use mod_list::ModsSpec;
pub use props::{location_from_props, mod_from_props, prop_string};

/// A loosely typed key/value table.
pub type Props = BTreeMap<String, serde_json::Value>;

/// Non-fatal configuration problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
    /// Missing or invalid input; the setting was not applied.
    #[error("{call}: {message}")]
    Configuration { call: String, message: String },

    /// A second game location replaced the first.
    #[error("the game is already set to {previous}, and will be overridden by {next}")]
    LocationOverride { previous: Location, next: Location },
}

/// Mutable settings shared by client and server targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonSettings {
    pub name: String,
    pub startup_args: Vec<String>,
    pub jvm_args: Vec<String>,
    pub data_dir: Option<String>,
    pub modpack: Option<String>,
    pub location: Option<Location>,
}

/// Builder for one run target.
#[derive(Debug, Clone)]
pub struct TargetSpec {
    side: GameSide,
    backend: CommonSettings,
    warnings: Vec<ConfigWarning>,
}

impl TargetSpec {
    #[must_use]
    pub fn new(side: GameSide) -> Self {
        Self {
            side,
            backend: CommonSettings::default(),
            warnings: Vec::new(),
        }
    }

    #[must_use]
    pub fn client() -> Self {
        Self::new(GameSide::Client)
    }

    #[must_use]
    pub fn server() -> Self {
        Self::new(GameSide::Server)
    }

    /// Builds a target from a `[[clients]]` / `[[servers]]` entry.
    #[must_use]
    pub fn from_config(side: GameSide, config: &TargetConfig) -> Self {
        let mut spec = Self::new(side);
        spec.set_name(&config.name);
        for arg in &config.startup_args {
            spec.add_startup_arg(arg);
        }
        for arg in &config.jvm_args {
            spec.add_jvm_arg(arg);
        }
        if let Some(dir) = &config.data_dir {
            spec.set_data_dir(dir);
        }
        if let Some(modpack) = &config.modpack {
            spec.set_modpack(modpack);
        }
        if let Some(game) = &config.game {
            match prop_string(game, props::KIND_KEY) {
                Some(call) => {
                    spec.apply_map(&call, game);
                }
                None => spec.warn(ConfigWarning::Configuration {
                    call: "game".to_string(),
                    message: format!("no \"{}\" given", props::KIND_KEY),
                }),
            }
        }
        spec
    }

    /// Sets the name; it is normalized and shapes the run-task name.
    pub fn set_name(&mut self, name: &str) -> &mut Self {
        self.backend.name = normalize(name);
        self
    }

    pub fn add_startup_arg(&mut self, arg: impl Into<String>) -> &mut Self {
        self.backend.startup_args.push(arg.into());
        self
    }

    pub fn add_jvm_arg(&mut self, arg: impl Into<String>) -> &mut Self {
        self.backend.jvm_args.push(arg.into());
        self
    }

    /// Overrides the data directory, which defaults to the name.
    pub fn set_data_dir(&mut self, dir: impl Into<String>) -> &mut Self {
        self.backend.data_dir = Some(dir.into());
        self
    }

    pub fn set_modpack(&mut self, modpack: &str) -> &mut Self {
        self.backend.modpack = Some(normalize(modpack));
        self
    }

    pub fn official(&mut self, version: impl Into<String>) -> &mut Self {
        self.set_location(Location::Official {
            version: version.into(),
        })
    }

    pub fn official_latest(&mut self) -> &mut Self {
        self.official(LATEST)
    }

    pub fn be(&mut self, build: impl Into<String>) -> &mut Self {
        self.set_location(Location::BleedingEdge {
            build: build.into(),
        })
    }

    pub fn be_latest(&mut self) -> &mut Self {
        self.be(LATEST)
    }

    pub fn github(
        &mut self,
        user: impl Into<String>,
        repo: impl Into<String>,
        tag: impl Into<String>,
        file: impl Into<String>,
    ) -> &mut Self {
        self.set_location(Location::GitHub {
            user: user.into(),
            repo: repo.into(),
            tag: tag.into(),
            file: file.into(),
        })
    }

    pub fn from_local_disk(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.set_location(Location::LocalPath { path: path.into() })
    }

    /// Assigns the game location. A second assignment wins and warns.
    pub fn set_location(&mut self, location: Location) -> &mut Self {
        if let Some(previous) = self.backend.location.take() {
            self.warn(ConfigWarning::LocationOverride {
                previous,
                next: location.clone(),
            });
        }
        self.backend.location = Some(location);
        self
    }

    /// Applies a location call given as a key/value table.
    pub fn apply_map(&mut self, call: &str, props: &Props) -> &mut Self {
        match location_from_props(call, props) {
            Ok(location) => self.set_location(location),
            Err(warning) => {
                self.warn(warning);
                self
            }
        }
    }

    fn warn(&mut self, warning: ConfigWarning) {
        warn!(side = %self.side, run_target = %self.backend.name, "{warning}");
        self.warnings.push(warning);
    }

    #[must_use]
    pub const fn side(&self) -> GameSide {
        self.side
    }

    #[must_use]
    pub const fn backend(&self) -> &CommonSettings {
        &self.backend
    }

    #[must_use]
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Ends configuration.
    #[must_use]
    pub fn freeze(self) -> RunTarget {
        RunTarget {
            side: self.side,
            settings: self.backend,
        }
    }
}

/// A configured run target, read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTarget {
    side: GameSide,
    settings: CommonSettings,
}

impl RunTarget {
    #[must_use]
    pub const fn side(&self) -> GameSide {
        self.side
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.settings.name
    }

    #[must_use]
    pub fn startup_args(&self) -> &[String] {
        &self.settings.startup_args
    }

    #[must_use]
    pub fn jvm_args(&self) -> &[String] {
        &self.settings.jvm_args
    }

    /// Data directory, defaulting to the name.
    #[must_use]
    pub fn data_dir(&self) -> &str {
        self.settings
            .data_dir
            .as_deref()
            .unwrap_or(&self.settings.name)
    }

    #[must_use]
    pub fn modpack(&self) -> Option<&str> {
        self.settings.modpack.as_deref()
    }

    #[must_use]
    pub const fn location(&self) -> Option<&Location> {
        self.settings.location.as_ref()
    }

    /// JVM arguments for the current OS.
    #[must_use]
    pub fn effective_jvm_args(&self) -> Vec<String> {
        self.jvm_args_on(std::env::consts::OS)
    }

    /// The desktop client needs `-XstartOnFirstThread` on macOS.
    pub(crate) fn jvm_args_on(&self, os: &str) -> Vec<String> {
        let mut args = self.settings.jvm_args.clone();
        let flag = "-XstartOnFirstThread";
        if self.side == GameSide::Client && os == "macos" && !args.iter().any(|a| a == flag) {
            args.push(flag.to_string());
        }
        args
    }

    /// Game file this target runs, under `game_dir`.
    #[must_use]
    pub fn game_file(&self, game_dir: &Path) -> Option<PathBuf> {
        self.location()
            .map(|location| location.expected_file(game_dir, self.side))
    }
}

/// Run-task names for `targets`, in order.
#[must_use]
pub fn task_names(targets: &[RunTarget]) -> Vec<String> {
    let mut namer = TaskNamer::new();
    targets
        .iter()
        .map(|t| namer.task_name(t.side().task_prefix(), t.name()))
        .collect()
}

#[cfg(test)]
mod tests;
