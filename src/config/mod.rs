// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for mgpp-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. mgpp.toml (cwd)
//! 3. --ini files
//! 4. MGPP_* env vars
//! 5. --set overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MGPP_GLOBAL__REDOWNLOAD=true  → global.redownload = true
//! MGPP_PATHS__CACHE=/tmp/mgpp   → paths.cache = "/tmp/mgpp"
//! ```
//!
//! # Example
//!
//! ```toml
//! [[clients]]
//! name = "foo client"
//! game = { kind = "be", version = 22728 }
//!
//! [[mods]]
//! kind = "jvm"
//! repo = "liplum/cyberio"
//!
//! [[mods]]
//! kind = "task"
//! task = "iconMaker"
//!
//! [[tasks]]
//! name = "iconMaker"
//! outputs = ["icon.png"]
//! ```

pub mod loader;
pub mod paths;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::settings::Props;

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{EndpointsConfig, GlobalConfig, ProjectConfig, TargetConfig, TaskConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Paths configuration.
    pub paths: PathsConfig,
    /// Release and API endpoints.
    pub endpoints: EndpointsConfig,
    /// Client run targets.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clients: Vec<TargetConfig>,
    /// Server run targets.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<TargetConfig>,
    /// Mod dependencies, each a loosely typed table.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mods: Vec<Props>,
    /// Tasks known to the host.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<TaskConfig>,
    /// Source projects known to the host.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<ProjectConfig>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mgpp_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("mgpp.toml")
    ///     .add_toml_file_optional("mgpp.local.toml")
    ///     .with_env_prefix("MGPP")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolve all paths and validate configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a global value is out of range.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        self.paths.resolve();
        self.global.validate()?;
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_paths_options(&mut options);
        self.format_endpoint_options(&mut options);

        options.insert("clients".into(), self.clients.len().to_string());
        options.insert("servers".into(), self.servers.len().to_string());
        options.insert("mods".into(), self.mods.len().to_string());
        for task in &self.tasks {
            let outputs = task.outputs.as_ref().map_or_else(
                || "<no output>".to_string(),
                |files| {
                    files
                        .iter()
                        .map(|f| f.display().to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                },
            );
            options.insert(format!("tasks.{}", task.name), outputs);
        }
        for project in &self.projects {
            options.insert(
                format!("projects.{}", project.name),
                project.artifacts.join(", "),
            );
        }

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert(
            "global.redownload".into(),
            self.global.redownload.to_string(),
        );
        options.insert(
            "global.concurrency".into(),
            self.global.concurrency.to_string(),
        );
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "paths.root".into(),
            self.paths.root().display().to_string(),
        );
        options.insert(
            "paths.cache".into(),
            self.paths.cache().display().to_string(),
        );
    }

    fn format_endpoint_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("endpoints.github".into(), self.endpoints.github.clone());
        options.insert(
            "endpoints.github_api".into(),
            self.endpoints.github_api.clone(),
        );
        options.insert(
            "endpoints.official_repo".into(),
            self.endpoints.official_repo.clone(),
        );
        options.insert(
            "endpoints.bleeding_edge_repo".into(),
            self.endpoints.bleeding_edge_repo.clone(),
        );
    }
}
