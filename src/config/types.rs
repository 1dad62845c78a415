// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for mgpp-rs.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, PathsConfig, EndpointsConfig
//!   [[clients]] / [[servers]]  TargetConfig (game = loosely typed table)
//!   [[mods]]                   loosely typed tables, dispatched on `kind`
//!   [[tasks]] / [[projects]]   host task outputs and project artifacts
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;
use crate::settings::Props;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Ignore cached files and download again.
    pub redownload: bool,
    /// Maximum number of mods resolved at the same time.
    pub concurrency: usize,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            redownload: false,
            concurrency: 4,
        }
    }
}

impl GlobalConfig {
    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `concurrency` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                section: "global".to_string(),
                key: "concurrency".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Remote endpoints used to fetch game releases and GitHub mods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EndpointsConfig {
    /// Base URL for release downloads.
    pub github: String,
    /// Base URL of the GitHub REST API.
    pub github_api: String,
    /// `user/repo` publishing official releases.
    pub official_repo: String,
    /// `user/repo` publishing bleeding-edge builds.
    pub bleeding_edge_repo: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            github: "https://github.com".to_string(),
            github_api: "https://api.github.com".to_string(),
            official_repo: "Anuken/Mindustry".to_string(),
            bleeding_edge_repo: "Anuken/MindustryBuilds".to_string(),
        }
    }
}

impl EndpointsConfig {
    /// Points both the download and the API base at one server.
    #[must_use]
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            github: base.to_string(),
            github_api: base.to_string(),
            ..Self::default()
        }
    }
}

/// One run target (`[[clients]]` or `[[servers]]`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetConfig {
    /// Free-text name; normalized before use.
    pub name: String,
    pub startup_args: Vec<String>,
    pub jvm_args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modpack: Option<String>,
    /// Game location, as a loosely typed table with a `kind` key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<Props>,
}

/// A task known to the host and the files it declares as output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskConfig {
    pub name: String,
    /// Declared output files; absent means the task sets no output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<PathBuf>>,
}

/// A source project built by the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub name: String,
    /// Project directory (default: `paths.root/<name>`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    /// Glob patterns, relative to `dir`, matching the built artifacts.
    pub artifacts: Vec<String>,
}
