// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Layered configuration loading.
//!
//! ```text
//! mgpp.toml (optional) --> --ini files --> inline TOML
//!                                              |
//!              MGPP_<SECTION>__<KEY> env vars  |  overrides files
//!              --set section.key=value         |  overrides everything
//!                                              v
//!                                build() --> Config (paths resolved, validated)
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use config::{Environment, File, FileFormat};

use super::Config;
use crate::error::{ConfigError, Result};

/// A TOML source fed to the loader, in load order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A file that must exist.
    File(PathBuf),
    /// A default file that was found.
    Optional(PathBuf),
    /// TOML given as a string.
    Inline,
}

impl ConfigSource {
    /// Path of a file source.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) | Self::Optional(path) => Some(path),
            Self::Inline => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "[file] {}", path.display()),
            Self::Optional(path) => write!(f, "[default] {}", path.display()),
            Self::Inline => write!(f, "[inline] <string>"),
        }
    }
}

/// Builder stacking TOML sources, environment variables and overrides.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    sources: Vec<ConfigSource>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            sources: Vec::new(),
        }
    }

    fn toml_file(mut self, path: &Path, required: bool) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        self
    }

    /// Adds a TOML file; `build()` fails if it is missing or invalid.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        let mut loader = self.toml_file(path, true);
        loader.sources.push(ConfigSource::File(path.to_path_buf()));
        loader
    }

    /// Adds a TOML file that is skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        let mut loader = self.toml_file(path, false);
        if path.is_file() {
            loader
                .sources
                .push(ConfigSource::Optional(path.to_path_buf()));
        }
        loader
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push(ConfigSource::Inline);
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` environment variables.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Overrides one dotted key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the key cannot be parsed.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder =
            self.builder
                .set_override(key, value)
                .map_err(|e| ConfigError::InvalidValue {
                    section: key.split('.').next().unwrap_or(key).to_string(),
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
        Ok(self)
    }

    /// Applies `section.key=value` overrides as given on the command line.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` for an entry without `=`.
    pub fn set_all(mut self, overrides: &[String]) -> Result<Self> {
        for entry in overrides {
            let (key, value) = entry.split_once('=').ok_or_else(|| ConfigError::ParseError {
                path: "--set".to_string(),
                message: format!("expected KEY=VALUE, got '{entry}'"),
            })?;
            self = self.set(key.trim(), value.trim().to_string())?;
        }
        Ok(self)
    }

    /// Merges every source and deserializes the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a source is not valid
    /// TOML, the merged tree does not match [`Config`], or a value is out of
    /// range.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let mut config: Config = builder.build()?.try_deserialize()?;
        config.resolve_and_validate()?;
        Ok(config)
    }

    /// Sources in load order; missing optional files are left out.
    #[must_use]
    pub fn loaded_files(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Numbered lines for `mgpp inis`.
    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.sources
            .iter()
            .enumerate()
            .map(|(i, source)| format!("{}. {source}", i + 1))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
