// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            MgppError (~24 bytes)
//!                     |
//!   +--------+--------+--------+------+
//!   v        v        v        v      v
//!  Net      Cfg    Resolve    Fs     Io
//!  Box      Box      Box      Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Network  Reqwest, HttpError, DownloadFailed, Interrupted
//!   Config   ParseError, InvalidValue
//!   Resolve  UnresolvedTaskOutput, ResolutionFailure, ...
//!   Fs       NotFound, NotAFile, EmptyFile, IoError
//!
//! All variants boxed => MgppError fits in 24 bytes.
//! ```
//!
//! Configuration problems are never errors: the front-end downgrades them to
//! [`crate::settings::ConfigWarning`]. Resolution errors are caught per mod by
//! the resolver and logged as warnings.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`MgppError`].
pub type MgppResult<T> = std::result::Result<T, MgppError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum MgppError {
    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Mod or game resolution error.
    #[error("resolve error: {0}")]
    Resolve(#[from] Box<ResolveError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for MgppError {
                fn from(err: $error) -> Self {
                    MgppError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    NetworkError => Network,
    ConfigError => Config,
    ResolveError => Resolve,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Download failed.
    #[error("download failed: {url} - {message}")]
    DownloadFailed { url: String, message: String },

    /// Download was interrupted by user or signal.
    #[error("download interrupted")]
    Interrupted,

    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Response body could not be decoded.
    #[error("invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Resolve Errors ---

/// Errors raised while resolving a game location or a mod.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A task-output mod references a task or output that does not exist yet.
    #[error("task '{task}' has no resolvable output: {reason}")]
    UnresolvedTaskOutput { task: String, reason: String },

    /// A single mod could not be fetched or located.
    #[error("failed to resolve {target}: {message}")]
    ResolutionFailure { target: String, message: String },

    /// The referenced source project is not known to the host.
    #[error("unknown project '{0}'")]
    UnknownProject(String),

    /// A GitHub release carries no asset the mod can use.
    #[error("release '{tag}' of {repo} has no {wanted} asset")]
    NoMatchingAsset {
        repo: String,
        tag: String,
        wanted: String,
    },

    /// Resolution was cancelled before this target completed.
    #[error("resolution of {0} was cancelled")]
    Cancelled(String),
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Path exists but is a directory or other non-file.
    #[error("not a regular file: {0}")]
    NotAFile(String),

    /// File exists but holds no data.
    #[error("file is empty: {0}")]
    EmptyFile(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
