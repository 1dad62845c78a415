// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Where a game or mod artifact can be obtained.
//!
//! ```text
//! Location
//!   Official     { version }            github/<official_repo>/releases/...
//!   BleedingEdge { build }              github/<bleeding_edge_repo>/releases/...
//!   GitHub       { user, repo, tag, file }
//!   LocalPath    { path }               used in place, never copied
//!
//! expected_file(work_dir, side) = work_dir/<cache_dir_name>/<file_name(side)>
//! resolve(): cached non-empty file? --> Cache
//!            else download          --> Download
//! ```
//!
//! `version` and `build` accept the `latest` notation. Official `latest` uses
//! GitHub's `releases/latest/download` redirect; bleeding-edge `latest` asks
//! the API for the newest tag because the file name carries the build number.

pub mod github;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::types::EndpointsConfig;
use crate::error::{FsError, MgppResult, ResolveError};
use crate::notation::{escape_part, is_latest};
use crate::resolve::fetch;
use crate::resolve::{Resolution, ResolveContext, ResolvedFrom};

/// Which game distribution a location refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameSide {
    #[default]
    Client,
    Server,
}

impl GameSide {
    /// Prefix of the run tasks generated for this side.
    #[must_use]
    pub const fn task_prefix(self) -> &'static str {
        match self {
            Self::Client => "runClient",
            Self::Server => "runServer",
        }
    }

    /// File name of an official release.
    #[must_use]
    pub const fn official_file(self) -> &'static str {
        match self {
            Self::Client => "Mindustry.jar",
            Self::Server => "server-release.jar",
        }
    }

    /// File name of a bleeding-edge build; `None` gives the stable local name.
    #[must_use]
    pub fn bleeding_edge_file(self, build: Option<&str>) -> String {
        let flavor = match self {
            Self::Client => "Desktop",
            Self::Server => "Server",
        };
        build.map_or_else(
            || format!("Mindustry-BE-{flavor}.jar"),
            |build| format!("Mindustry-BE-{flavor}-{build}.jar"),
        )
    }
}

impl fmt::Display for GameSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client => write!(f, "client"),
            Self::Server => write!(f, "server"),
        }
    }
}

/// A descriptor of where an artifact lives.
///
/// Values are never validated on construction; bad tags or missing paths
/// surface when the location is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// Versioned official release.
    Official { version: String },
    /// Bleeding-edge build.
    BleedingEdge { build: String },
    /// Asset attached to a GitHub release.
    GitHub {
        user: String,
        repo: String,
        tag: String,
        file: String,
    },
    /// File on the local disk.
    LocalPath { path: PathBuf },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Official { version } => write!(f, "official release {version}"),
            Self::BleedingEdge { build } => write!(f, "bleeding-edge build {build}"),
            Self::GitHub {
                user,
                repo,
                tag,
                file,
            } => write!(f, "GitHub asset {user}/{repo}@{tag}/{file}"),
            Self::LocalPath { path } => write!(f, "local file {}", path.display()),
        }
    }
}

/// Joins escaped identity parts into a directory name.
///
/// Escaped parts never contain `_`, so distinct identities of one kind get
/// distinct names.
pub(crate) fn identity_dir(kind: &str, parts: &[&str]) -> String {
    let mut name = kind.to_string();
    for part in parts {
        name.push('_');
        name.push_str(&escape_part(part));
    }
    name
}

impl Location {
    /// Per-location subdirectory of the scratch directory.
    ///
    /// `None` for local paths, which are used where they are.
    #[must_use]
    pub fn cache_dir_name(&self) -> Option<String> {
        match self {
            Self::Official { version } => Some(identity_dir("Official", &[version])),
            Self::BleedingEdge { build } => Some(identity_dir("BleedingEdge", &[build])),
            Self::GitHub {
                user, repo, tag, ..
            } => Some(identity_dir("Github", &[user, repo, tag])),
            Self::LocalPath { .. } => None,
        }
    }

    /// Name of the file this location resolves to.
    #[must_use]
    pub fn file_name(&self, side: GameSide) -> String {
        match self {
            Self::Official { .. } => side.official_file().to_string(),
            Self::BleedingEdge { build } if is_latest(build) => side.bleeding_edge_file(None),
            Self::BleedingEdge { build } => side.bleeding_edge_file(Some(build)),
            Self::GitHub { file, .. } => file.clone(),
            Self::LocalPath { path } => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }

    /// Download URL, when it can be computed without a network lookup.
    #[must_use]
    pub fn download_url(&self, endpoints: &EndpointsConfig, side: GameSide) -> Option<String> {
        match self {
            Self::Official { version } if is_latest(version) => Some(format!(
                "{}/{}/releases/latest/download/{}",
                endpoints.github,
                endpoints.official_repo,
                side.official_file()
            )),
            Self::Official { version } => Some(github::release_download_url(
                endpoints,
                &endpoints.official_repo,
                version,
                side.official_file(),
            )),
            Self::BleedingEdge { build } if is_latest(build) => None,
            Self::BleedingEdge { build } => Some(github::release_download_url(
                endpoints,
                &endpoints.bleeding_edge_repo,
                build,
                &side.bleeding_edge_file(Some(build)),
            )),
            Self::GitHub {
                user,
                repo,
                tag,
                file,
            } => Some(github::release_download_url(
                endpoints,
                &format!("{user}/{repo}"),
                tag,
                file,
            )),
            Self::LocalPath { .. } => None,
        }
    }

    /// Where the resolved file lands, computed without any I/O.
    #[must_use]
    pub fn expected_file(&self, work_dir: &Path, side: GameSide) -> PathBuf {
        match (self, self.cache_dir_name()) {
            (Self::LocalPath { path }, _) => path.clone(),
            (_, Some(dir)) => work_dir.join(dir).join(self.file_name(side)),
            (_, None) => work_dir.join(self.file_name(side)),
        }
    }

    /// Fetches the location into `work_dir`.
    ///
    /// An existing non-empty target short-circuits the network unless the
    /// context asks for a redownload.
    ///
    /// # Errors
    ///
    /// Returns an error if a local file is missing or empty, the release
    /// lookup fails, or the download fails.
    pub async fn resolve(
        &self,
        work_dir: &Path,
        side: GameSide,
        ctx: &ResolveContext,
    ) -> MgppResult<Resolution> {
        let dest = self.expected_file(work_dir, side);
        match self {
            Self::LocalPath { path } => {
                let file = local_file(path).await?;
                Ok(Resolution::new(vec![file], ResolvedFrom::Disk))
            }
            Self::BleedingEdge { build } if is_latest(build) => {
                if let Some(hit) = fetch::cached(&dest, ctx).await {
                    return Ok(hit);
                }
                let endpoints = ctx.endpoints();
                let release =
                    github::latest_release(endpoints, &endpoints.bleeding_edge_repo, ctx).await?;
                debug!(tag = %release.tag_name, "latest bleeding-edge build");
                let url = github::release_download_url(
                    endpoints,
                    &endpoints.bleeding_edge_repo,
                    &release.tag_name,
                    &side.bleeding_edge_file(Some(&release.tag_name)),
                );
                fetch::download(&url, &dest, ctx).await
            }
            _ => {
                let url = self.download_url(ctx.endpoints(), side).ok_or_else(|| {
                    ResolveError::ResolutionFailure {
                        target: self.to_string(),
                        message: "no download URL".to_string(),
                    }
                })?;
                fetch::fetch(&url, &dest, ctx).await
            }
        }
    }
}

/// Checks that a local path is a regular file holding data.
pub(crate) async fn local_file(path: &Path) -> MgppResult<PathBuf> {
    let meta = tokio::fs::metadata(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FsError::NotFound(path.display().to_string())
        } else {
            FsError::IoError {
                path: path.display().to_string(),
                source: e,
            }
        }
    })?;
    if !meta.is_file() {
        return Err(FsError::NotAFile(path.display().to_string()).into());
    }
    if meta.len() == 0 {
        return Err(FsError::EmptyFile(path.display().to_string()).into());
    }
    Ok(path.to_path_buf())
}
