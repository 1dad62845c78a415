// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod dependency descriptors.
//!
//! ```text
//! Mod                                  lands in
//!   RemoteArtifact { location }        work_dir/<location dir>/<file>
//!   SourceProject  { project }         host build output (not copied)
//!   TaskOutput     { task_name }       host task output (looked up lazily)
//!   GitHubJvm      { repo }            work_dir/Jvm_<user>_<repo>/<repo>.jar
//!   GitHubJson     { repo, branch }    work_dir/Json_<user>_<repo>[_<branch>]/<repo>.zip
//! ```
//!
//! Every descriptor offers three views: `expected_local_files` (pure),
//! `map_local_file` (expected files that exist) and `resolve_file` (fetch).

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MgppResult, ResolveError};
use crate::host::{TaskHost, TaskLookup};
use crate::location::github::{latest_release, zipball_url};
use crate::location::{GameSide, Location, identity_dir};
use crate::resolve::fetch;
use crate::resolve::{Resolution, ResolveContext, ResolvedFrom};

/// A mod dependency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mod {
    /// A single jar or zip from a [`Location`].
    RemoteArtifact { location: Location },
    /// A project built by the host.
    SourceProject { project: String },
    /// The output file(s) of a named host task.
    TaskOutput { task_name: String },
    /// The first `.jar` asset of a repository's latest release.
    GitHubJvm { repo: String },
    /// A zip of a repository branch (default branch when `None`).
    GitHubJson {
        repo: String,
        branch: Option<String>,
    },
}

impl fmt::Display for Mod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RemoteArtifact { location } => write!(f, "{location}"),
            Self::SourceProject { project } => write!(f, "project '{project}'"),
            Self::TaskOutput { task_name } => write!(f, "output of task '{task_name}'"),
            Self::GitHubJvm { repo } => write!(f, "JVM mod {repo}"),
            Self::GitHubJson { repo, branch: None } => write!(f, "JSON mod {repo}"),
            Self::GitHubJson {
                repo,
                branch: Some(branch),
            } => write!(f, "JSON mod {repo}@{branch}"),
        }
    }
}

/// `user/repo` split into its two non-empty halves.
fn split_repo(repo: &str) -> Option<(&str, &str)> {
    repo.split_once('/')
        .filter(|(user, name)| !user.is_empty() && !name.is_empty() && !name.contains('/'))
}

impl Mod {
    #[must_use]
    pub const fn remote(location: Location) -> Self {
        Self::RemoteArtifact { location }
    }

    #[must_use]
    pub fn project(project: impl Into<String>) -> Self {
        Self::SourceProject {
            project: project.into(),
        }
    }

    #[must_use]
    pub fn task(task_name: impl Into<String>) -> Self {
        Self::TaskOutput {
            task_name: task_name.into(),
        }
    }

    #[must_use]
    pub fn jvm(repo: impl Into<String>) -> Self {
        Self::GitHubJvm { repo: repo.into() }
    }

    #[must_use]
    pub fn json(repo: impl Into<String>, branch: Option<String>) -> Self {
        Self::GitHubJson {
            repo: repo.into(),
            branch,
        }
    }

    /// Subdirectory of the scratch directory this mod downloads into.
    ///
    /// `None` for mods that never download, and for malformed repositories.
    #[must_use]
    pub fn cache_dir_name(&self) -> Option<String> {
        match self {
            Self::RemoteArtifact { location } => location.cache_dir_name(),
            Self::GitHubJvm { repo } => {
                split_repo(repo).map(|(user, name)| identity_dir("Jvm", &[user, name]))
            }
            Self::GitHubJson { repo, branch } => split_repo(repo).map(|(user, name)| {
                let mut parts = vec![user, name];
                if let Some(branch) = branch {
                    parts.push(branch.as_str());
                }
                identity_dir("Json", &parts)
            }),
            Self::SourceProject { .. } | Self::TaskOutput { .. } => None,
        }
    }

    fn downloaded_file(&self, work_dir: &Path) -> Option<PathBuf> {
        let dir = self.cache_dir_name()?;
        let file = match self {
            Self::GitHubJvm { repo } => format!("{}.jar", split_repo(repo)?.1),
            Self::GitHubJson { repo, .. } => format!("{}.zip", split_repo(repo)?.1),
            _ => return None,
        };
        Some(work_dir.join(dir).join(file))
    }

    /// Where resolved files should land. Performs no downloads.
    ///
    /// Host-backed variants ask the host and yield nothing when it has no
    /// answer yet.
    #[must_use]
    pub fn expected_local_files(&self, work_dir: &Path, host: &dyn TaskHost) -> Vec<PathBuf> {
        match self {
            Self::RemoteArtifact { location } => {
                vec![location.expected_file(work_dir, GameSide::Client)]
            }
            Self::SourceProject { project } => host.project_artifacts(project).unwrap_or_default(),
            Self::TaskOutput { task_name } => match host.task_output(task_name) {
                TaskLookup::Outputs(files) => files,
                TaskLookup::Missing | TaskLookup::NoOutput => Vec::new(),
            },
            Self::GitHubJvm { .. } | Self::GitHubJson { .. } => {
                self.downloaded_file(work_dir).into_iter().collect()
            }
        }
    }

    /// Expected files that already exist.
    #[must_use]
    pub fn map_local_file(&self, work_dir: &Path, host: &dyn TaskHost) -> Vec<PathBuf> {
        self.expected_local_files(work_dir, host)
            .into_iter()
            .filter(|p| p.is_file())
            .collect()
    }

    fn failure(&self, message: impl Into<String>) -> ResolveError {
        ResolveError::ResolutionFailure {
            target: self.to_string(),
            message: message.into(),
        }
    }

    /// Produces this mod's local files, downloading when needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the mod cannot be fetched or located; the caller
    /// decides whether that is fatal.
    pub async fn resolve_file(
        &self,
        work_dir: &Path,
        ctx: &ResolveContext,
        host: &dyn TaskHost,
    ) -> MgppResult<Resolution> {
        match self {
            Self::RemoteArtifact { location } => {
                location.resolve(work_dir, GameSide::Client, ctx).await
            }
            Self::SourceProject { project } => {
                let files = host.project_artifacts(project)?;
                if files.is_empty() {
                    return Err(self.failure("the project produced no artifacts").into());
                }
                Ok(Resolution::new(files, ResolvedFrom::Host))
            }
            Self::TaskOutput { task_name } => match host.task_output(task_name) {
                TaskLookup::Outputs(files) => Ok(Resolution::new(files, ResolvedFrom::Host)),
                TaskLookup::Missing => Err(ResolveError::UnresolvedTaskOutput {
                    task: task_name.clone(),
                    reason: "no such task".to_string(),
                }
                .into()),
                TaskLookup::NoOutput => Err(ResolveError::UnresolvedTaskOutput {
                    task: task_name.clone(),
                    reason: "the task declares no output".to_string(),
                }
                .into()),
            },
            Self::GitHubJvm { repo } => {
                let dest = self
                    .downloaded_file(work_dir)
                    .ok_or_else(|| self.failure("expected a 'user/repo' repository"))?;
                if let Some(hit) = fetch::cached(&dest, ctx).await {
                    return Ok(hit);
                }
                let release = latest_release(ctx.endpoints(), repo, ctx).await?;
                let asset = release.asset_with_suffix(".jar").ok_or_else(|| {
                    ResolveError::NoMatchingAsset {
                        repo: repo.clone(),
                        tag: release.tag_name.clone(),
                        wanted: ".jar".to_string(),
                    }
                })?;
                debug!(asset = %asset.name, tag = %release.tag_name, "latest JVM mod asset");
                fetch::download(&asset.browser_download_url, &dest, ctx).await
            }
            Self::GitHubJson { repo, branch } => {
                let dest = self
                    .downloaded_file(work_dir)
                    .ok_or_else(|| self.failure("expected a 'user/repo' repository"))?;
                let url = zipball_url(ctx.endpoints(), repo, branch.as_deref());
                fetch::fetch(&url, &dest, ctx).await
            }
        }
    }
}
