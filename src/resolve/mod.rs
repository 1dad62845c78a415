// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Batch resolution of mod dependencies.
//!
//! ```text
//! [Mod, Mod, Mod]  (ordered)
//!   |
//!   |  stream::iter().map(resolve_one).buffered(concurrency)
//!   v
//! per mod:  Unresolved --> Resolving --+--> Resolved(files, from)
//!                                      +--> Failed(cause)   one WARN
//!   |
//!   v
//! ResolveReport  (input order kept, failures isolated)
//! ```
//!
//! Memoization lives on the filesystem only: a second run over the same
//! scratch directory finds the files and skips the network.

pub mod fetch;

use std::fmt;
use std::path::{Path, PathBuf};

use bon::Builder;
use futures_util::{StreamExt, stream};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::types::EndpointsConfig;
use crate::error::{MgppResult, ResolveError};
use crate::host::TaskHost;
use crate::mods::Mod;
use crate::net::ProgressDisplay;

/// Settings shared by every resolution in one run.
#[derive(Debug, Clone, Builder)]
pub struct ResolveContext {
    /// Release and API endpoints.
    #[builder(setters(name = with_endpoints), default)]
    endpoints: EndpointsConfig,
    /// Ignore cached files and download again.
    #[builder(setters(name = with_redownload), default = false)]
    redownload: bool,
    /// Progress display for downloads.
    #[builder(setters(name = with_progress), default = ProgressDisplay::Silent)]
    progress: ProgressDisplay,
    /// Cancelling stops pending mods and in-flight downloads.
    #[builder(setters(name = with_cancel_token), default)]
    cancel_token: CancellationToken,
}

impl Default for ResolveContext {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ResolveContext {
    #[must_use]
    pub const fn endpoints(&self) -> &EndpointsConfig {
        &self.endpoints
    }

    #[must_use]
    pub const fn redownload(&self) -> bool {
        self.redownload
    }

    #[must_use]
    pub const fn progress(&self) -> ProgressDisplay {
        self.progress
    }

    #[must_use]
    pub const fn cancel_token(&self) -> &CancellationToken {
        &self.cancel_token
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

/// Where resolved files came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedFrom {
    /// Already present in the scratch directory.
    Cache,
    /// Downloaded during this run.
    Download,
    /// Produced by the host build.
    Host,
    /// A local file used in place.
    Disk,
}

impl fmt::Display for ResolvedFrom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cache => write!(f, "cache"),
            Self::Download => write!(f, "download"),
            Self::Host => write!(f, "host"),
            Self::Disk => write!(f, "disk"),
        }
    }
}

/// Files a successful resolution produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    files: Vec<PathBuf>,
    from: ResolvedFrom,
}

impl Resolution {
    #[must_use]
    pub const fn new(files: Vec<PathBuf>, from: ResolvedFrom) -> Self {
        Self { files, from }
    }

    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    #[must_use]
    pub const fn origin(&self) -> ResolvedFrom {
        self.from
    }

    #[must_use]
    pub fn into_files(self) -> Vec<PathBuf> {
        self.files
    }
}

/// Per-mod resolution state. `Resolved` and `Failed` are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResolutionState {
    #[default]
    Unresolved,
    Resolving,
    Resolved(Resolution),
    Failed(String),
}

impl ResolutionState {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved(_) | Self::Failed(_))
    }
}

/// One mod's trip through the state machine.
#[derive(Debug, Clone)]
pub struct ModOutcome {
    name: String,
    state: ResolutionState,
}

impl ModOutcome {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: ResolutionState::Unresolved,
        }
    }

    /// `Unresolved -> Resolving`; no effect once terminal.
    pub fn begin(&mut self) {
        if self.state == ResolutionState::Unresolved {
            self.state = ResolutionState::Resolving;
        }
    }

    /// `Resolving -> Resolved | Failed`; no effect once terminal.
    pub fn finish(&mut self, result: MgppResult<Resolution>) {
        if self.state.is_terminal() {
            return;
        }
        self.state = match result {
            Ok(resolution) => ResolutionState::Resolved(resolution),
            Err(e) => ResolutionState::Failed(e.to_string()),
        };
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn state(&self) -> &ResolutionState {
        &self.state
    }

    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        match &self.state {
            ResolutionState::Resolved(resolution) => resolution.files(),
            _ => &[],
        }
    }
}

/// Outcome of a batch, in input order.
#[derive(Debug, Clone, Default)]
pub struct ResolveReport {
    outcomes: Vec<ModOutcome>,
}

impl ResolveReport {
    #[must_use]
    pub fn outcomes(&self) -> &[ModOutcome] {
        &self.outcomes
    }

    /// All resolved files, mod order first, then each mod's own order.
    #[must_use]
    pub fn files(&self) -> Vec<PathBuf> {
        self.outcomes
            .iter()
            .flat_map(|o| o.files().iter().cloned())
            .collect()
    }

    /// `(mod, cause)` for each failed mod.
    #[must_use]
    pub fn failures(&self) -> Vec<(&str, &str)> {
        self.outcomes
            .iter()
            .filter_map(|o| match o.state() {
                ResolutionState::Failed(cause) => Some((o.name(), cause.as_str())),
                _ => None,
            })
            .collect()
    }

    /// One warning is logged per failed mod.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.failures().len()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.warning_count() == 0
    }
}

/// Resolves mod lists into a scratch directory.
pub struct ModResolver<'h> {
    work_dir: PathBuf,
    ctx: ResolveContext,
    host: &'h dyn TaskHost,
    concurrency: usize,
}

impl<'h> ModResolver<'h> {
    #[must_use]
    pub fn new(work_dir: impl Into<PathBuf>, ctx: ResolveContext, host: &'h dyn TaskHost) -> Self {
        Self {
            work_dir: work_dir.into(),
            ctx,
            host,
            concurrency: 1,
        }
    }

    /// Maximum number of mods resolved at once (at least 1).
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    #[must_use]
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    #[must_use]
    pub const fn context(&self) -> &ResolveContext {
        &self.ctx
    }

    /// Files already present for `mods`, without resolving anything.
    #[must_use]
    pub fn declared_outputs(&self, mods: &[Mod]) -> Vec<PathBuf> {
        mods.iter()
            .flat_map(|m| m.map_local_file(&self.work_dir, self.host))
            .collect()
    }

    /// Resolves one mod. Failures are logged and recorded, never returned.
    pub async fn resolve_one(&self, m: &Mod) -> ModOutcome {
        let mut outcome = ModOutcome::new(m.to_string());
        outcome.begin();
        debug!(mod_name = %m, "resolving");

        let result = if self.ctx.is_cancelled() {
            Err(ResolveError::Cancelled(m.to_string()).into())
        } else {
            m.resolve_file(&self.work_dir, &self.ctx, self.host).await
        };

        match &result {
            Ok(resolution) => {
                for file in resolution.files() {
                    info!(
                        mod_name = %m,
                        file = %file.display(),
                        from = %resolution.origin(),
                        "resolved mod file"
                    );
                }
            }
            Err(e) => warn!(mod_name = %m, error = %e, "failed to resolve mod"),
        }

        outcome.finish(result);
        outcome
    }

    /// Resolves every mod, at most `concurrency` at a time.
    pub async fn resolve_all(&self, mods: &[Mod]) -> ResolveReport {
        let outcomes = stream::iter(mods)
            .map(|m| self.resolve_one(m))
            .buffered(self.concurrency)
            .collect::<Vec<_>>()
            .await;
        ResolveReport { outcomes }
    }
}
