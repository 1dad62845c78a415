// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitHub release and archive endpoints.

use serde::Deserialize;

use crate::config::types::EndpointsConfig;
use crate::error::MgppResult;
use crate::net::Downloader;
use crate::resolve::ResolveContext;

/// Subset of the GitHub release object the resolver reads.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
}

impl Release {
    /// First asset whose name ends with `suffix`.
    #[must_use]
    pub fn asset_with_suffix(&self, suffix: &str) -> Option<&ReleaseAsset> {
        self.assets.iter().find(|a| a.name.ends_with(suffix))
    }
}

#[must_use]
pub fn release_download_url(
    endpoints: &EndpointsConfig,
    repo: &str,
    tag: &str,
    file: &str,
) -> String {
    format!("{}/{repo}/releases/download/{tag}/{file}", endpoints.github)
}

/// Zip archive of a repository, at `branch` or the default branch.
#[must_use]
pub fn zipball_url(endpoints: &EndpointsConfig, repo: &str, branch: Option<&str>) -> String {
    match branch {
        Some(branch) => format!("{}/repos/{repo}/zipball/{branch}", endpoints.github_api),
        None => format!("{}/repos/{repo}/zipball", endpoints.github_api),
    }
}

/// Looks up the newest release of `repo`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a release object.
pub async fn latest_release(
    endpoints: &EndpointsConfig,
    repo: &str,
    ctx: &ResolveContext,
) -> MgppResult<Release> {
    Downloader::new()
        .url(format!("{}/repos/{repo}/releases/latest", endpoints.github_api))
        .header("Accept", "application/vnd.github+json")
        .cancel_token(ctx.cancel_token().clone())
        .silent()
        .download_json()
        .await
}
