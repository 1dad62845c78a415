// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cached downloads into the scratch directory.
//!
//! ```text
//! fetch(url, dest)
//!   redownload? --no--> dest non-empty? --yes--> Cache
//!        |                    | no
//!        +--------------------+--> download --> Download
//! ```

use std::path::Path;

use tracing::debug;

use super::{Resolution, ResolveContext, ResolvedFrom};
use crate::error::{FsError, MgppResult};
use crate::net::Downloader;

/// A file counts as resolved when it exists and holds data.
pub async fn is_cached(dest: &Path) -> bool {
    tokio::fs::metadata(dest)
        .await
        .is_ok_and(|meta| meta.is_file() && meta.len() > 0)
}

/// Cache hit for `dest`, unless the context forces a redownload.
pub async fn cached(dest: &Path, ctx: &ResolveContext) -> Option<Resolution> {
    if ctx.redownload() || !is_cached(dest).await {
        return None;
    }
    debug!(file = %dest.display(), "cache hit");
    Some(Resolution::new(vec![dest.to_path_buf()], ResolvedFrom::Cache))
}

/// Downloads `url` to `dest` unless it is already cached.
///
/// # Errors
///
/// Returns an error if the download fails or produces an empty file.
pub async fn fetch(url: &str, dest: &Path, ctx: &ResolveContext) -> MgppResult<Resolution> {
    if let Some(hit) = cached(dest, ctx).await {
        return Ok(hit);
    }
    download(url, dest, ctx).await
}

/// Downloads `url` to `dest` unconditionally.
///
/// # Errors
///
/// Returns an error if the download fails or produces an empty file.
pub async fn download(url: &str, dest: &Path, ctx: &ResolveContext) -> MgppResult<Resolution> {
    debug!(url, file = %dest.display(), "downloading");
    Downloader::new()
        .url(url)
        .file(dest)
        .progress(ctx.progress())
        .cancel_token(ctx.cancel_token().clone())
        .download()
        .await?;

    if !is_cached(dest).await {
        let _ = tokio::fs::remove_file(dest).await;
        return Err(FsError::EmptyFile(dest.display().to_string()).into());
    }
    Ok(Resolution::new(vec![dest.to_path_buf()], ResolvedFrom::Download))
}
