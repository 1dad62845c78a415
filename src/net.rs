// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP downloads of game builds, mod jars and release metadata.
//!
//! ```text
//! Downloader::new()
//!   .url() .file() .header()
//!   .progress() .silent() .cancel_token()
//!        |
//!        +--------------+--------------+
//!        v              v              v
//!   download()   download_string()  download_json()
//!        |
//!        v
//!   <file>.<pid>-<n>.part --complete--> rename to <file>
//!        |
//!        +--error / cancel--> removed
//! ```
//!
//! The destination only ever appears complete: the resolver treats any
//! non-empty file as already downloaded.

use crate::error::{MgppResult, NetworkError};
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::io::AsyncWriteExt;
use tokio_util::sync::CancellationToken;

/// Per-download scratch file; removed on drop unless committed.
///
/// Names are unique per download within and across processes.
struct PartFile {
    path: PathBuf,
    committed: bool,
}

impl PartFile {
    fn for_output(output: &Path) -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(0);
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let mut name = output
            .file_name()
            .map_or_else(OsString::new, ToOwned::to_owned);
        name.push(format!(".{}-{id}.part", std::process::id()));
        Self {
            path: output.with_file_name(name),
            committed: false,
        }
    }

    async fn commit(mut self, output: &Path) -> std::io::Result<()> {
        tokio::fs::rename(&self.path, output).await?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for PartFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

/// Shared client; user agent `mgpp-rs/VERSION`.
fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(format!("mgpp-rs/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

fn bar_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template(
                "{msg:20!} [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} @ {binary_bytes_per_sec} ({eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
        })
        .clone()
}

fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template("{spinner:.green} {msg:20!} {bytes} @ {binary_bytes_per_sec}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
        })
        .clone()
}

/// How a download reports progress on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressDisplay {
    /// A bar with speed and ETA, or a spinner when the size is unknown.
    #[default]
    Bar,
    /// Always a spinner.
    Spinner,
    /// Nothing.
    Silent,
}

/// Async HTTP downloader.
///
/// # Example
/// ```ignore
/// use mgpp_rs::net::Downloader;
///
/// Downloader::new()
///     .url("https://github.com/Anuken/Mindustry/releases/download/v146/Mindustry.jar")
///     .file("build/mgpp/game/Official_v146/Mindustry.jar")
///     .download()
///     .await?;
/// ```
pub struct Downloader {
    client: Client,
    url: Option<String>,
    output_file: Option<PathBuf>,
    headers: Vec<(String, String)>,
    cancel: CancellationToken,
    progress_display: ProgressDisplay,
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Downloader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: global_client().clone(),
            url: None,
            output_file: None,
            headers: Vec::new(),
            cancel: CancellationToken::new(),
            progress_display: ProgressDisplay::default(),
        }
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Destination of [`Downloader::download`].
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub const fn progress(mut self, style: ProgressDisplay) -> Self {
        self.progress_display = style;
        self
    }

    #[must_use]
    pub const fn silent(mut self) -> Self {
        self.progress_display = ProgressDisplay::Silent;
        self
    }

    /// Cancelling the token aborts the download between chunks.
    #[must_use]
    pub fn cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    fn progress_bar(&self, total_size: Option<u64>, label: String) -> Option<ProgressBar> {
        let pb = match (self.progress_display, total_size) {
            (ProgressDisplay::Silent, _) => return None,
            (ProgressDisplay::Bar, Some(total)) if total > 0 => {
                ProgressBar::new(total).with_style(bar_style())
            }
            (ProgressDisplay::Bar | ProgressDisplay::Spinner, _) => {
                ProgressBar::new_spinner().with_style(spinner_style())
            }
        };
        Some(pb.with_message(label))
    }

    fn configured_url(&self) -> MgppResult<&str> {
        self.url
            .as_deref()
            .ok_or_else(|| NetworkError::InvalidUrl("no URL provided".to_string()).into())
    }

    fn check_cancelled(&self) -> MgppResult<()> {
        if self.cancel.is_cancelled() {
            return Err(NetworkError::Interrupted.into());
        }
        Ok(())
    }

    async fn send(&self, url: &str) -> MgppResult<reqwest::Response> {
        self.check_cancelled()?;
        let mut request = self.client.get(url);
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(NetworkError::Reqwest)?;
        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::HttpError {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }
        Ok(response)
    }

    /// Streams the body into the configured file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No URL or output file is configured.
    /// - The request fails or returns a non-success status.
    /// - The file cannot be created, written or renamed into place.
    /// - The download is cancelled.
    pub async fn download(&self) -> MgppResult<()> {
        let url = self.configured_url()?;
        let failed = |message: String| NetworkError::DownloadFailed {
            url: url.to_string(),
            message,
        };
        let output = self
            .output_file
            .as_deref()
            .ok_or_else(|| failed("no output file specified".to_string()))?;

        let response = self.send(url).await?;

        if let Some(parent) = output.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                failed(format!("failed to create directory {}: {e}", parent.display()))
            })?;
        }

        let part = PartFile::for_output(output);
        let mut file = tokio::fs::File::create(&part.path)
            .await
            .map_err(|e| failed(format!("failed to create {}: {e}", part.path.display())))?;

        let label = output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let progress_bar = self.progress_bar(response.content_length(), label);

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            if self.cancel.is_cancelled() {
                if let Some(pb) = &progress_bar {
                    pb.abandon_with_message("interrupted");
                }
                return Err(NetworkError::Interrupted.into());
            }

            let chunk = chunk.map_err(NetworkError::Reqwest)?;
            file.write_all(&chunk)
                .await
                .map_err(|e| failed(format!("failed to write {}: {e}", part.path.display())))?;
            if let Some(pb) = &progress_bar {
                pb.inc(chunk.len() as u64);
            }
        }

        file.flush()
            .await
            .map_err(|e| failed(format!("failed to flush {}: {e}", part.path.display())))?;
        drop(file);

        part.commit(output)
            .await
            .map_err(|e| failed(format!("failed to move into {}: {e}", output.display())))?;

        if let Some(pb) = progress_bar {
            pb.finish();
        }
        Ok(())
    }

    /// Fetches the body as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, returns a non-success status,
    /// or is cancelled.
    pub async fn download_string(&self) -> MgppResult<String> {
        let url = self.configured_url()?;
        let response = self.send(url).await?;
        self.check_cancelled()?;
        Ok(response.text().await.map_err(NetworkError::Reqwest)?)
    }

    /// Fetches a JSON document, such as a GitHub release.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode
    /// into `T`.
    pub async fn download_json<T: DeserializeOwned>(&self) -> MgppResult<T> {
        let url = self.configured_url()?;
        let body = self.download_string().await?;
        serde_json::from_str(&body).map_err(|e| {
            NetworkError::InvalidResponse {
                url: url.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }
}
