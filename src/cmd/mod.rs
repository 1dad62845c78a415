// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config (options, inis), targets, resolve (resolve, outputs), game
//! ```

pub mod config;
pub mod game;
pub mod resolve;
pub mod targets;

use tokio_util::sync::CancellationToken;

/// Cancels the returned token on Ctrl+C.
pub(crate) fn cancel_on_ctrl_c() -> CancellationToken {
    let cancel_token = CancellationToken::new();
    let token = cancel_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Received Ctrl+C, interrupting resolution...");
            token.cancel();
        }
    });
    cancel_token
}
