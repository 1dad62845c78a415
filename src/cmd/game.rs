// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Game command implementation for mgpp-rs.

use anyhow::{Context, anyhow};
use tracing::info;

use crate::cli::resolve::GameArgs;
use crate::cmd::cancel_on_ctrl_c;
use crate::config::Config;
use crate::error::Result;
use crate::location::GameSide;
use crate::net::ProgressDisplay;
use crate::resolve::ResolveContext;
use crate::settings::TargetSpec;

/// Main handler for game command.
///
/// # Errors
///
/// Returns an error if the target does not exist, has no game location, or
/// the game file cannot be resolved.
pub async fn run_game_command(args: &GameArgs, config: &Config) -> Result<()> {
    let (side, entries) = if args.server {
        (GameSide::Server, &config.servers)
    } else {
        (GameSide::Client, &config.clients)
    };
    let entry = entries
        .get(args.index)
        .ok_or_else(|| anyhow!("no {side} target at index {}", args.index))?;

    let target = TargetSpec::from_config(side, entry).freeze();
    let location = target
        .location()
        .ok_or_else(|| anyhow!("{side} target '{}' has no game location", target.name()))?;

    let ctx = ResolveContext::builder()
        .with_endpoints(config.endpoints.clone())
        .with_redownload(args.redownload || config.global.redownload)
        .with_progress(ProgressDisplay::Bar)
        .with_cancel_token(cancel_on_ctrl_c())
        .build();

    let resolution = location
        .resolve(&config.paths.game_dir(), side, &ctx)
        .await
        .with_context(|| format!("failed to resolve {location}"))?;

    for file in resolution.files() {
        info!(file = %file.display(), from = %resolution.origin(), "game resolved");
        println!("{}", file.display());
    }
    Ok(())
}
