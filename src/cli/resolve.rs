// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the `resolve` and `game` commands.

use clap::Args;

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ResolveArgs {
    /// Downloads every remote mod again, even when a cached file exists.
    /// This is how `latest` mods get refreshed.
    #[arg(long)]
    pub redownload: bool,

    /// Maximum number of mods resolved at the same time (overrides global.concurrency).
    #[arg(short = 'j', long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: Option<u16>,

    /// Hides download progress bars.
    #[arg(long)]
    pub silent: bool,
}

/// Arguments for the `game` command.
#[derive(Debug, Clone, Default, Args)]
pub struct GameArgs {
    /// Uses the server targets instead of the client targets.
    #[arg(long)]
    pub server: bool,

    /// Index of the target among the configured clients or servers.
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub index: usize,

    /// Downloads the game again, even when a cached file exists.
    #[arg(long)]
    pub redownload: bool,
}
