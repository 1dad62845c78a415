// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for mgpp-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! mgpp [global options] <command>
//! version
//! options | inis
//! targets
//! outputs
//! resolve [--redownload] [--concurrency N] [--silent]
//! game [--server] [--index N] [--redownload]
//! ```

pub mod global;
pub mod resolve;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::resolve::{GameArgs, ResolveArgs};
use clap::{Parser, Subcommand};

/// Mindustry Mod Build Tool
///
/// Resolves mod dependencies and game files for Mindustry mod projects.
#[derive(Debug, Parser)]
#[command(
    name = "mgpp",
    author,
    version,
    about = "Mindustry Mod Build Tool",
    long_about = "mgpp-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Resolves the mods a Mindustry mod project depends on, and the\n\
                  game files its client and server run targets use.\n\n\
                  Invoking `mgpp resolve` downloads every configured mod into the\n\
                  cache. See `mgpp <command> --help` for more information about\n\
                  a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, mgpp loads `mgpp.toml` from the current directory.\n\
                  Additional files can be given with --ini; they are loaded after\n\
                  it and override its values. MGPP_<SECTION>__<KEY> environment\n\
                  variables and --set options override all files. Use\n\
                  --no-default-inis to only use --ini."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by mgpp.
    Inis,

    /// Lists the client and server run targets.
    Targets,

    /// Lists mod files already present in the cache, without downloading.
    Outputs,

    /// Resolves every configured mod.
    Resolve(ResolveArgs),

    /// Resolves the game file of a run target.
    Game(GameArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
