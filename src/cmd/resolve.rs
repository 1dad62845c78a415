// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolve and outputs command implementations for mgpp-rs.

use tracing::{info, warn};

use crate::cli::resolve::ResolveArgs;
use crate::cmd::cancel_on_ctrl_c;
use crate::config::Config;
use crate::host::TaskRegistry;
use crate::net::ProgressDisplay;
use crate::resolve::{ModResolver, ResolveContext, ResolveReport};
use crate::settings::ModsSpec;

/// Main handler for resolve command.
///
/// Failed mods are reported as warnings; the command itself still succeeds.
pub async fn run_resolve_command(args: &ResolveArgs, config: &Config) {
    let mods = ModsSpec::from_config(&config.mods).freeze();
    if mods.is_empty() {
        println!("No mods configured");
        return;
    }

    let concurrency = args
        .concurrency
        .map_or(config.global.concurrency, usize::from);
    // Bars from concurrent downloads would overwrite each other.
    let progress = if args.silent || concurrency > 1 {
        ProgressDisplay::Silent
    } else {
        ProgressDisplay::Bar
    };

    let ctx = ResolveContext::builder()
        .with_endpoints(config.endpoints.clone())
        .with_redownload(args.redownload || config.global.redownload)
        .with_progress(progress)
        .with_cancel_token(cancel_on_ctrl_c())
        .build();

    let host = TaskRegistry::from_config(config);
    let resolver =
        ModResolver::new(config.paths.mods_dir(), ctx, &host).with_concurrency(concurrency);

    info!(mods = mods.len(), concurrency, "resolving mods");
    let report = resolver.resolve_all(&mods).await;
    print_report(&report);
}

fn print_report(report: &ResolveReport) {
    for file in report.files() {
        println!("{}", file.display());
    }
    if report.is_success() {
        info!(mods = report.outcomes().len(), "all mods resolved");
    } else {
        warn!(
            failed = report.warning_count(),
            mods = report.outcomes().len(),
            "some mods could not be resolved"
        );
    }
}

/// Main handler for outputs command.
pub fn run_outputs_command(config: &Config) {
    let mods = ModsSpec::from_config(&config.mods).freeze();
    let host = TaskRegistry::from_config(config);
    let resolver = ModResolver::new(config.paths.mods_dir(), ResolveContext::default(), &host);

    let files = resolver.declared_outputs(&mods);
    if files.is_empty() {
        println!("No resolved mod files");
    } else {
        for file in files {
            println!("{}", file.display());
        }
    }
}
