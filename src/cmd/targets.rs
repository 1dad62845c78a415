// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Targets command implementation for mgpp-rs.

use crate::config::Config;
use crate::location::GameSide;
use crate::settings::{RunTarget, TargetSpec, task_names};

/// Freezes every `[[clients]]` then `[[servers]]` entry, in order.
#[must_use]
pub fn configured_targets(config: &Config) -> Vec<RunTarget> {
    let clients = config
        .clients
        .iter()
        .map(|c| TargetSpec::from_config(GameSide::Client, c));
    let servers = config
        .servers
        .iter()
        .map(|s| TargetSpec::from_config(GameSide::Server, s));
    clients.chain(servers).map(TargetSpec::freeze).collect()
}

/// One display line per target.
#[must_use]
pub fn describe_targets(targets: &[RunTarget]) -> Vec<String> {
    let names = task_names(targets);
    let width = names.iter().map(String::len).max().unwrap_or(0);
    targets
        .iter()
        .zip(names)
        .map(|(target, task)| {
            let game = target
                .location()
                .map_or_else(|| "<no game>".to_string(), ToString::to_string);
            let mut line = format!("{task:<width$}  {game}  data_dir={}", target.data_dir());
            if let Some(modpack) = target.modpack() {
                line.push_str(&format!("  modpack={modpack}"));
            }
            let jvm_args = target.effective_jvm_args();
            if !jvm_args.is_empty() {
                line.push_str(&format!("  jvm_args=[{}]", jvm_args.join(" ")));
            }
            line
        })
        .collect()
}

/// Main handler for targets command.
pub fn run_targets_command(config: &Config) {
    let targets = configured_targets(config);
    if targets.is_empty() {
        println!("No run targets configured");
        return;
    }
    for line in describe_targets(&targets) {
        println!("{line}");
    }
}
