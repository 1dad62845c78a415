// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `options` and `inis` commands.

use crate::config::Config;
use crate::config::loader::ConfigLoader;

/// Prints every effective option, one `key = value` per line.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Prints the TOML sources in load order.
pub fn run_inis_command(loader: &ConfigLoader) {
    let lines = loader.format_loaded_files();
    if lines.is_empty() {
        println!("No configuration files loaded; built-in defaults apply");
    }
    for line in lines {
        println!("{line}");
    }
}
