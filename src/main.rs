// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Options | Inis | Targets | Outputs | Resolve | Game
//! ```

use std::process::ExitCode;

use mgpp_rs::cli::global::GlobalOptions;
use mgpp_rs::cli::{self, Command};
use mgpp_rs::cmd::config::{run_inis_command, run_options_command};
use mgpp_rs::cmd::game::run_game_command;
use mgpp_rs::cmd::resolve::{run_outputs_command, run_resolve_command};
use mgpp_rs::cmd::targets::run_targets_command;
use mgpp_rs::config::Config;
use mgpp_rs::config::loader::ConfigLoader;
use mgpp_rs::logging::init_logging;
use mgpp_rs::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Default config file, looked up in the current directory.
const DEFAULT_INI: &str = "mgpp.toml";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let config = load_config(&cli.global);
    let log_config = match &config {
        Ok(config) => log_config_from(config),
        Err(_) => build_log_config(&cli.global),
    };
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, config).await
}

fn log_config_from(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .build()
}

/// Logging from CLI flags alone, used when the config cannot be loaded.
fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.clone())
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: mgpp_rs::error::Result<Config>) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Inis) => build_config_loader(&cli.global).map(|loader| {
            run_inis_command(&loader);
        }),
        Some(Command::Options) => config.map(|config| run_options_command(&config)),
        Some(Command::Targets) => config.map(|config| run_targets_command(&config)),
        Some(Command::Outputs) => config.map(|config| run_outputs_command(&config)),
        Some(Command::Resolve(args)) => match config {
            Ok(config) => {
                run_resolve_command(args, &config).await;
                Ok(())
            }
            Err(e) => Err(e),
        },
        Some(Command::Game(args)) => match config {
            Ok(config) => run_game_command(args, &config).await,
            Err(e) => Err(e),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> mgpp_rs::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(DEFAULT_INI);
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader
        .with_env_prefix("MGPP")
        .set_all(&global.to_config_overrides())
}

fn load_config(global: &GlobalOptions) -> mgpp_rs::error::Result<Config> {
    build_config_loader(global)?.build()
}
