// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::global::GlobalOptions;
use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["mgpp", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["mgpp"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "mgpp",
        "-l",
        "5",
        "--root",
        "/work",
        "-s",
        "global.concurrency=2",
        "--ini",
        "extra.toml",
        "resolve",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.root, Some(PathBuf::from("/work")));
    assert_eq!(cli.global.inis, [PathBuf::from("extra.toml")]);
    assert!(matches!(cli.command, Some(Command::Resolve(_))));
}

#[test]
fn test_parse_resolve() {
    let cli = Cli::try_parse_from(["mgpp", "resolve", "--redownload", "-j", "3", "--silent"])
        .unwrap();
    let Some(Command::Resolve(args)) = cli.command else {
        panic!("expected resolve");
    };
    assert!(args.redownload);
    assert_eq!(args.concurrency, Some(3));
    assert!(args.silent);
}

#[test]
fn test_parse_resolve_rejects_zero_concurrency() {
    assert!(Cli::try_parse_from(["mgpp", "resolve", "-j", "0"]).is_err());
}

#[test]
fn test_parse_game() {
    let cli = Cli::try_parse_from(["mgpp", "game", "--server", "--index", "1"]).unwrap();
    let Some(Command::Game(args)) = cli.command else {
        panic!("expected game");
    };
    assert!(args.server);
    assert_eq!(args.index, 1);
    assert!(!args.redownload);
}

#[test]
fn test_invalid_log_level() {
    assert!(Cli::try_parse_from(["mgpp", "-l", "7", "version"]).is_err());
}

#[test]
fn test_config_overrides() {
    let options = GlobalOptions {
        log_level: Some(4),
        root: Some(PathBuf::from("/work")),
        options: vec!["global.redownload=true".to_string()],
        ..GlobalOptions::default()
    };

    insta::assert_debug_snapshot!(options.to_config_overrides(), @r#"
    [
        "global.redownload=true",
        "global.output_log_level=4",
        "global.file_log_level=4",
        "paths.root=/work",
    ]
    "#);
}
