// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::loader::ConfigSource;
use super::{Config, ConfigLoader, PathsConfig};
use crate::config::types::EndpointsConfig;
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert!(!config.global.redownload);
    assert_eq!(config.global.concurrency, 4);
    assert_eq!(config.endpoints, EndpointsConfig::default());
    assert!(config.clients.is_empty() && config.mods.is_empty());
}

#[test]
fn test_paths_resolve() {
    let mut paths = PathsConfig {
        root: Some(PathBuf::from("/work")),
        cache: None,
    };
    paths.resolve();
    assert_eq!(paths.cache(), PathBuf::from("/work/build/mgpp"));
    assert_eq!(paths.mods_dir(), PathBuf::from("/work/build/mgpp/mods"));
    assert_eq!(paths.game_dir(), PathBuf::from("/work/build/mgpp/game"));

    let mut paths = PathsConfig {
        root: Some(PathBuf::from("/work")),
        cache: Some(PathBuf::from("tmp")),
    };
    paths.resolve();
    paths.resolve();
    assert_eq!(paths.cache(), PathBuf::from("/work/tmp"));
    assert_eq!(
        paths.under_root(std::path::Path::new("a/b")),
        PathBuf::from("/work/a/b")
    );
}

#[test]
fn test_paths_resolve_is_idempotent_for_relative_root() {
    let mut paths = PathsConfig::default();
    paths.resolve();
    let first = paths.cache();
    paths.resolve();
    assert_eq!(paths.cache(), first);
}

#[test]
fn test_config_parse() {
    let config = Config::parse(
        r#"
[global]
redownload = true
concurrency = 8

[[clients]]
name = "foo client"
jvm_args = ["-Xmx2g"]
game = { kind = "be", version = 22728 }

[[servers]]
game = { kind = "official", version = "latest" }

[[mods]]
kind = "jvm"
repo = "liplum/cyberio"

[[mods]]
kind = "task"
task = "iconMaker"

[[tasks]]
name = "iconMaker"
outputs = ["icon.png"]

[[projects]]
name = "core"
artifacts = ["build/libs/*.jar"]
"#,
    )
    .unwrap();

    assert!(config.global.redownload);
    assert_eq!(config.global.concurrency, 8);
    assert_eq!(config.clients.len(), 1);
    assert_eq!(config.clients[0].jvm_args, ["-Xmx2g"]);
    assert_eq!(
        config.clients[0]
            .game
            .as_ref()
            .and_then(|g| g.get("version"))
            .and_then(serde_json::Value::as_i64),
        Some(22728)
    );
    assert_eq!(config.servers.len(), 1);
    assert_eq!(config.mods.len(), 2);
    assert_eq!(config.tasks[0].outputs, Some(vec![PathBuf::from("icon.png")]));
    assert_eq!(config.projects[0].artifacts, ["build/libs/*.jar"]);
}

#[test]
fn test_zero_concurrency_rejected() {
    let result = Config::parse("[global]\nconcurrency = 0");
    assert!(result.is_err());
    insta::assert_snapshot!(
        result.unwrap_err().to_string(),
        @"invalid value for 'concurrency' in section '[global]': must be at least 1"
    );
}

#[test]
fn test_config_loader_tracks_files() {
    let loader = ConfigLoader::new().add_toml_str("[global]\n redownload = true");

    assert_eq!(loader.loaded_files(), [ConfigSource::Inline]);
    assert_eq!(loader.loaded_files()[0].path(), None);
}

#[test]
fn test_config_loader_format_loaded_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("[global]\n redownload = true")
        .add_toml_str("[paths]\n cache = \"tmp\"");

    insta::assert_debug_snapshot!(loader.format_loaded_files(), @r#"
    [
        "1. [inline] <string>",
        "2. [inline] <string>",
    ]
    "#);
}

#[test]
fn test_config_loader_optional_only_tracks_existing() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/path.toml");

    assert!(loader.loaded_files().is_empty());
}

#[test]
fn test_config_loader_file_source() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("mgpp.toml");
    std::fs::write(&path, "[global]\nconcurrency = 2\n").unwrap();

    let loader = ConfigLoader::new().add_toml_file(&path);
    assert_eq!(loader.loaded_files(), [ConfigSource::File(path.clone())]);
    let config = loader.build().unwrap();
    assert_eq!(config.global.concurrency, 2);
}

#[test]
fn test_later_sources_override_earlier() {
    let config = Config::builder()
        .add_toml_str("[global]\nconcurrency = 2\nredownload = true")
        .add_toml_str("[global]\nconcurrency = 6")
        .build()
        .unwrap();

    assert_eq!(config.global.concurrency, 6);
    assert!(config.global.redownload);
}

#[test]
fn test_set_all_overrides() {
    let config = Config::builder()
        .add_toml_str("[global]\nconcurrency = 2")
        .set_all(&[
            "global.concurrency=3".to_string(),
            "endpoints.github = http://localhost".to_string(),
        ])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.global.concurrency, 3);
    assert_eq!(config.endpoints.github, "http://localhost");
}

#[test]
fn test_set_all_rejects_missing_equals() {
    let result = Config::builder().set_all(&["global.concurrency".to_string()]);
    let Err(err) = result else {
        panic!("expected an error");
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"failed to parse config file '--set': expected KEY=VALUE, got 'global.concurrency'"
    );
}

#[test]
fn test_format_options_deterministic() {
    let config = Config::parse(
        r#"
[paths]
root = "/work"

[[tasks]]
name = "iconMaker"

[[projects]]
name = "core"
artifacts = ["a/*.jar", "b/*.jar"]
"#,
    )
    .unwrap();

    let first = config.format_options();
    assert_eq!(first, config.format_options());

    let joined = first.join("\n");
    assert!(joined.contains("tasks.iconMaker"));
    assert!(joined.contains("<no output>"));
    assert!(joined.contains("a/*.jar, b/*.jar"));
    assert!(joined.contains("/work/build/mgpp"));
}

#[test]
fn test_deny_unknown_fields_top_level() {
    let toml = r#"
[global]
redownload = true

[unknown_section]
foo = "bar"
"#;
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_deny_unknown_fields_in_target() {
    let toml = r#"
[[clients]]
name = "a"
colour = "red"
"#;
    assert!(Config::parse(toml).is_err());
}
