// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use serde_json::json;

use super::{ConfigWarning, ModsSpec, Props, TargetSpec, task_names};
use crate::config::types::TargetConfig;
use crate::location::{GameSide, Location};
use crate::logging::capture::CapturedLogs;
use crate::mods::Mod;

fn props(value: serde_json::Value) -> Props {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_second_location_wins_with_one_warning() {
    let mut spec = TargetSpec::client();
    spec.official("v146").be("22728");

    assert_eq!(
        spec.backend().location,
        Some(Location::BleedingEdge {
            build: "22728".to_string()
        })
    );
    assert_eq!(spec.warnings().len(), 1);
    insta::assert_snapshot!(
        spec.warnings()[0].to_string(),
        @"the game is already set to official release v146, and will be overridden by bleeding-edge build 22728"
    );
}

#[test]
fn test_location_override_logs_one_warning() {
    let logs = CapturedLogs::start();
    let mut spec = TargetSpec::client();
    spec.official("v146");
    assert!(logs.at_level("WARN").is_empty());

    spec.be("22728");
    let warnings = logs.at_level("WARN");
    assert_eq!(warnings.len(), 1, "{warnings:#?}");
    assert!(warnings[0].contains("will be overridden by bleeding-edge build 22728"));
}

#[test]
fn test_first_location_does_not_warn() {
    let mut spec = TargetSpec::server();
    spec.from_local_disk("server.jar");
    assert!(spec.warnings().is_empty());
}

#[test]
fn test_map_missing_version_leaves_location_unset() {
    let mut spec = TargetSpec::client();
    spec.apply_map("official", &props(json!({})));
    spec.apply_map("be", &props(json!({ "build": "1" })));

    assert_eq!(spec.backend().location, None);
    assert_eq!(spec.warnings().len(), 2);
    insta::assert_snapshot!(spec.warnings()[0].to_string(), @r#"official: no "version" given"#);
}

#[test]
fn test_map_missing_version_keeps_previous_location() {
    let mut spec = TargetSpec::client();
    spec.official_latest();
    spec.apply_map("be", &props(json!({})));

    assert_eq!(
        spec.backend().location,
        Some(Location::Official {
            version: "latest".to_string()
        })
    );
    assert_eq!(spec.warnings().len(), 1);
}

#[test]
fn test_map_numeric_version() {
    let mut spec = TargetSpec::client();
    spec.apply_map("be", &props(json!({ "version": 22728 })));

    assert_eq!(
        spec.backend().location,
        Some(Location::BleedingEdge {
            build: "22728".to_string()
        })
    );
}

#[test]
fn test_map_github_requires_every_key() {
    let mut spec = TargetSpec::client();
    spec.apply_map(
        "github",
        &props(json!({ "user": "liplum", "repo": "cyberio", "tag": "v1.0" })),
    );
    assert_eq!(spec.backend().location, None);
    insta::assert_snapshot!(spec.warnings()[0].to_string(), @r#"github: no "file" given"#);

    spec.apply_map(
        "github",
        &props(json!({ "user": "liplum", "repo": "cyberio", "tag": "v1.0", "file": "C.jar" })),
    );
    assert!(matches!(spec.backend().location, Some(Location::GitHub { .. })));
}

#[test]
fn test_map_local_path_or_file() {
    let mut spec = TargetSpec::client();
    spec.apply_map("fromLocalDisk", &props(json!({ "file": "game.jar" })));
    assert_eq!(
        spec.backend().location,
        Some(Location::LocalPath {
            path: PathBuf::from("game.jar")
        })
    );

    let mut spec = TargetSpec::client();
    spec.apply_map("local", &props(json!({})));
    insta::assert_snapshot!(
        spec.warnings()[0].to_string(),
        @r#"local: neither "path" nor "file" given"#
    );
}

#[test]
fn test_map_unknown_call() {
    let mut spec = TargetSpec::client();
    spec.apply_map("steam", &props(json!({ "version": "1" })));
    assert!(matches!(
        &spec.warnings()[0],
        ConfigWarning::Configuration { call, .. } if call == "steam"
    ));
}

#[test]
fn test_names_are_normalized() {
    let mut spec = TargetSpec::client();
    spec.set_name("foo client").set_modpack("my pack!");

    let target = spec.freeze();
    assert_eq!(target.name(), "FooClient");
    assert_eq!(target.modpack(), Some("MyPack"));
    assert_eq!(target.data_dir(), "FooClient");
}

#[test]
fn test_data_dir_override() {
    let mut spec = TargetSpec::client();
    spec.set_name("a").set_data_dir("saves");
    assert_eq!(spec.freeze().data_dir(), "saves");
}

#[test]
fn test_jvm_args_on_macos() {
    let mut spec = TargetSpec::client();
    spec.add_jvm_arg("-Xmx2g");
    let client = spec.freeze();
    assert_eq!(client.jvm_args_on("macos"), ["-Xmx2g", "-XstartOnFirstThread"]);
    assert_eq!(client.jvm_args_on("linux"), ["-Xmx2g"]);

    let server = TargetSpec::server().freeze();
    assert!(server.jvm_args_on("macos").is_empty());
}

#[test]
fn test_game_file() {
    let mut spec = TargetSpec::server();
    spec.official("v146");
    let target = spec.freeze();
    assert_eq!(
        target.game_file(Path::new("/game")),
        Some(PathBuf::from("/game/Official_v146/server-release.jar"))
    );
    assert_eq!(TargetSpec::client().freeze().game_file(Path::new("/game")), None);
}

#[test]
fn test_task_names() {
    let mut named = TargetSpec::client();
    named.set_name("foo client");
    let targets = vec![
        TargetSpec::client().freeze(),
        TargetSpec::client().freeze(),
        named.freeze(),
        TargetSpec::server().freeze(),
    ];

    assert_eq!(
        task_names(&targets),
        ["runClient", "runClient2", "runClientFooClient", "runServer"]
    );
}

#[test]
fn test_from_config() {
    let config = TargetConfig {
        name: "dev client".to_string(),
        startup_args: vec!["-debug".to_string()],
        jvm_args: vec!["-Xmx1g".to_string()],
        data_dir: None,
        modpack: Some("pack one".to_string()),
        game: Some(props(json!({ "kind": "be", "version": "latest" }))),
    };
    let spec = TargetSpec::from_config(GameSide::Client, &config);
    assert!(spec.warnings().is_empty());

    let target = spec.freeze();
    assert_eq!(target.name(), "DevClient");
    assert_eq!(target.startup_args(), ["-debug"]);
    assert_eq!(target.modpack(), Some("PackOne"));
    assert_eq!(
        target.location(),
        Some(&Location::BleedingEdge {
            build: "latest".to_string()
        })
    );
}

#[test]
fn test_from_config_game_without_kind() {
    let config = TargetConfig {
        game: Some(props(json!({ "version": "v146" }))),
        ..TargetConfig::default()
    };
    let spec = TargetSpec::from_config(GameSide::Server, &config);
    assert_eq!(spec.warnings().len(), 1);
    assert_eq!(spec.backend().location, None);
}

#[test]
fn test_mods_spec_typed() {
    let mut spec = ModsSpec::new();
    spec.jvm("liplum/cyberio")
        .json("liplum/jsonic", Some("dev"))
        .from_task("iconMaker")
        .project("core")
        .local("libs/Extra.jar");

    assert_eq!(
        spec.freeze(),
        vec![
            Mod::jvm("liplum/cyberio"),
            Mod::json("liplum/jsonic", Some("dev".to_string())),
            Mod::task("iconMaker"),
            Mod::project("core"),
            Mod::remote(Location::LocalPath {
                path: PathBuf::from("libs/Extra.jar")
            }),
        ]
    );
}

#[test]
fn test_mods_spec_from_config() {
    let entries = vec![
        props(json!({ "kind": "jvm", "repo": "liplum/cyberio" })),
        props(json!({ "kind": "task", "task": "iconMaker" })),
        props(json!({ "kind": "project", "name": "core" })),
        props(json!({ "kind": "official", "version": "v146" })),
        props(json!({ "kind": "jvm" })),
        props(json!({ "repo": "a/b" })),
        props(json!({ "kind": "maven", "repo": "a/b" })),
    ];
    let spec = ModsSpec::from_config(&entries);

    assert_eq!(spec.mods().len(), 4);
    let warnings: Vec<String> = spec.warnings().iter().map(ToString::to_string).collect();
    insta::assert_debug_snapshot!(warnings, @r#"
    [
        "jvm: no \"repo\" given",
        "mod: no \"kind\" given",
        "mod: unknown mod kind \"maven\"",
    ]
    "#);
}
