// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests a realistic `mgpp.toml` through the settings front-end: run
//! targets, the mod list and the host registry.

use std::path::PathBuf;

use mgpp_rs::cmd::targets::{configured_targets, describe_targets};
use mgpp_rs::config::Config;
use mgpp_rs::host::{TaskHost, TaskLookup, TaskRegistry};
use mgpp_rs::location::{GameSide, Location};
use mgpp_rs::mods::Mod;
use mgpp_rs::resolve::{ModResolver, ResolveContext};
use mgpp_rs::settings::{ModsSpec, task_names};

const PROJECT_TOML: &str = r#"
[global]
concurrency = 2

[paths]
root = "/work"

[[clients]]
game = { kind = "be", version = "latest" }

[[clients]]
name = "foo client"
modpack = "test pack"
game = { kind = "github", user = "liplum", repo = "mindustry", tag = "v1.0", file = "Custom.jar" }

[[servers]]
name = "dedicated"
startup_args = ["host", "Ancient_Caldera"]
game = { kind = "official", version = "v146" }

[[servers]]
game = { kind = "official" }

[[mods]]
kind = "jvm"
repo = "liplum/cyberio"

[[mods]]
kind = "json"
repo = "liplum/jsonic"
branch = "dev"

[[mods]]
kind = "github"
user = "liplum"
repo = "extra"
tag = "v2"
file = "Extra.jar"

[[mods]]
kind = "task"
task = "iconMaker"

[[mods]]
kind = "project"
name = "core"

[[tasks]]
name = "iconMaker"
outputs = ["build/icons.zip"]

[[tasks]]
name = "lint"

[[projects]]
name = "core"
artifacts = ["build/libs/*.jar"]
"#;

// =============================================================================
// Run targets
// =============================================================================

#[test]
fn config_targets_in_declaration_order() {
    let config = Config::parse(PROJECT_TOML).unwrap();
    let targets = configured_targets(&config);

    assert_eq!(
        task_names(&targets),
        ["runClient", "runClientFooClient", "runServerDedicated", "runServer"]
    );
    assert_eq!(targets[1].modpack(), Some("TestPack"));
    assert_eq!(targets[2].startup_args(), ["host", "Ancient_Caldera"]);
    // The second server's game table has no version.
    assert_eq!(targets[3].location(), None);
}

#[test]
fn config_describe_servers() {
    let config = Config::parse(PROJECT_TOML).unwrap();
    let servers: Vec<_> = configured_targets(&config)
        .into_iter()
        .filter(|t| t.side() == GameSide::Server)
        .collect();

    insta::assert_debug_snapshot!(describe_targets(&servers), @r#"
    [
        "runServerDedicated  official release v146  data_dir=Dedicated",
        "runServer           <no game>  data_dir=",
    ]
    "#);
}

#[test]
fn config_game_files_under_cache() {
    let config = Config::parse(PROJECT_TOML).unwrap();
    let targets = configured_targets(&config);
    let game_dir = config.paths.game_dir();

    assert_eq!(
        targets[1].game_file(&game_dir),
        Some(PathBuf::from(
            "/work/build/mgpp/game/Github_liplum_mindustry_v1-2E0/Custom.jar"
        ))
    );
    assert_eq!(
        targets[0].location(),
        Some(&Location::BleedingEdge {
            build: "latest".to_string()
        })
    );
}

// =============================================================================
// Mods and host
// =============================================================================

#[test]
fn config_mod_list() {
    let config = Config::parse(PROJECT_TOML).unwrap();
    let spec = ModsSpec::from_config(&config.mods);

    assert!(spec.warnings().is_empty());
    assert_eq!(
        spec.freeze(),
        vec![
            Mod::jvm("liplum/cyberio"),
            Mod::json("liplum/jsonic", Some("dev".to_string())),
            Mod::remote(Location::GitHub {
                user: "liplum".to_string(),
                repo: "extra".to_string(),
                tag: "v2".to_string(),
                file: "Extra.jar".to_string(),
            }),
            Mod::task("iconMaker"),
            Mod::project("core"),
        ]
    );
}

#[test]
fn config_task_registry() {
    let config = Config::parse(PROJECT_TOML).unwrap();
    let host = TaskRegistry::from_config(&config);

    assert_eq!(
        host.task_output("iconMaker"),
        TaskLookup::Outputs(vec![PathBuf::from("/work/build/icons.zip")])
    );
    assert_eq!(host.task_output("lint"), TaskLookup::NoOutput);
    assert_eq!(host.task_output("jar"), TaskLookup::Missing);
    assert_eq!(host.all_projects().collect::<Vec<_>>(), ["core"]);
}

#[test]
fn config_declared_outputs() {
    let root = tempfile::tempdir().unwrap();
    let config = Config::builder()
        .add_toml_str(PROJECT_TOML)
        .set_all(&[format!("paths.root={}", root.path().display())])
        .unwrap()
        .build()
        .unwrap();
    let mods = ModsSpec::from_config(&config.mods).freeze();
    let host = TaskRegistry::from_config(&config);
    let resolver = ModResolver::new(config.paths.mods_dir(), ResolveContext::default(), &host);

    assert!(resolver.declared_outputs(&mods).is_empty());

    let icons = root.path().join("build").join("icons.zip");
    std::fs::create_dir_all(icons.parent().unwrap()).unwrap();
    std::fs::write(&icons, "zip").unwrap();
    let jar = root.path().join("core/build/libs/core.jar");
    std::fs::create_dir_all(jar.parent().unwrap()).unwrap();
    std::fs::write(&jar, "jar").unwrap();

    assert_eq!(resolver.declared_outputs(&mods), [icons, jar]);
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_set_overrides_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("mgpp.toml");
    std::fs::write(&path, PROJECT_TOML).unwrap();

    let config = Config::builder()
        .add_toml_file(&path)
        .set_all(&[
            "global.concurrency=8".to_string(),
            "global.output_log_level=4".to_string(),
        ])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.global.concurrency, 8);
    assert_eq!(config.global.output_log_level.as_u8(), 4);
    assert_eq!(config.clients.len(), 2);
}

#[test]
fn config_invalid_toml_is_error() {
    assert!(Config::parse("[[clients]\nname = ").is_err());
}
