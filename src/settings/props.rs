// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Loosely typed key/value configuration.
//!
//! ```text
//! call                   keys
//! github                 user, repo, tag, file   (all required)
//! official, be           version                 (`latest` allowed)
//! local, fromLocalDisk   path | file
//!
//! mod kinds: the calls above, plus
//! jvm                    repo
//! json                   repo, branch?
//! task                   task | name
//! project                project | name
//! ```
//!
//! Strings, numbers and booleans are accepted for every key.

use std::path::PathBuf;

use serde_json::Value;

use super::{ConfigWarning, Props};
use crate::location::Location;
use crate::mods::Mod;

/// Key naming the call or mod kind inside a table.
pub const KIND_KEY: &str = "kind";

/// Reads `key` as a string, stringifying scalars.
#[must_use]
pub fn prop_string(props: &Props, key: &str) -> Option<String> {
    match props.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn missing(call: &str, key: &str) -> ConfigWarning {
    ConfigWarning::Configuration {
        call: call.to_string(),
        message: format!("no \"{key}\" given"),
    }
}

fn required(call: &str, props: &Props, key: &str) -> Result<String, ConfigWarning> {
    prop_string(props, key).ok_or_else(|| missing(call, key))
}

/// First of `keys` present in `props`.
fn either(call: &str, props: &Props, keys: &[&str]) -> Result<String, ConfigWarning> {
    keys.iter()
        .find_map(|key| prop_string(props, key))
        .ok_or_else(|| ConfigWarning::Configuration {
            call: call.to_string(),
            message: format!(
                "neither {} given",
                keys.iter()
                    .map(|k| format!("\"{k}\""))
                    .collect::<Vec<_>>()
                    .join(" nor ")
            ),
        })
}

/// Builds a [`Location`] from a `call` and its key table.
///
/// # Errors
///
/// Returns `ConfigWarning::Configuration` for an unknown call or a missing
/// required key.
pub fn location_from_props(call: &str, props: &Props) -> Result<Location, ConfigWarning> {
    match call {
        "github" => Ok(Location::GitHub {
            user: required(call, props, "user")?,
            repo: required(call, props, "repo")?,
            tag: required(call, props, "tag")?,
            file: required(call, props, "file")?,
        }),
        "official" => Ok(Location::Official {
            version: required(call, props, "version")?,
        }),
        "be" => Ok(Location::BleedingEdge {
            build: required(call, props, "version")?,
        }),
        "local" | "fromLocalDisk" => Ok(Location::LocalPath {
            path: PathBuf::from(either(call, props, &["path", "file"])?),
        }),
        _ => Err(ConfigWarning::Configuration {
            call: call.to_string(),
            message: "unknown location kind".to_string(),
        }),
    }
}

/// Builds a [`Mod`] from a table dispatched on its `kind` key.
///
/// # Errors
///
/// Returns `ConfigWarning::Configuration` when `kind` is missing or unknown,
/// or a required key is absent.
pub fn mod_from_props(props: &Props) -> Result<Mod, ConfigWarning> {
    let kind = prop_string(props, KIND_KEY).ok_or_else(|| missing("mod", KIND_KEY))?;
    match kind.as_str() {
        "github" | "official" | "be" | "local" | "fromLocalDisk" => {
            location_from_props(&kind, props).map(Mod::remote)
        }
        "jvm" => Ok(Mod::jvm(required("jvm", props, "repo")?)),
        "json" => Ok(Mod::json(
            required("json", props, "repo")?,
            prop_string(props, "branch"),
        )),
        "task" => Ok(Mod::task(either("task", props, &["task", "name"])?)),
        "project" => Ok(Mod::project(either("project", props, &["project", "name"])?)),
        _ => Err(ConfigWarning::Configuration {
            call: "mod".to_string(),
            message: format!("unknown mod kind \"{kind}\""),
        }),
    }
}
