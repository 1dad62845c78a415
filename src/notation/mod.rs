// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Identifier-safe notation derived from free text.
//!
//! ```text
//! "foo-bar"       --> "FooBar"
//! "v1.2.3"        --> "V123"
//! "already_Camel" --> "AlreadyCamel"
//!
//! escape_part (reversible, case kept):
//! "v1.0"          --> "v1-2E0"
//! "Mod-X"         --> "Mod-2DX"
//!
//! TaskNamer("runClient"):
//!   ""          --> runClient, runClient2, runClient3, ...
//!   "foo client" --> runClientFooClient
//! ```

use std::collections::BTreeMap;

/// Literal that selects the newest release wherever a version is accepted.
pub const LATEST: &str = "latest";

/// Returns whether a version string is the [`LATEST`] notation.
#[must_use]
pub fn is_latest(version: &str) -> bool {
    version == LATEST
}

/// Turns arbitrary text into a camel-cased token of ASCII alphanumerics.
///
/// Every maximal run of other characters is a word boundary; the first kept
/// character of the input and the first kept character after a boundary are
/// uppercased. All other characters keep their case.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut next_upper = true;
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            if next_upper {
                out.push(c.to_ascii_uppercase());
                next_upper = false;
            } else {
                out.push(c);
            }
        } else {
            next_upper = true;
        }
    }
    out
}

/// Encodes text as a file-name component that maps back to exactly one input.
///
/// ASCII alphanumerics are kept; every other UTF-8 byte becomes `-XX` in
/// uppercase hex. The result never contains `_`.
#[must_use]
pub fn escape_part(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("-{byte:02X}"));
        }
    }
    out
}

/// Allocates unique run-task names for a family of targets.
///
/// Unnamed targets share the bare prefix, numbered from the second one on.
#[derive(Debug, Default)]
pub struct TaskNamer {
    unnamed: BTreeMap<String, usize>,
}

impl TaskNamer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the task name for a target called `name` under `prefix`.
    pub fn task_name(&mut self, prefix: &str, name: &str) -> String {
        let token = normalize(name);
        if !token.is_empty() {
            return format!("{prefix}{token}");
        }
        let count = self.unnamed.entry(prefix.to_string()).or_default();
        *count += 1;
        if *count == 1 {
            prefix.to_string()
        } else {
            format!("{prefix}{count}")
        }
    }
}

#[cfg(test)]
mod tests;
