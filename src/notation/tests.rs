// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{TaskNamer, escape_part, is_latest, normalize};

#[test]
fn test_normalize_examples() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("foo-bar"), "FooBar");
    assert_eq!(normalize("v1.2.3"), "V123");
    assert_eq!(normalize("already_Camel"), "AlreadyCamel");
}

#[test]
fn test_normalize_keeps_inner_case_and_digits() {
    assert_eq!(normalize("FooClient"), "FooClient");
    assert_eq!(normalize("fooBAR"), "FooBAR");
    assert_eq!(normalize("123abc"), "123abc");
    assert_eq!(normalize("liplum/cyberio"), "LiplumCyberio");
}

#[test]
fn test_normalize_collapses_separator_runs() {
    assert_eq!(normalize("  my --- mod  "), "MyMod");
    assert_eq!(normalize("---"), "");
    assert_eq!(normalize("ünïcode mod"), "NCodeMod");
}

#[test]
fn test_normalize_is_identity_on_plain_capitalized_token() {
    for token in ["Mindustry", "V146", "AlreadyCamel"] {
        assert_eq!(normalize(token), token);
    }
}

#[test]
fn test_normalize_is_deterministic() {
    let input = "Exotic Mod (0.8)";
    assert_eq!(normalize(input), normalize(input));
    assert_eq!(normalize(input), "ExoticMod08");
}

#[test]
fn test_task_namer_unnamed_targets_are_numbered() {
    let mut namer = TaskNamer::new();
    assert_eq!(namer.task_name("runClient", ""), "runClient");
    assert_eq!(namer.task_name("runClient", ""), "runClient2");
    assert_eq!(namer.task_name("runServer", ""), "runServer");
    assert_eq!(namer.task_name("runClient", "  "), "runClient3");
}

#[test]
fn test_task_namer_named_targets() {
    let mut namer = TaskNamer::new();
    assert_eq!(namer.task_name("runClient", "foo client"), "runClientFooClient");
    assert_eq!(namer.task_name("runClient", ""), "runClient");
}

#[test]
fn test_is_latest() {
    assert!(is_latest("latest"));
    assert!(!is_latest("Latest"));
    assert!(!is_latest("v146"));
}

#[test]
fn test_escape_part_keeps_alphanumerics_and_case() {
    assert_eq!(escape_part("v146"), "v146");
    assert_eq!(escape_part("Cyberio"), "Cyberio");
    assert_eq!(escape_part(""), "");
}

#[test]
fn test_escape_part_encodes_other_bytes() {
    assert_eq!(escape_part("v1.0"), "v1-2E0");
    assert_eq!(escape_part("Mod-X"), "Mod-2DX");
    assert_eq!(escape_part("feature/x"), "feature-2Fx");
    assert_eq!(escape_part("a_b"), "a-5Fb");
    assert_eq!(escape_part("é"), "-C3-A9");
}

#[test]
fn test_escape_part_separates_what_normalize_merges() {
    let pairs = [
        ("v1.0", "v10"),
        ("feature/x", "feature-x"),
        ("Mod-X", "ModX"),
        ("v1", "V1"),
    ];
    for (a, b) in pairs {
        assert_eq!(normalize(a), normalize(b));
        assert_ne!(escape_part(a), escape_part(b), "{a} vs {b}");
    }
    assert!(!escape_part("a_b c").contains('_'));
}
