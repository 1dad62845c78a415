// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities with parallel traversal.
//!
//! ```text
//! walk:  find_files()     glob pattern matching over ignore::WalkParallel
//!        WalkOptions      max_depth, hidden, gitignore, skip_dirs
//! ```

pub mod walk;
