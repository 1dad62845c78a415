// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        targets / resolve / game
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            v
//!                settings (front-end, warnings)
//!                  |                    |
//!                  v                    v
//!              location  <-----------  mods
//!                  |                    |
//!                  +------> resolve <---+---- host (tasks, projects)
//!                              |
//!                              v
//!                             net
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, notation, |
//!   |               utility                   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod host;
pub mod location;
pub mod logging;
pub mod mods;
pub mod net;
pub mod notation;
pub mod resolve;
pub mod settings;
pub mod utility;
