// mgpp-rs: Mindustry Mod Build Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The build host as seen by the resolver.
//!
//! ```text
//! TaskHost
//!   task_output("iconMaker")  --> Missing | NoOutput | Outputs([..])
//!   project_artifacts("core") --> glob(project dir, artifact patterns)
//!
//! TaskRegistry: TaskHost backed by [[tasks]] / [[projects]]
//! ```
//!
//! Lookups happen when a mod resolves, not when it is declared, so a task
//! registered after the mod list was built is still found.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::{MgppResult, ResolveError};
use crate::utility::fs::walk::{WalkOptions, find_files};

/// Result of looking up a named task's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskLookup {
    /// No task with that name.
    Missing,
    /// The task exists but declares no output.
    NoOutput,
    /// Declared output files, in declaration order.
    Outputs(Vec<PathBuf>),
}

/// Named-task and project lookups the resolver needs from the host.
pub trait TaskHost: Send + Sync {
    fn task_output(&self, name: &str) -> TaskLookup;

    /// Artifacts a project's build produced.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::UnknownProject` if the project is not known.
    fn project_artifacts(&self, name: &str) -> MgppResult<Vec<PathBuf>>;
}

#[derive(Debug, Clone)]
struct ProjectEntry {
    dir: PathBuf,
    patterns: Vec<String>,
}

/// Registry of tasks and projects.
#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    /// Task names with their declared outputs (`None` = no output).
    tasks: BTreeMap<String, Option<Vec<PathBuf>>>,

    projects: BTreeMap<String, ProjectEntry>,
}

impl TaskRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from `[[tasks]]` and `[[projects]]`.
    ///
    /// Relative paths are resolved against `paths.root`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::new();
        for task in &config.tasks {
            registry.register(&task.name);
            if let Some(outputs) = &task.outputs {
                registry.set_outputs(
                    &task.name,
                    outputs.iter().map(|p| config.paths.under_root(p)),
                );
            }
        }
        for project in &config.projects {
            let dir = project.dir.as_ref().map_or_else(
                || config.paths.root().join(&project.name),
                |dir| config.paths.under_root(dir),
            );
            registry.register_project(&project.name, dir, project.artifacts.clone());
        }
        registry
    }

    /// Registers a task without output. Re-registering keeps existing outputs.
    pub fn register(&mut self, name: impl Into<String>) {
        self.tasks.entry(name.into()).or_insert(None);
    }

    /// Sets a task's output files, registering the task if needed.
    pub fn set_outputs(
        &mut self,
        name: impl Into<String>,
        outputs: impl IntoIterator<Item = impl Into<PathBuf>>,
    ) {
        let outputs = outputs.into_iter().map(Into::into).collect();
        self.tasks.insert(name.into(), Some(outputs));
    }

    /// Registers a project whose artifacts match `patterns` under `dir`.
    pub fn register_project(
        &mut self,
        name: impl Into<String>,
        dir: impl Into<PathBuf>,
        patterns: Vec<String>,
    ) {
        self.projects.insert(
            name.into(),
            ProjectEntry {
                dir: dir.into(),
                patterns,
            },
        );
    }

    /// Returns all registered task names.
    pub fn all_tasks(&self) -> impl Iterator<Item = &str> {
        self.tasks.keys().map(String::as_str)
    }

    /// Returns all registered project names.
    pub fn all_projects(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }
}

fn glob_artifacts(name: &str, dir: &Path, patterns: &[String]) -> MgppResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        debug!(project = name, dir = %dir.display(), "project directory missing");
        return Ok(Vec::new());
    }
    let options = WalkOptions::for_artifacts();
    let mut files = Vec::new();
    for pattern in patterns {
        let mut matched =
            find_files(dir, pattern, &options).map_err(|e| ResolveError::ResolutionFailure {
                target: format!("project '{name}'"),
                message: e.to_string(),
            })?;
        matched.sort();
        for file in matched {
            if !files.contains(&file) {
                files.push(file);
            }
        }
    }
    Ok(files)
}

impl TaskHost for TaskRegistry {
    fn task_output(&self, name: &str) -> TaskLookup {
        match self.tasks.get(name) {
            None => TaskLookup::Missing,
            Some(None) => TaskLookup::NoOutput,
            Some(Some(outputs)) if outputs.is_empty() => TaskLookup::NoOutput,
            Some(Some(outputs)) => TaskLookup::Outputs(outputs.clone()),
        }
    }

    fn project_artifacts(&self, name: &str) -> MgppResult<Vec<PathBuf>> {
        let entry = self
            .projects
            .get(name)
            .ok_or_else(|| ResolveError::UnknownProject(name.to_string()))?;
        glob_artifacts(name, &entry.dir, &entry.patterns)
    }
}
