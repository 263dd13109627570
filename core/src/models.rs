//! Wire objects returned by the Asana API.
//!
//! Only the fields the reporter asks for via `opt_fields` are modeled;
//! everything else the API might send is ignored. All of these are
//! read-only snapshots: fetched once per run, never mutated.

use serde::Deserialize;

/// Top-level organizational grouping of projects.
#[derive(Debug, Clone, Deserialize)]
pub struct Workspace {
    pub gid: String,
    pub name: String,
}

/// The most recent status update posted on a project.
///
/// `color` is one of `green`, `yellow`, `red`, or `blue`; `title` is the
/// free-text label shown in Asana ("On track", "On hold", ...).
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectStatus {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// A named collection of tasks.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub gid: String,
    #[serde(default = "unnamed_project")]
    pub name: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub current_status: Option<ProjectStatus>,
}

fn unnamed_project() -> String {
    "Unnamed Project".to_string()
}

/// A task within a project. Only the completion flag is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub gid: String,
    #[serde(default)]
    pub completed: bool,
}

/// The authenticated user, returned by the connection check.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub gid: String,
    #[serde(default)]
    pub name: Option<String>,
}
