//! Completion math and aggregate statistics.

use std::collections::BTreeMap;

use crate::models::Project;

/// Completion percentage, rounded to one decimal place.
///
/// An empty project (zero tasks) is 0%, not a division error.
pub fn completion_percentage(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = completed as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Status bucket a project falls into for the report.
///
/// Derivation precedence: archived wins over completed, completed wins
/// over any posted status, and the posted status color maps onto Asana's
/// fixed palette. A live project with no posted status is `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusCategory {
    OnTrack,
    AtRisk,
    OffTrack,
    OnHold,
    Active,
    Done,
    Archived,
}

impl StatusCategory {
    pub fn from_project(project: &Project) -> Self {
        if project.archived {
            return Self::Archived;
        }
        if project.completed {
            return Self::Done;
        }
        let color = project
            .current_status
            .as_ref()
            .and_then(|status| status.color.as_deref());
        match color {
            Some("green") => Self::OnTrack,
            Some("yellow") => Self::AtRisk,
            Some("red") => Self::OffTrack,
            Some("blue") => Self::OnHold,
            _ => Self::Active,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::OnTrack => "On track",
            Self::AtRisk => "At risk",
            Self::OffTrack => "Off track",
            Self::OnHold => "On hold",
            Self::Active => "Active",
            Self::Done => "Done",
            Self::Archived => "Archived",
        }
    }
}

/// Per-project progress snapshot, derived from one task listing.
#[derive(Debug, Clone)]
pub struct ProjectProgress {
    pub name: String,
    pub workspace: String,
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub status: StatusCategory,
}

impl ProjectProgress {
    pub fn percentage(&self) -> f64 {
        completion_percentage(self.completed_tasks, self.total_tasks)
    }
}

/// Aggregate statistics across every listed project.
#[derive(Debug, Clone)]
pub struct ProgressSummary {
    pub total_projects: usize,
    /// Project count per status category; categories with zero projects
    /// are absent.
    pub by_status: BTreeMap<StatusCategory, usize>,
    pub completed_tasks: usize,
    pub total_tasks: usize,
}

impl ProgressSummary {
    pub fn from_projects(projects: &[ProjectProgress]) -> Self {
        let mut by_status = BTreeMap::new();
        let mut completed_tasks = 0;
        let mut total_tasks = 0;

        for project in projects {
            *by_status.entry(project.status).or_insert(0) += 1;
            completed_tasks += project.completed_tasks;
            total_tasks += project.total_tasks;
        }

        Self {
            total_projects: projects.len(),
            by_status,
            completed_tasks,
            total_tasks,
        }
    }

    /// Overall completion across all tasks in all projects.
    pub fn overall_percentage(&self) -> f64 {
        completion_percentage(self.completed_tasks, self.total_tasks)
    }
}

/// Orders projects for display: highest completion first, name as the
/// tie-breaker so output is stable.
pub fn sort_for_display(projects: &mut [ProjectProgress]) {
    projects.sort_by(|a, b| {
        b.percentage()
            .partial_cmp(&a.percentage())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
}
