//! The fetch pass: workspaces, their projects, each project's tasks.
//!
//! Strictly sequential; one run is a single chain of requests that either
//! completes or stops at the first error.

use crate::client::{ApiResult, AsanaClient};
use crate::progress::{ProgressSummary, ProjectProgress, StatusCategory, sort_for_display};

/// Everything a render pass needs: per-project rows (already sorted for
/// display) plus the aggregate summary.
#[derive(Debug, Clone)]
pub struct Report {
    pub projects: Vec<ProjectProgress>,
    pub summary: ProgressSummary,
}

/// Walks every workspace and project visible to the credential and counts
/// completed vs total tasks for each project.
pub async fn collect_report(client: &AsanaClient) -> ApiResult<Report> {
    let workspaces = client.workspaces().await?;
    tracing::info!("found {} workspace(s)", workspaces.len());

    let mut rows = Vec::new();
    for workspace in &workspaces {
        tracing::info!("scanning workspace: {}", workspace.name);
        let projects = client.projects(&workspace.gid).await?;

        for project in projects {
            let tasks = client.tasks(&project.gid).await?;
            let total_tasks = tasks.len();
            let completed_tasks = tasks.iter().filter(|task| task.completed).count();
            let status = StatusCategory::from_project(&project);

            rows.push(ProjectProgress {
                name: project.name,
                workspace: workspace.name.clone(),
                completed_tasks,
                total_tasks,
                status,
            });
        }
    }
    tracing::info!("found {} project(s)", rows.len());

    sort_for_display(&mut rows);
    let summary = ProgressSummary::from_projects(&rows);
    Ok(Report {
        projects: rows,
        summary,
    })
}
