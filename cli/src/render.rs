//! Console rendering: the combined progress table and the summary block.
//!
//! All functions here build plain strings; color is applied by the caller
//! so the layout stays testable.

use taskpulse_core::progress::{ProgressSummary, ProjectProgress};

/// Glyph count of every progress bar.
pub const BAR_WIDTH: usize = 20;

/// Column width for project names.
const PROJECT_WIDTH: usize = 30;

/// Column width for workspace names.
const WORKSPACE_WIDTH: usize = 20;

/// Fixed-width bar: `█` for the filled portion, `░` for the rest.
pub fn render_bar(percentage: f64) -> String {
    let filled = ((BAR_WIDTH as f64 * percentage / 100.0) as usize).min(BAR_WIDTH);
    let mut bar = String::with_capacity(BAR_WIDTH * 3);
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..BAR_WIDTH {
        bar.push('░');
    }
    bar
}

/// Truncates to `width` characters, marking the cut with `...`.
fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// Pads or truncates to exactly `width` characters.
fn cell(value: &str, width: usize) -> String {
    format!("{:<width$}", truncate(value, width))
}

/// One table row: name, workspace, bar + percentage, task fraction, status.
fn render_row(project: &ProjectProgress) -> String {
    format!(
        "{}  {}  {} {:>6}  {:>9}  {}",
        cell(&project.name, PROJECT_WIDTH),
        cell(&project.workspace, WORKSPACE_WIDTH),
        render_bar(project.percentage()),
        format!("{:.1}%", project.percentage()),
        format!("{}/{}", project.completed_tasks, project.total_tasks),
        project.status.label(),
    )
}

/// The combined table for all projects across all workspaces. Rows are
/// rendered in the order given; the caller sorts.
pub fn render_table(projects: &[ProjectProgress]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}  {} {:>6}  {:>9}  {}\n",
        cell("Project", PROJECT_WIDTH),
        cell("Workspace", WORKSPACE_WIDTH),
        " ".repeat(BAR_WIDTH),
        "%",
        "Tasks",
        "Status",
    ));
    for project in projects {
        out.push_str(&render_row(project));
        out.push('\n');
    }
    out
}

/// Trailing summary block: project counts by status, task totals, overall
/// completion.
pub fn render_summary(summary: &ProgressSummary) -> String {
    let statuses = summary
        .by_status
        .iter()
        .map(|(status, count)| format!("{count} {}", status.label()))
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    out.push_str("Summary\n");
    if statuses.is_empty() {
        out.push_str(&format!("  Projects: {}\n", summary.total_projects));
    } else {
        out.push_str(&format!(
            "  Projects: {} ({statuses})\n",
            summary.total_projects
        ));
    }
    out.push_str(&format!(
        "  Tasks:    {}/{} completed\n",
        summary.completed_tasks, summary.total_tasks
    ));
    out.push_str(&format!(
        "  Overall:  {:.1}%\n",
        summary.overall_percentage()
    ));
    out
}
