use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::model::project::Project;
use crate::model::task::Task;

/// Fallback swatch color for tasks pointing at a project that no longer
/// exists
const FALLBACK_COLOR: &str = "#777";

/// How a due date reads relative to the viewer's current date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "date", rename_all = "lowercase")]
pub enum DueLabel {
    None,
    Today,
    Tomorrow,
    /// Formatted date, past due and not completed
    Overdue(String),
    /// Formatted date with no special status
    Date(String),
}

impl DueLabel {
    /// Human-readable text for list output
    pub fn text(&self) -> String {
        match self {
            DueLabel::None => "No due date".to_string(),
            DueLabel::Today => "Today".to_string(),
            DueLabel::Tomorrow => "Tomorrow".to_string(),
            DueLabel::Overdue(d) => format!("{} (Overdue)", d),
            DueLabel::Date(d) => d.clone(),
        }
    }
}

/// Classify a task's due date against `today`. Completed tasks are never
/// overdue.
pub fn due_label(due: Option<NaiveDate>, completed: bool, today: NaiveDate) -> DueLabel {
    let Some(due) = due else {
        return DueLabel::None;
    };
    if due == today {
        return DueLabel::Today;
    }
    if due == today + Duration::days(1) {
        return DueLabel::Tomorrow;
    }
    let formatted = due.format("%a, %b %-d").to_string();
    if due < today && !completed {
        DueLabel::Overdue(formatted)
    } else {
        DueLabel::Date(formatted)
    }
}

/// Project name and color resolved for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectBadge {
    pub name: String,
    pub color: String,
}

/// Resolve a task's project reference, degrading gracefully when it dangles:
/// the raw ID becomes the display name and the swatch goes neutral.
pub fn project_badge(project_id: &str, projects: &[Project]) -> ProjectBadge {
    match projects.iter().find(|p| p.id == project_id) {
        Some(p) => ProjectBadge {
            name: p.name.clone(),
            color: p.color.clone(),
        },
        None => ProjectBadge {
            name: project_id.to_string(),
            color: FALLBACK_COLOR.to_string(),
        },
    }
}

/// One displayable row of the task list
#[derive(Debug, Clone, Serialize)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: String,
    pub project: ProjectBadge,
    pub due: DueLabel,
}

/// Project visible tasks into display rows.
pub fn task_rows(visible: &[&Task], projects: &[Project], today: NaiveDate) -> Vec<TaskRow> {
    visible
        .iter()
        .map(|t| TaskRow {
            id: t.id.clone(),
            title: t.title.clone(),
            description: t.description.clone(),
            completed: t.completed,
            priority: t.priority.label().to_string(),
            project: project_badge(&t.project, projects),
            due: due_label(t.due_date, t.completed, today),
        })
        .collect()
}

/// Collection-wide totals shown in the header/stats block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    /// Completed share of all tasks, rounded to the nearest percent
    pub progress: u32,
}

pub fn stats(tasks: &[Task]) -> Stats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let progress = if total > 0 {
        ((completed as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };
    Stats {
        total,
        pending: total - completed,
        completed,
        progress,
    }
}
