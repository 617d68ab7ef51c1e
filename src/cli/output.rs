use serde::Serialize;

use crate::model::project::Project;
use crate::view::{Stats, TaskRow};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskListJson {
    pub count: usize,
    pub tasks: Vec<TaskRow>,
    pub stats: Stats,
}

#[derive(Serialize)]
pub struct ProjectListJson {
    pub projects: Vec<ProjectJson>,
}

#[derive(Serialize)]
pub struct ProjectJson {
    pub id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
}

impl From<&Project> for ProjectJson {
    fn from(p: &Project) -> Self {
        ProjectJson {
            id: p.id.clone(),
            name: p.name.clone(),
            color: p.color.clone(),
            icon: p.icon.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// One task as a list line: checkbox, ID, title, then the metadata line.
pub fn print_task_row(row: &TaskRow) {
    let checkbox = if row.completed { "[x]" } else { "[ ]" };
    println!("{} {}  {}", checkbox, row.id, row.title);
    if !row.description.is_empty() {
        println!("      {}", row.description);
    }
    println!(
        "      {} | {} priority | {}",
        row.project.name,
        row.priority,
        row.due.text()
    );
}

/// The header/stats block: totals and completed share.
pub fn print_stats(stats: &Stats) {
    let noun = if stats.total == 1 { "task" } else { "tasks" };
    println!("{} {}", stats.total, noun);
    println!("  pending:   {}", stats.pending);
    println!("  completed: {}", stats.completed);
    println!("  {}% complete", stats.progress);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::default_projects;

    #[test]
    fn project_json_mirrors_the_model() {
        let projects = default_projects();
        let json = ProjectJson::from(&projects[2]);
        assert_eq!(json.id, "work");
        assert_eq!(json.name, "Work");
        assert_eq!(json.color, "#2196F3");
    }
}
