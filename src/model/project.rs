use serde::{Deserialize, Serialize};

/// ID of the synthetic "all tasks" filter. It appears in the project list but
/// is never a valid value for `Task::project`.
pub const ALL_PROJECT_ID: &str = "all";

/// A named, colored grouping tag for tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique ID, derived from the name for user-created projects
    pub id: String,
    /// Display name
    pub name: String,
    /// Hex color for the project swatch
    pub color: String,
    /// Symbolic icon name
    pub icon: String,
}

/// The four projects present on first run. `all` is a pseudo-filter that
/// matches every task; the other three are real containers.
pub fn default_projects() -> Vec<Project> {
    vec![
        Project {
            id: ALL_PROJECT_ID.to_string(),
            name: "All Tasks".to_string(),
            color: "#1976d2".to_string(),
            icon: "fa-list".to_string(),
        },
        Project {
            id: "personal".to_string(),
            name: "Personal".to_string(),
            color: "#4CAF50".to_string(),
            icon: "fa-user".to_string(),
        },
        Project {
            id: "work".to_string(),
            name: "Work".to_string(),
            color: "#2196F3".to_string(),
            icon: "fa-briefcase".to_string(),
        },
        Project {
            id: "shopping".to_string(),
            name: "Shopping".to_string(),
            color: "#9C27B0".to_string(),
            icon: "fa-shopping-cart".to_string(),
        },
    ]
}

/// Derive a project ID from its display name: lowercased, with whitespace
/// runs collapsed to a single hyphen.
pub fn derive_project_id(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_id_lowercases_and_hyphenates() {
        assert_eq!(derive_project_id("Home Stuff"), "home-stuff");
        assert_eq!(derive_project_id("Work"), "work");
        assert_eq!(derive_project_id("  Deep   Focus  "), "deep-focus");
    }

    #[test]
    fn default_projects_start_with_all() {
        let projects = default_projects();
        assert_eq!(projects.len(), 4);
        assert_eq!(projects[0].id, ALL_PROJECT_ID);
        let ids: Vec<_> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["all", "personal", "work", "shopping"]);
    }
}
