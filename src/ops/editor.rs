use chrono::NaiveDate;

use crate::io::storage::Storage;
use crate::model::config::DefaultsConfig;
use crate::model::task::{Priority, Task};
use crate::ops::task_ops::{upsert_task, TaskError};
use crate::store::DataStore;
use crate::util::id::generate_id;

/// Whether the editor was opened to create a task or to edit an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    /// Preserves the identity of the task being edited
    Edit { id: String, created_at: String },
}

/// A task draft under edit.
///
/// This is the modal dialog's state machine with the presentation stripped
/// off: opening prefills the fields (defaults for create, the stored task for
/// edit), submitting validates and upserts. Ownership guarantees at most one
/// draft exists per command invocation, and dropping it is "cancel".
#[derive(Debug, Clone)]
pub struct TaskEditor {
    pub mode: EditorMode,
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub project: String,
    pub completed: bool,
}

impl TaskEditor {
    /// Open for a new task: due today, configured default project/priority.
    pub fn create(today: NaiveDate, defaults: &DefaultsConfig) -> Self {
        TaskEditor {
            mode: EditorMode::Create,
            title: String::new(),
            description: String::new(),
            due_date: Some(today),
            priority: defaults.priority,
            project: defaults.project.clone(),
            completed: false,
        }
    }

    /// Open for an existing task, prefilled from its current fields.
    pub fn edit(task: &Task) -> Self {
        TaskEditor {
            mode: EditorMode::Edit {
                id: task.id.clone(),
                created_at: task.created_at.clone(),
            },
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
            priority: task.priority,
            project: task.project.clone(),
            completed: task.completed,
        }
    }

    /// Validate and upsert the draft. Create assigns a fresh ID; edit keeps
    /// the original ID and creation timestamp. Returns the stored task.
    pub fn submit<S: Storage>(&self, store: &mut DataStore<S>) -> Result<Task, TaskError> {
        let (id, created_at) = match &self.mode {
            EditorMode::Create => (generate_id(), None),
            EditorMode::Edit { id, created_at } => (id.clone(), Some(created_at.clone())),
        };

        let mut task = Task::new(id, self.title.clone(), self.project.clone());
        task.description = self.description.clone();
        task.due_date = self.due_date;
        task.priority = self.priority;
        task.completed = self.completed;
        if let Some(created_at) = created_at {
            task.created_at = created_at;
        }

        upsert_task(store, task.clone())?;
        // upsert trims; report the task as stored
        task.title = task.title.trim().to_string();
        task.description = task.description.trim().to_string();
        Ok(task)
    }
}
