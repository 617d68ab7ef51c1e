use crate::interact::Interaction;
use crate::io::storage::{Storage, StorageError};
use crate::model::project::ALL_PROJECT_ID;
use crate::model::task::Task;
use crate::store::DataStore;

/// Error type for task operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task title is required")]
    EmptyTitle,
    #[error("'{ALL_PROJECT_ID}' is the view-everything filter; tasks cannot belong to it")]
    ReservedProject,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

// ---------------------------------------------------------------------------
// Create / update
// ---------------------------------------------------------------------------

/// Insert a task, or replace the stored task carrying the same ID.
///
/// The title must be non-empty after trimming and the project must not be
/// the reserved `all` filter; validation failures leave the collection
/// untouched. On replacement the stored task's `created_at` wins, so edits
/// can never move a task's creation time.
pub fn upsert_task<S: Storage>(store: &mut DataStore<S>, task: Task) -> Result<(), TaskError> {
    let mut task = task;
    task.title = task.title.trim().to_string();
    task.description = task.description.trim().to_string();

    if task.title.is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    if task.project == ALL_PROJECT_ID {
        return Err(TaskError::ReservedProject);
    }

    match store.tasks.iter_mut().find(|t| t.id == task.id) {
        Some(existing) => {
            task.created_at = existing.created_at.clone();
            *existing = task;
        }
        None => store.tasks.push(task),
    }
    store.flush_tasks()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Toggle / delete / clear
// ---------------------------------------------------------------------------

/// Flip a task's completion state. An unknown ID is a silent no-op (nothing
/// is flushed), preserving the behavior users see after a stale double-click.
pub fn toggle_completed<S: Storage>(
    store: &mut DataStore<S>,
    task_id: &str,
) -> Result<(), TaskError> {
    if let Some(task) = store.find_task_mut(task_id) {
        task.completed = !task.completed;
        store.flush_tasks()?;
    }
    Ok(())
}

/// Delete a task after confirmation. Returns whether a task was removed.
pub fn delete_task<S: Storage>(
    store: &mut DataStore<S>,
    task_id: &str,
    interaction: &mut dyn Interaction,
) -> Result<bool, TaskError> {
    if !interaction.confirm("Are you sure you want to delete this task?") {
        return Ok(false);
    }
    let before = store.tasks.len();
    store.tasks.retain(|t| t.id != task_id);
    let removed = store.tasks.len() != before;
    if removed {
        store.flush_tasks()?;
    }
    Ok(removed)
}

/// Delete all completed tasks after confirmation. Returns how many were
/// removed (zero also means the user declined).
pub fn clear_completed<S: Storage>(
    store: &mut DataStore<S>,
    interaction: &mut dyn Interaction,
) -> Result<usize, TaskError> {
    if !interaction.confirm("Are you sure you want to delete all completed tasks?") {
        return Ok(0);
    }
    let before = store.tasks.len();
    store.tasks.retain(|t| !t.completed);
    let removed = before - store.tasks.len();
    store.flush_tasks()?;
    Ok(removed)
}
