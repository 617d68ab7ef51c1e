use chrono::{Duration, Local, NaiveDate};

use crate::io::storage::{Storage, StorageError};
use crate::model::project::{default_projects, Project};
use crate::model::task::Task;
use crate::util::id::generate_id;

/// Storage key for the task collection
pub const TASKS_KEY: &str = "tasks";
/// Storage key for the project collection
pub const PROJECTS_KEY: &str = "projects";

/// The authoritative in-memory state: every command reads and mutates these
/// collections, and every mutation is flushed back to storage in full before
/// the command reports success.
#[derive(Debug)]
pub struct DataStore<S: Storage> {
    storage: S,
    pub tasks: Vec<Task>,
    pub projects: Vec<Project>,
}

impl<S: Storage> DataStore<S> {
    /// Load both collections from storage.
    ///
    /// An absent or unreadable key falls back to the empty/default value.
    /// If the task collection comes back empty, it is seeded with the three
    /// sample tasks and persisted immediately. The project collection is
    /// re-persisted unconditionally so storage always reflects at least the
    /// built-in defaults.
    pub fn load(storage: S) -> Result<Self, StorageError> {
        let tasks: Vec<Task> = storage
            .get(TASKS_KEY)
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default();

        let projects: Vec<Project> = storage
            .get(PROJECTS_KEY)
            .and_then(|v| serde_json::from_value(v).ok())
            .filter(|p: &Vec<Project>| !p.is_empty())
            .unwrap_or_else(default_projects);

        let mut store = DataStore {
            storage,
            tasks,
            projects,
        };

        if store.tasks.is_empty() {
            store.tasks = seed_tasks(Local::now().date_naive());
            store.flush_tasks()?;
        }
        store.flush_projects()?;

        Ok(store)
    }

    /// Re-serialize the full task collection to storage.
    pub fn flush_tasks(&mut self) -> Result<(), StorageError> {
        let value = serde_json::to_value(&self.tasks).map_err(|e| {
            StorageError::SerializeError {
                key: TASKS_KEY.to_string(),
                source: e,
            }
        })?;
        self.storage.set(TASKS_KEY, &value)
    }

    /// Re-serialize the full project collection to storage.
    pub fn flush_projects(&mut self) -> Result<(), StorageError> {
        let value = serde_json::to_value(&self.projects).map_err(|e| {
            StorageError::SerializeError {
                key: PROJECTS_KEY.to_string(),
                source: e,
            }
        })?;
        self.storage.set(PROJECTS_KEY, &value)
    }

    /// Read-only access to the underlying storage (tests peek at what was
    /// actually persisted).
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn find_task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

/// The three sample tasks created on first run.
pub fn seed_tasks(today: NaiveDate) -> Vec<Task> {
    let mut welcome = Task::new(
        generate_id(),
        "Welcome to TaskFlow!".to_string(),
        "personal".to_string(),
    );
    welcome.description = "This is a sample task. You can edit, complete, or delete it.".to_string();
    welcome.due_date = Some(today);

    let mut portfolio = Task::new(
        generate_id(),
        "Complete portfolio website".to_string(),
        "work".to_string(),
    );
    portfolio.description = "Add the task management app to my portfolio".to_string();
    portfolio.due_date = Some(today + Duration::days(7));
    portfolio.priority = crate::model::task::Priority::High;

    let mut groceries = Task::new(
        generate_id(),
        "Buy groceries".to_string(),
        "shopping".to_string(),
    );
    groceries.description = "Milk, eggs, bread, fruits".to_string();
    groceries.due_date = Some(today + Duration::days(1));
    groceries.completed = true;

    vec![welcome, portfolio, groceries]
}
