use crate::io::storage::{Storage, StorageError};
use crate::model::project::{derive_project_id, Project};
use crate::store::DataStore;

/// Error type for project operations
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("project name is required")]
    EmptyName,
    #[error("a project with this name already exists: {0}")]
    Duplicate(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Create a user-defined project.
///
/// The ID is derived from the trimmed name; a derived-ID collision (with a
/// built-in or an earlier user project) is rejected and leaves the collection
/// unchanged. Only the project collection is flushed — tasks are untouched.
pub fn create_project<S: Storage>(
    store: &mut DataStore<S>,
    name: &str,
    color: String,
    icon: String,
) -> Result<Project, ProjectError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ProjectError::EmptyName);
    }

    let id = derive_project_id(name);
    if store.projects.iter().any(|p| p.id == id) {
        return Err(ProjectError::Duplicate(id));
    }

    let project = Project {
        id,
        name: name.to_string(),
        color,
        icon,
    };
    store.projects.push(project.clone());
    store.flush_projects()?;
    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::storage::MemStorage;
    use crate::store::PROJECTS_KEY;

    fn store() -> DataStore<MemStorage> {
        DataStore::load(MemStorage::new()).unwrap()
    }

    #[test]
    fn create_derives_id_from_name() {
        let mut store = store();
        let project =
            create_project(&mut store, "Home Stuff", "#FF5722".into(), "fa-folder".into())
                .unwrap();
        assert_eq!(project.id, "home-stuff");
        assert!(store.find_project("home-stuff").is_some());
    }

    #[test]
    fn duplicate_name_is_rejected_and_collection_unchanged() {
        let mut store = store();
        create_project(&mut store, "Home Stuff", "#FF5722".into(), "fa-folder".into()).unwrap();
        let before = store.projects.clone();

        let err = create_project(&mut store, "Home Stuff", "#000".into(), "fa-folder".into())
            .unwrap_err();
        assert!(matches!(err, ProjectError::Duplicate(id) if id == "home-stuff"));
        assert_eq!(store.projects, before);
    }

    #[test]
    fn collision_with_builtin_project_is_rejected() {
        let mut store = store();
        let err =
            create_project(&mut store, "Work", "#000".into(), "fa-folder".into()).unwrap_err();
        assert!(matches!(err, ProjectError::Duplicate(_)));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut store = store();
        let err = create_project(&mut store, "   ", "#000".into(), "fa-folder".into()).unwrap_err();
        assert!(matches!(err, ProjectError::EmptyName));
    }

    #[test]
    fn create_flushes_projects_to_storage() {
        let mut store = store();
        create_project(&mut store, "Garden", "#8BC34A".into(), "fa-folder".into()).unwrap();
        let persisted = store.storage().get(PROJECTS_KEY).unwrap();
        assert_eq!(persisted.as_array().unwrap().len(), 5);
    }
}
