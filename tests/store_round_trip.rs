//! Round-trip tests for the persistent store: every mutation must survive a
//! full drop-and-reload through the directory-backed storage.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use taskflow::interact::AutoConfirm;
use taskflow::io::storage::DirStorage;
use taskflow::model::task::{Priority, Task};
use taskflow::ops::{project_ops, task_ops, transfer};
use taskflow::store::DataStore;

fn open(dir: &TempDir) -> DataStore<DirStorage> {
    DataStore::load(DirStorage::new(dir.path())).unwrap()
}

#[test]
fn first_load_seeds_and_second_load_reuses() {
    let dir = TempDir::new().unwrap();
    let first = open(&dir);
    assert_eq!(first.tasks.len(), 3);
    let seeded: Vec<String> = first.tasks.iter().map(|t| t.id.clone()).collect();
    drop(first);

    let second = open(&dir);
    let reloaded: Vec<String> = second.tasks.iter().map(|t| t.id.clone()).collect();
    assert_eq!(seeded, reloaded);
}

#[test]
fn upsert_survives_reload() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store.tasks.clear();
    store.flush_tasks().unwrap();

    let mut task = Task::new("t1".into(), "Persist me".into(), "work".into());
    task.due_date = NaiveDate::from_ymd_opt(2024, 8, 1);
    task.priority = Priority::High;
    task_ops::upsert_task(&mut store, task.clone()).unwrap();
    drop(store);

    let reloaded = open(&dir);
    assert_eq!(reloaded.tasks.len(), 1);
    assert_eq!(reloaded.tasks[0], task);
}

#[test]
fn toggle_and_delete_survive_reload() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store.tasks.clear();
    store.flush_tasks().unwrap();
    task_ops::upsert_task(&mut store, Task::new("a".into(), "One".into(), "work".into())).unwrap();
    task_ops::upsert_task(&mut store, Task::new("b".into(), "Two".into(), "work".into())).unwrap();

    task_ops::toggle_completed(&mut store, "a").unwrap();
    task_ops::delete_task(&mut store, "b", &mut AutoConfirm::yes()).unwrap();
    drop(store);

    let reloaded = open(&dir);
    assert_eq!(reloaded.tasks.len(), 1);
    assert_eq!(reloaded.tasks[0].id, "a");
    assert!(reloaded.tasks[0].completed);
}

#[test]
fn created_projects_survive_reload() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    project_ops::create_project(&mut store, "Deep Focus", "#FF5722".into(), "fa-folder".into())
        .unwrap();
    drop(store);

    let reloaded = open(&dir);
    let project = reloaded.find_project("deep-focus").unwrap();
    assert_eq!(project.name, "Deep Focus");
    assert_eq!(project.color, "#FF5722");
}

#[test]
fn export_import_reload_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    let original = store.tasks.clone();

    let exported = transfer::export_tasks(&store.tasks).unwrap();
    transfer::import_tasks(&mut store, &exported, &mut AutoConfirm::yes()).unwrap();
    drop(store);

    let reloaded = open(&dir);
    assert_eq!(reloaded.tasks, original);
}
