use chrono::NaiveDate;
use serde_json::Value;

use crate::interact::Interaction;
use crate::io::storage::{Storage, StorageError};
use crate::model::task::Task;
use crate::store::DataStore;

/// Error type for import/export operations
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("invalid file format: expected a JSON array of tasks")]
    NotAnArray,
    #[error("no valid tasks found in the file")]
    NoValidTasks,
    #[error("could not parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result of an import operation
#[derive(Debug, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The collection was replaced with this many tasks
    Replaced(usize),
    /// The user declined the replacement
    Cancelled,
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Serialize the full task collection as a pretty-printed JSON array.
pub fn export_tasks(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tasks)
}

/// Default export filename, embedding the given date.
pub fn export_filename(today: NaiveDate) -> String {
    format!("taskflow-tasks-{}.json", today.format("%Y-%m-%d"))
}

// ---------------------------------------------------------------------------
// Import
// ---------------------------------------------------------------------------

/// Parse an import payload down to the records that pass the minimal task
/// shape: non-empty string `id`, non-empty string `title`, strictly boolean
/// `completed`. Records failing the shape (or full deserialization) are
/// silently dropped. Errors: the top-level value is not an array, or no
/// record survives.
pub fn parse_import(json_text: &str) -> Result<Vec<Task>, TransferError> {
    let value: Value = serde_json::from_str(json_text)?;
    let Value::Array(records) = value else {
        return Err(TransferError::NotAnArray);
    };

    let valid: Vec<Task> = records.into_iter().filter_map(validate_shape).collect();
    if valid.is_empty() {
        return Err(TransferError::NoValidTasks);
    }
    Ok(valid)
}

/// The minimal task shape, applied uniformly to every imported record.
fn validate_shape(record: Value) -> Option<Task> {
    let obj = record.as_object()?;
    let id_ok = matches!(obj.get("id"), Some(Value::String(s)) if !s.is_empty());
    let title_ok = matches!(obj.get("title"), Some(Value::String(s)) if !s.is_empty());
    let completed_ok = matches!(obj.get("completed"), Some(Value::Bool(_)));
    if !(id_ok && title_ok && completed_ok) {
        return None;
    }
    serde_json::from_value(record).ok()
}

/// Full import flow: parse, confirm the replacement with the user (the count
/// is disclosed up front), then wholesale replace the task collection and
/// flush. No mutation happens before the confirmation.
pub fn import_tasks<S: Storage>(
    store: &mut DataStore<S>,
    json_text: &str,
    interaction: &mut dyn Interaction,
) -> Result<ImportOutcome, TransferError> {
    let incoming = parse_import(json_text)?;

    let prompt = format!(
        "Import {} tasks? This will replace your current tasks.",
        incoming.len()
    );
    if !interaction.confirm(&prompt) {
        return Ok(ImportOutcome::Cancelled);
    }

    let count = incoming.len();
    store.tasks = incoming;
    store.flush_tasks()?;
    Ok(ImportOutcome::Replaced(count))
}
