//! Persistence boundary between the task store and durable storage.
//!
//! # Responsibility
//! - Define the backend contract the store writes through after mutations.
//! - Isolate serialization and SQLite details from store orchestration.
//!
//! # Invariants
//! - `load` never fails: absence or corruption degrades to an empty list.
//! - `save` failures are reported to the caller but never touch the
//!   in-memory list, which stays authoritative.
//! - Only tasks cross this boundary; filter and edit state never do.

use crate::db::DbError;
use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

/// Fixed namespace key for the serialized task list.
///
/// Schema changes bump the version suffix instead of silently breaking data
/// written by older builds.
pub const STORE_KEY: &str = "todos-v1";

pub type PersistResult<T> = Result<T, PersistError>;

/// Error raised while writing the task list to durable storage.
#[derive(Debug)]
pub enum PersistError {
    Db(DbError),
    Encode(serde_json::Error),
    /// Storage refused or could not accept the write (quota, disabled store).
    Unavailable(String),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode task list: {err}"),
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for PersistError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Backend contract for loading and saving the whole task list.
///
/// The store calls `save` with a fully consistent post-mutation snapshot,
/// never mid-mutation.
pub trait TaskBackend {
    /// Reads the persisted task list.
    ///
    /// Returns an empty list when nothing has been stored yet or when the
    /// stored bytes fail to parse or validate; corruption is logged and
    /// discarded rather than surfaced as a failure.
    fn load(&mut self) -> Vec<Task>;

    /// Overwrites the stored task list with `tasks`.
    fn save(&mut self, tasks: &[Task]) -> PersistResult<()>;
}

/// Decodes a serialized task array, enforcing stored-record invariants.
///
/// Shared by backends so "valid JSON, invalid task" is rejected the same way
/// everywhere: any bad record discards the whole payload.
fn decode_tasks(payload: &str) -> Option<Vec<Task>> {
    let tasks: Vec<Task> = match serde_json::from_str(payload) {
        Ok(tasks) => tasks,
        Err(err) => {
            log::warn!(
                "event=tasks_load module=persist status=corrupt error_code=parse_failed error={err}"
            );
            return None;
        }
    };

    let mut seen = std::collections::HashSet::new();
    for task in &tasks {
        if let Err(err) = task.validate() {
            log::warn!(
                "event=tasks_load module=persist status=corrupt error_code=invalid_record id={} error={err}",
                task.id
            );
            return None;
        }
        if !seen.insert(task.id) {
            log::warn!(
                "event=tasks_load module=persist status=corrupt error_code=duplicate_id id={}",
                task.id
            );
            return None;
        }
    }

    Some(tasks)
}

fn encode_tasks(tasks: &[Task]) -> PersistResult<String> {
    Ok(serde_json::to_string(tasks)?)
}
