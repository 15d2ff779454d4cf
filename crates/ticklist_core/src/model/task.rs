//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its stored-state invariants.
//! - Define the transient UI value types (filter, edit session) that are
//!   never serialized.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is never empty or whitespace-only once stored.
//! - `created_at` is set at creation and never changes.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// One user-visible todo entry.
///
/// Field names follow the persisted wire shape: `created_at` serializes as
/// `createdAt` so stored data stays readable under the `todos-v1` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID, generated once, immutable.
    pub id: TaskId,
    /// Trimmed, non-empty display text.
    pub text: String,
    /// Completion flag; starts `false`.
    pub done: bool,
    /// Creation time in unix epoch milliseconds, immutable.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Task {
    /// Creates a new task with a generated ID and the current timestamp.
    ///
    /// The caller is responsible for trimming `text` first; `validate()`
    /// enforces the non-empty invariant on stored records.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            done: false,
            created_at: now_epoch_ms(),
        }
    }

    /// Checks the invariants every stored task must satisfy.
    ///
    /// Used by persistence read paths to reject records that would put the
    /// store into a state its operations never produce.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(())
    }
}

/// Invariant violation found on a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    NilId,
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be the nil uuid"),
            Self::EmptyText => write!(f, "task text must not be empty or whitespace-only"),
        }
    }
}

impl Error for TaskValidationError {}

/// Which subset of tasks a view should show.
///
/// Transient UI state: intentionally carries no serde derives and is never
/// written through the persistence boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Done,
}

impl FilterMode {
    /// Returns whether `task` belongs in a view with this mode.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.done,
            Self::Done => task.done,
        }
    }
}

/// In-progress text edit of a single task.
///
/// At most one session exists at a time; committing or cancelling clears it.
/// Transient UI state, never serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Task being edited. Resolved again at commit time, so a task removed
    /// mid-edit degrades to a cancel rather than an error.
    pub target: TaskId,
    /// Draft text as typed, untrimmed until commit.
    pub draft: String,
}

/// Current time in unix epoch milliseconds.
///
/// Falls back to 0 for clocks before the epoch rather than panicking.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
