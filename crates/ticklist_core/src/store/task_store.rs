//! Task store: the single owner of todo-list state.
//!
//! # Responsibility
//! - Hold the authoritative ordered task list plus transient filter and
//!   edit-session state.
//! - Run every mutation to completion synchronously, then hand the backend a
//!   consistent snapshot.
//!
//! # Invariants
//! - New tasks are prepended; relative order of surviving tasks is never
//!   reshuffled by any operation.
//! - Stored task text is never empty or whitespace-only.
//! - The backend only ever sees a fully applied post-mutation list.
//! - A failed save never rolls back in-memory state.

use crate::model::task::{EditSession, FilterMode, Task, TaskId};
use crate::persist::{PersistError, TaskBackend};
use log::{info, warn};

/// Outcome of an id-addressed mutation.
///
/// `NotFound` is a benign no-op, not an error: the caller's view of the list
/// may lag the store by one UI tick (e.g. deleted-then-toggled).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Applied,
    NotFound,
}

/// Outcome of committing an edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// Draft was non-empty and the target task's text was replaced.
    Committed,
    /// Empty draft or vanished target; session cleared, no task touched.
    Cancelled,
    /// No session was active.
    NoSession,
}

/// The todo-list state model with an injected persistence backend.
///
/// One instance per process; constructed once at startup via [`TaskStore::new`],
/// which restores whatever the backend has persisted.
pub struct TaskStore<B: TaskBackend> {
    tasks: Vec<Task>,
    filter: FilterMode,
    edit: Option<EditSession>,
    backend: B,
    last_save_error: Option<PersistError>,
}

impl<B: TaskBackend> TaskStore<B> {
    /// Creates a store backed by `backend`, restoring the persisted list.
    pub fn new(mut backend: B) -> Self {
        let tasks = backend.load();
        info!(
            "event=store_init module=store status=ok restored={}",
            tasks.len()
        );
        Self {
            tasks,
            filter: FilterMode::default(),
            edit: None,
            backend,
            last_save_error: None,
        }
    }

    /// Adds a task from raw user input.
    ///
    /// Trims first; empty or whitespace-only input is a no-op returning
    /// `None`. Otherwise the new task is prepended (most-recent-first) and a
    /// clone of it is returned.
    pub fn add(&mut self, raw_text: &str) -> Option<Task> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }

        let task = Task::new(text);
        self.tasks.insert(0, task.clone());
        self.persist();
        Some(task)
    }

    /// Flips the `done` flag of the task with `id`.
    pub fn toggle(&mut self, id: TaskId) -> Mutation {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.done = !task.done;
                self.persist();
                Mutation::Applied
            }
            None => Mutation::NotFound,
        }
    }

    /// Deletes the task with `id`. Idempotent.
    pub fn remove(&mut self, id: TaskId) -> Mutation {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Mutation::NotFound;
        }
        self.persist();
        Mutation::Applied
    }

    /// Starts editing the task with `id`, seeding the draft with its text.
    ///
    /// An unknown id leaves any existing session untouched.
    pub fn begin_edit(&mut self, id: TaskId) -> Mutation {
        match self.tasks.iter().find(|task| task.id == id) {
            Some(task) => {
                self.edit = Some(EditSession {
                    target: id,
                    draft: task.text.clone(),
                });
                Mutation::Applied
            }
            None => Mutation::NotFound,
        }
    }

    /// Replaces the active session's draft text.
    pub fn update_draft(&mut self, text: &str) -> Mutation {
        match &mut self.edit {
            Some(session) => {
                session.draft = text.to_string();
                Mutation::Applied
            }
            None => Mutation::NotFound,
        }
    }

    /// Commits the active edit session.
    ///
    /// An empty trimmed draft behaves exactly like [`cancel_edit`]: the
    /// session is cleared and the target task keeps its text. The target is
    /// resolved again here, so a task removed mid-edit also degrades to a
    /// cancel.
    ///
    /// [`cancel_edit`]: TaskStore::cancel_edit
    pub fn commit_edit(&mut self) -> Commit {
        let Some(session) = self.edit.take() else {
            return Commit::NoSession;
        };

        let text = session.draft.trim();
        if text.is_empty() {
            return Commit::Cancelled;
        }

        match self.tasks.iter_mut().find(|task| task.id == session.target) {
            Some(task) => {
                task.text = text.to_string();
                self.persist();
                Commit::Committed
            }
            None => Commit::Cancelled,
        }
    }

    /// Clears the active edit session without touching any task.
    pub fn cancel_edit(&mut self) -> Mutation {
        match self.edit.take() {
            Some(_) => Mutation::Applied,
            None => Mutation::NotFound,
        }
    }

    /// Removes every completed task, preserving the order of the rest.
    ///
    /// Returns the number of removed tasks; saves only when that is nonzero.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.done);
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.persist();
        }
        removed
    }

    /// Sets every task's `done` flag to the inverse of "all are done".
    ///
    /// An empty list is a guaranteed no-op; the vacuous all-done reading is
    /// deliberately not applied. Returns the number of tasks touched.
    pub fn toggle_all(&mut self) -> usize {
        if self.tasks.is_empty() {
            return 0;
        }

        let target = !self.tasks.iter().all(|task| task.done);
        for task in &mut self.tasks {
            task.done = target;
        }
        self.persist();
        self.tasks.len()
    }

    /// Returns the tasks matching `mode`, in list order, as of call time.
    pub fn view(&self, mode: FilterMode) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| mode.matches(task))
            .collect()
    }

    /// Returns the view for the currently selected filter.
    pub fn visible(&self) -> Vec<&Task> {
        self.view(self.filter)
    }

    /// Count of not-yet-done tasks.
    pub fn remaining_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.done).count()
    }

    /// Selects the filter for [`visible`]. Transient; never persisted.
    ///
    /// [`visible`]: TaskStore::visible
    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Full list in authoritative order, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Error from the most recent save attempt, if it failed.
    ///
    /// A successful save clears it. The in-memory list is authoritative
    /// either way.
    pub fn last_save_error(&self) -> Option<&PersistError> {
        self.last_save_error.as_ref()
    }

    /// Takes and clears the most recent save error.
    pub fn take_save_error(&mut self) -> Option<PersistError> {
        self.last_save_error.take()
    }

    /// Consumes the store, returning its backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    // Called only after a mutation has fully completed, so the backend
    // always sees a consistent snapshot.
    fn persist(&mut self) {
        match self.backend.save(&self.tasks) {
            Ok(()) => {
                self.last_save_error = None;
            }
            Err(err) => {
                warn!(
                    "event=tasks_save module=store status=error count={} error={err}",
                    self.tasks.len()
                );
                self.last_save_error = Some(err);
            }
        }
    }
}
