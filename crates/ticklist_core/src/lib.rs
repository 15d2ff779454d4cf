//! Core domain logic for the ticklist todo widget.
//! This crate is the single source of truth for list-state invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod persist;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{EditSession, FilterMode, Task, TaskId, TaskValidationError};
pub use persist::{MemoryBackend, PersistError, SqliteBackend, TaskBackend, STORE_KEY};
pub use store::task_store::{Commit, Mutation, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
