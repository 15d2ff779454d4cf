//! In-process task list storage.
//!
//! # Responsibility
//! - Provide the storage-unavailable degradation path: a store wired to this
//!   backend behaves identically, it just forgets on process exit.
//! - Serve as the substitutable fake for store tests, including injected
//!   corruption and forced write failure.

use super::{decode_tasks, encode_tasks, PersistError, PersistResult, TaskBackend};
use crate::model::task::Task;

/// Task backend holding the serialized payload in memory.
///
/// Keeps the same string representation the SQLite backend stores, so the
/// serialize/validate path is exercised rather than bypassed.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    payload: Option<String>,
    fail_writes: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the backend with raw stored bytes, valid or not.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
            fail_writes: false,
        }
    }

    /// Makes every subsequent `save` fail, emulating quota exhaustion.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Returns the raw stored payload, if any.
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

impl TaskBackend for MemoryBackend {
    fn load(&mut self) -> Vec<Task> {
        match &self.payload {
            Some(payload) => decode_tasks(payload).unwrap_or_default(),
            None => Vec::new(),
        }
    }

    fn save(&mut self, tasks: &[Task]) -> PersistResult<()> {
        if self.fail_writes {
            return Err(PersistError::Unavailable(
                "memory backend configured to fail writes".to_string(),
            ));
        }

        self.payload = Some(encode_tasks(tasks)?);
        Ok(())
    }
}
