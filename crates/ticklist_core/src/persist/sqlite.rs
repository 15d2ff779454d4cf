//! SQLite-backed task list storage.
//!
//! # Responsibility
//! - Keep the serialized task list as the single `todos-v1` row in
//!   `kv_store`.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - The connection has been bootstrapped via `db::open_db*` before use.
//! - A load that finds corrupt bytes returns an empty list, never an error.

use super::{decode_tasks, encode_tasks, PersistResult, TaskBackend, STORE_KEY};
use crate::model::task::Task;
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension};

/// Task backend storing the serialized list under a fixed key in SQLite.
pub struct SqliteBackend {
    conn: Connection,
    key: &'static str,
}

impl SqliteBackend {
    /// Wraps a bootstrapped connection using the default `todos-v1` key.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn,
            key: STORE_KEY,
        }
    }

    fn read_payload(&self) -> rusqlite::Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [self.key],
                |row| row.get(0),
            )
            .optional()
    }
}

impl TaskBackend for SqliteBackend {
    fn load(&mut self) -> Vec<Task> {
        let payload = match self.read_payload() {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                info!("event=tasks_load module=persist status=ok source=sqlite count=0 reason=absent");
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=tasks_load module=persist status=error source=sqlite error_code=read_failed error={err}"
                );
                return Vec::new();
            }
        };

        let tasks = decode_tasks(&payload).unwrap_or_default();
        info!(
            "event=tasks_load module=persist status=ok source=sqlite count={}",
            tasks.len()
        );
        tasks
    }

    fn save(&mut self, tasks: &[Task]) -> PersistResult<()> {
        let payload = encode_tasks(tasks)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![self.key, payload],
        )?;
        Ok(())
    }
}
