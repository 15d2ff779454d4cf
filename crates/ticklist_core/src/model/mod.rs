//! Domain model for the todo-list core.
//!
//! # Responsibility
//! - Define canonical data structures used by store and persistence layers.
//! - Keep persisted records and transient UI state as distinct types.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - `FilterMode` and `EditSession` are never serialized.

pub mod task;
