//! Store layer: use-case entry points over the task list.
//!
//! # Responsibility
//! - Orchestrate model mutations and persistence into caller-facing APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod task_store;
