//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `ticklist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use ticklist_core::{MemoryBackend, TaskStore};

fn main() {
    // In-memory backend keeps the probe side-effect free.
    let mut store = TaskStore::new(MemoryBackend::new());
    store.add("try ticklist");

    println!("ticklist_core version={}", ticklist_core::core_version());
    println!(
        "ticklist_core tasks={} remaining={}",
        store.len(),
        store.remaining_count()
    );
}
