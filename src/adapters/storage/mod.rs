//! Storage adapters - the in-memory session map and its idle sweeper.

mod in_memory;
mod sweeper;

pub use in_memory::InMemorySessionStore;
pub use sweeper::{spawn_sweeper, SWEEP_INTERVAL};
