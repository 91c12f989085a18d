//! Storage layer for outlay
//!
//! A string-keyed, string-valued store (JSON file on disk, an in-memory map
//! in tests) plus the hydrate/persist functions that move the budget state
//! in and out of it.

pub mod file_io;
pub mod kv;
pub mod persist;

pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
pub use persist::{hydrate_state, persist_state, StateObserver, StatePersister};
