//! Translation store providers.

/// In-memory store for tests and throwaway corpora.
pub mod memory;

/// Durable `SQLite`-backed store.
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
