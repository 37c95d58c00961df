//! Key-value slot storage and the persisted list store built on top of it.
//!
//! # Responsibility
//! - Define the slot contract every module persists through.
//! - Provide SQLite-backed and in-memory slot implementations.
//! - Hydrate and write back whole module collections.
//!
//! # Invariants
//! - A slot always holds the complete serialized collection, never a delta.
//! - Reads fail soft; writes report errors to the caller.

mod kv;
mod memory;
mod persisted_list;
mod sqlite;

pub use kv::{KeyValueStore, StoreError, StoreResult};
pub use memory::{MemoryKeyValueStore, UnavailableKeyValueStore};
pub use persisted_list::{load_collection, save_collection, LoadOutcome, PersistedList};
pub use sqlite::SqliteKeyValueStore;

/// Slot key for the notes collection.
pub const NOTES_KEY: &str = "sahpathi-notes";
/// Slot key for the todo collection.
pub const TODOS_KEY: &str = "sahpathi-todos";
/// Slot key for the calendar collection.
pub const EVENTS_KEY: &str = "sahpathi-events";
/// Slot key for the diary collection.
pub const DIARY_KEY: &str = "sahpathi-diary";
/// Slot key for the chat history.
pub const CHAT_KEY: &str = "sahpathi-chat";
