//! Core domain logic for Sahpathi.
//! This crate is the single source of truth for module state and its persistence.

pub mod assistant;
pub mod catalog;
pub mod context;
pub mod db;
pub mod logging;
pub mod model;
pub mod platform;
pub mod service;
pub mod settings;
pub mod store;
pub mod view;

pub use context::AppContext;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::chat::{ChatMessage, Sender};
pub use model::diary::{DiaryDraft, DiaryEntry, Mood};
pub use model::event::{CalendarEvent, EventDraft, EventKind};
pub use model::id::RecordId;
pub use model::note::{Note, NoteDraft, Subject};
pub use model::place::{Place, PlaceCategory};
pub use model::todo::{Priority, TodoDraft, TodoItem};
pub use model::validation::ValidationError;
pub use service::calendar_service::CalendarService;
pub use service::chat_service::{ChatService, PendingReply};
pub use service::diary_service::DiaryService;
pub use service::note_service::NoteService;
pub use service::places_service::PlacesService;
pub use service::todo_service::TodoService;
pub use service::{ServiceError, ServiceResult};
pub use settings::AccessibilitySettings;
pub use store::{
    KeyValueStore, LoadOutcome, MemoryKeyValueStore, SqliteKeyValueStore, StoreError,
    StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
