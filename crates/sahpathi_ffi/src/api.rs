//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose one sync function per module use case to Dart via FRB.
//! - Hydrate the relevant module from the local database on every call.
//! - Return the phrase the host should speak alongside every action result.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Record ids cross the boundary as hyphenated uuid strings.
//! - Every failure is reported through an envelope `message`, never thrown.

use chrono::NaiveDate;
use log::warn;
use rusqlite::Connection;
use sahpathi_core::assistant::responses::QUICK_PROMPTS;
use sahpathi_core::db::open_db;
use sahpathi_core::model::event::EVENT_DATE_FORMAT;
use sahpathi_core::platform::RecordingNarrator;
use sahpathi_core::view::notes::{NoteQuery, SubjectFilter};
use sahpathi_core::view::places::{CategoryFilter, PlaceFilter};
use sahpathi_core::view::todos::StatusFilter;
use sahpathi_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AccessibilitySettings, AppContext, CalendarService, ChatService, DiaryDraft, DiaryService,
    EventDraft, EventKind, Mood, NoteDraft, NoteService, Priority, RecordId, ServiceError,
    SqliteKeyValueStore, Subject, TodoDraft, TodoService,
};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::{Mutex, MutexGuard, OnceLock};
use uuid::Uuid;

const DB_FILE_NAME: &str = "sahpathi.sqlite3";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();
// Each call hydrates, mutates and writes back a whole slot; calls must not interleave.
static DB_LOCK: Mutex<()> = Mutex::new(());

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Result envelope for every mutating call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the action was applied and persisted.
    pub ok: bool,
    /// Id of the created or affected record, when there is one.
    pub id: Option<String>,
    /// Phrase to show or speak: the confirmation on success, the advisory on failure.
    pub message: String,
}

impl ActionResponse {
    fn success(id: Option<String>, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub content: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoEntry {
    pub id: String,
    pub text: String,
    pub completed: bool,
    /// `low|medium|high`.
    pub priority: String,
    /// ISO day, when set.
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodoListResponse {
    pub items: Vec<TodoEntry>,
    pub total: u32,
    pub completed: u32,
    pub progress_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventItem {
    pub id: String,
    pub title: String,
    /// ISO day `YYYY-MM-DD`.
    pub date: String,
    /// `exam|holiday|assignment|event`.
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayItem {
    pub day: u32,
    pub is_today: bool,
    pub events: Vec<EventItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthResponse {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    /// Empty cells before day 1, Sunday-first.
    pub leading_blanks: u32,
    pub days: Vec<DayItem>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryItem {
    pub id: String,
    pub date: String,
    pub mood: String,
    pub emoji: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodCount {
    pub mood: String,
    pub emoji: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatItem {
    pub id: String,
    pub text: String,
    /// `user|ai`.
    pub sender: String,
    pub timestamp: String,
}

/// Result of sending a chat prompt.
///
/// The host shows a typing indicator for `reply_after_ms`, then calls
/// [`chat_reply`] with the same prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSendResponse {
    pub ok: bool,
    pub message: String,
    pub reply_after_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatClearResponse {
    pub ok: bool,
    pub message: String,
    pub history: Vec<ChatItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceItem {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub description: String,
    pub distance: String,
    pub wheelchair_accessible: bool,
    pub rating: f32,
    pub icon: String,
}

/// Lists notes matching `search` (title or content) and `subject` (`All` or a subject name).
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list(search: String, subject: String) -> Vec<NoteItem> {
    let Some(subject) = SubjectFilter::parse(&subject) else {
        return Vec::new();
    };
    let query = NoteQuery { search, subject };
    with_connection(|conn, _| {
        let service = NoteService::hydrate(SqliteKeyValueStore::new(conn));
        service
            .filtered(&query)
            .into_iter()
            .map(|note| NoteItem {
                id: note.id.to_string(),
                title: note.title.clone(),
                subject: note.subject.as_str().to_string(),
                content: note.content.clone(),
                date: note.date.clone(),
            })
            .collect()
    })
    .unwrap_or_default()
}

#[flutter_rust_bridge::frb(sync)]
pub fn notes_create(title: String, subject: String, content: String) -> ActionResponse {
    let draft = NoteDraft {
        title,
        subject: Subject::parse(&subject),
        content,
    };
    run_action("notes_create", |conn, ctx| {
        let mut service = NoteService::hydrate(SqliteKeyValueStore::new(conn));
        service.create(ctx, &draft).map(|note| Some(note.id))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn notes_update(id: String, title: String, subject: String, content: String) -> ActionResponse {
    let Some(id) = parse_id(&id) else {
        return ActionResponse::failure("Unknown note");
    };
    let draft = NoteDraft {
        title,
        subject: Subject::parse(&subject),
        content,
    };
    run_action("notes_update", |conn, ctx| {
        let mut service = NoteService::hydrate(SqliteKeyValueStore::new(conn));
        service
            .update(ctx, id, &draft)
            .map(|updated| updated.then_some(id))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn notes_delete(id: String) -> ActionResponse {
    let Some(id) = parse_id(&id) else {
        return ActionResponse::failure("Unknown note");
    };
    run_action("notes_delete", |conn, ctx| {
        let mut service = NoteService::hydrate(SqliteKeyValueStore::new(conn));
        service.delete(ctx, id).map(|deleted| deleted.then_some(id))
    })
}

/// Lists to-do items for `filter` (`all|active|completed`) with progress over all items.
#[flutter_rust_bridge::frb(sync)]
pub fn todos_list(filter: String) -> TodoListResponse {
    let filter = StatusFilter::parse(&filter).unwrap_or_default();
    with_connection(|conn, _| {
        let service = TodoService::hydrate(SqliteKeyValueStore::new(conn));
        let summary = service.summary();
        TodoListResponse {
            items: service
                .filtered(filter)
                .into_iter()
                .map(|item| TodoEntry {
                    id: item.id.to_string(),
                    text: item.text.clone(),
                    completed: item.completed,
                    priority: item.priority.as_str().to_string(),
                    due_date: item
                        .due_date
                        .map(|date| date.format(EVENT_DATE_FORMAT).to_string()),
                })
                .collect(),
            total: summary.total as u32,
            completed: summary.completed as u32,
            progress_percent: summary.progress_percent,
        }
    })
    .unwrap_or(TodoListResponse {
        items: Vec::new(),
        total: 0,
        completed: 0,
        progress_percent: 0.0,
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn todos_create(text: String, priority: String, due_date: Option<String>) -> ActionResponse {
    let due_date = match due_date.as_deref().map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => match NaiveDate::parse_from_str(raw, EVENT_DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => return ActionResponse::failure("Please pick a valid due date"),
        },
        None => None,
    };
    let draft = TodoDraft {
        text,
        priority: Priority::parse(&priority).unwrap_or_default(),
        due_date,
    };
    run_action("todos_create", |conn, ctx| {
        let mut service = TodoService::hydrate(SqliteKeyValueStore::new(conn));
        service.create(ctx, &draft).map(|item| Some(item.id))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn todos_toggle(id: String) -> ActionResponse {
    let Some(id) = parse_id(&id) else {
        return ActionResponse::failure("Unknown task");
    };
    run_action("todos_toggle", |conn, ctx| {
        let mut service = TodoService::hydrate(SqliteKeyValueStore::new(conn));
        service.toggle(ctx, id).map(|state| state.map(|_| id))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn todos_delete(id: String) -> ActionResponse {
    let Some(id) = parse_id(&id) else {
        return ActionResponse::failure("Unknown task");
    };
    run_action("todos_delete", |conn, ctx| {
        let mut service = TodoService::hydrate(SqliteKeyValueStore::new(conn));
        service.delete(ctx, id).map(|deleted| deleted.then_some(id))
    })
}

/// Month grid for `year`/`month` (1-based), seeding holidays on first use.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_month(year: i32, month: u32) -> MonthResponse {
    let empty = |message: &str| MonthResponse {
        year,
        month,
        month_name: String::new(),
        leading_blanks: 0,
        days: Vec::new(),
        message: message.to_string(),
    };
    with_connection(|conn, ctx| {
        let today = ctx.today();
        let service = CalendarService::hydrate(SqliteKeyValueStore::new(conn), today);
        let events = service.events();
        let Some(grid) = sahpathi_core::view::calendar::month_grid(events, year, month, today)
        else {
            return empty("Unknown month");
        };
        MonthResponse {
            year: grid.year,
            month: grid.month,
            month_name: sahpathi_core::view::calendar::month_name(grid.month)
                .unwrap_or_default()
                .to_string(),
            leading_blanks: grid.leading_blanks,
            days: grid
                .cells
                .iter()
                .map(|cell| DayItem {
                    day: cell.day,
                    is_today: cell.is_today,
                    events: cell.events.iter().map(|event| to_event_item(event)).collect(),
                })
                .collect(),
            message: String::new(),
        }
    })
    .unwrap_or_else(|err| empty(&err))
}

/// Next events from today on, earliest first, at most ten.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_upcoming() -> Vec<EventItem> {
    with_connection(|conn, ctx| {
        let today = ctx.today();
        let service = CalendarService::hydrate(SqliteKeyValueStore::new(conn), today);
        service
            .upcoming(today)
            .into_iter()
            .map(to_event_item)
            .collect()
    })
    .unwrap_or_default()
}

#[flutter_rust_bridge::frb(sync)]
pub fn calendar_create(title: String, date: String, kind: String, description: String) -> ActionResponse {
    let draft = EventDraft {
        title,
        date,
        kind: EventKind::parse(&kind).unwrap_or_default(),
        description,
    };
    run_action("calendar_create", |conn, ctx| {
        let mut service = CalendarService::hydrate(SqliteKeyValueStore::new(conn), ctx.today());
        service.create(ctx, &draft).map(|event| Some(event.id))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn calendar_delete(id: String) -> ActionResponse {
    let Some(id) = parse_id(&id) else {
        return ActionResponse::failure("Unknown event");
    };
    run_action("calendar_delete", |conn, ctx| {
        let mut service = CalendarService::hydrate(SqliteKeyValueStore::new(conn), ctx.today());
        service.delete(ctx, id).map(|deleted| deleted.then_some(id))
    })
}

/// Diary entries, oldest first. The host opens the last one.
#[flutter_rust_bridge::frb(sync)]
pub fn diary_list() -> Vec<DiaryItem> {
    with_connection(|conn, _| {
        let service = DiaryService::hydrate(SqliteKeyValueStore::new(conn));
        service
            .entries()
            .iter()
            .map(|entry| DiaryItem {
                id: entry.id.to_string(),
                date: entry.date.clone(),
                mood: entry.mood.as_str().to_string(),
                emoji: entry.emoji.clone(),
                content: entry.content.clone(),
            })
            .collect()
    })
    .unwrap_or_default()
}

#[flutter_rust_bridge::frb(sync)]
pub fn diary_mood_counts() -> Vec<MoodCount> {
    with_connection(|conn, _| {
        let service = DiaryService::hydrate(SqliteKeyValueStore::new(conn));
        service
            .mood_counts()
            .into_iter()
            .map(|(mood, count)| MoodCount {
                mood: mood.as_str().to_string(),
                emoji: mood.emoji().to_string(),
                count: count as u32,
            })
            .collect()
    })
    .unwrap_or_default()
}

#[flutter_rust_bridge::frb(sync)]
pub fn diary_create(mood: String, content: String) -> ActionResponse {
    let draft = DiaryDraft {
        mood: Mood::parse(&mood),
        content,
    };
    run_action("diary_create", |conn, ctx| {
        let mut service = DiaryService::hydrate(SqliteKeyValueStore::new(conn));
        service.create(ctx, &draft).map(|entry| Some(entry.id))
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn diary_delete(id: String) -> ActionResponse {
    let Some(id) = parse_id(&id) else {
        return ActionResponse::failure("Unknown entry");
    };
    run_action("diary_delete", |conn, ctx| {
        let mut service = DiaryService::hydrate(SqliteKeyValueStore::new(conn));
        service.delete(ctx, id).map(|deleted| deleted.then_some(id))
    })
}

/// Chat history, including the greeting when nothing was said yet.
#[flutter_rust_bridge::frb(sync)]
pub fn chat_history() -> Vec<ChatItem> {
    with_connection(|conn, ctx| {
        let service = ChatService::hydrate(ctx, SqliteKeyValueStore::new(conn));
        service.messages().iter().map(to_chat_item).collect()
    })
    .unwrap_or_default()
}

/// Stores the user prompt. The reply is produced by a later [`chat_reply`].
#[flutter_rust_bridge::frb(sync)]
pub fn chat_send(text: String) -> ChatSendResponse {
    let outcome = with_connection(|conn, ctx| {
        let mut service = ChatService::hydrate(ctx, SqliteKeyValueStore::new(conn));
        service.send(ctx, &text, std::time::Instant::now())
    });
    match outcome {
        Ok(Ok(pending)) => ChatSendResponse {
            ok: true,
            message: "Processing your message".to_string(),
            reply_after_ms: u32::try_from(pending.delay.as_millis()).unwrap_or(u32::MAX),
        },
        Ok(Err(err)) => ChatSendResponse {
            ok: false,
            message: err.user_message(),
            reply_after_ms: 0,
        },
        Err(err) => ChatSendResponse {
            ok: false,
            message: err,
            reply_after_ms: 0,
        },
    }
}

/// Appends the assistant reply to `prompt`; `message` carries the reply text.
#[flutter_rust_bridge::frb(sync)]
pub fn chat_reply(prompt: String) -> ActionResponse {
    run_action("chat_reply", |conn, ctx| {
        let mut service = ChatService::hydrate(ctx, SqliteKeyValueStore::new(conn));
        service
            .reply_to(ctx, &prompt)
            .map(|(_, reply)| Some(reply.id))
    })
}

/// Clears the stored history. `history` holds the "cleared" greeting, which
/// is shown until the next prompt and never stored.
#[flutter_rust_bridge::frb(sync)]
pub fn chat_clear() -> ChatClearResponse {
    let outcome = with_connection(|conn, ctx| {
        let mut service = ChatService::hydrate(ctx, SqliteKeyValueStore::new(conn));
        service.clear(ctx)
    });
    match outcome {
        Ok(Ok(greeting)) => ChatClearResponse {
            ok: true,
            message: "Chat cleared".to_string(),
            history: vec![to_chat_item(&greeting)],
        },
        Ok(Err(err)) => ChatClearResponse {
            ok: false,
            message: err.user_message(),
            history: Vec::new(),
        },
        Err(err) => ChatClearResponse {
            ok: false,
            message: err,
            history: Vec::new(),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickPrompt {
    pub label: String,
    pub prompt: String,
}

/// Suggested prompts shown under the chat input.
#[flutter_rust_bridge::frb(sync)]
pub fn chat_quick_prompts() -> Vec<QuickPrompt> {
    QUICK_PROMPTS
        .iter()
        .map(|(label, prompt)| QuickPrompt {
            label: label.to_string(),
            prompt: prompt.to_string(),
        })
        .collect()
}

/// Nearby places for `category` (`all` or a category id), optionally accessible only.
#[flutter_rust_bridge::frb(sync)]
pub fn places_list(category: String, accessible_only: bool) -> Vec<PlaceItem> {
    let Some(category) = CategoryFilter::parse(&category) else {
        return Vec::new();
    };
    let filter = PlaceFilter {
        category,
        accessible_only,
    };
    sahpathi_core::view::places::filter_places(
        sahpathi_core::catalog::places::nearby_places(),
        &filter,
    )
    .into_iter()
    .map(|place| PlaceItem {
        id: place.id,
        name: place.name.to_string(),
        category: place.category.as_str().to_string(),
        description: place.description.to_string(),
        distance: place.distance.to_string(),
        wheelchair_accessible: place.wheelchair_accessible,
        rating: place.rating,
        icon: place.icon.as_str().to_string(),
    })
    .collect()
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("SAHPATHI_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

/// Context whose narration is captured instead of spoken; the host speaks
/// the returned phrase itself.
fn capturing_context() -> (AppContext, Rc<RecordingNarrator>) {
    let narrator = Rc::new(RecordingNarrator::new());
    let settings = AccessibilitySettings {
        voice_enabled: true,
        ..AccessibilitySettings::default()
    };
    let ctx = AppContext::new(settings).with_narrator(Rc::clone(&narrator));
    (ctx, narrator)
}

fn lock_db() -> MutexGuard<'static, ()> {
    DB_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn with_connection<R>(f: impl FnOnce(&Connection, &AppContext) -> R) -> Result<R, String> {
    let _guard = lock_db();
    let db_path = resolve_db_path();
    let conn = open_db(&db_path).map_err(|err| {
        warn!("event=ffi_db_open module=ffi status=error error={err}");
        format!("Could not open your saved data: {err}")
    })?;
    let (ctx, _) = capturing_context();
    Ok(f(&conn, &ctx))
}

fn run_action(
    action: &'static str,
    f: impl FnOnce(&Connection, &AppContext) -> Result<Option<RecordId>, ServiceError>,
) -> ActionResponse {
    let _guard = lock_db();
    let db_path = resolve_db_path();
    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            warn!("event={action} module=ffi status=error error_code=db_open_failed error={err}");
            return ActionResponse::failure(format!("Could not open your saved data: {err}"));
        }
    };

    let (ctx, narrator) = capturing_context();
    match f(&conn, &ctx) {
        Ok(Some(id)) => ActionResponse::success(
            Some(id.to_string()),
            narrator.last().unwrap_or_default(),
        ),
        Ok(None) => ActionResponse::success(None, narrator.last().unwrap_or_default()),
        Err(err) => ActionResponse::failure(err.user_message()),
    }
}

fn parse_id(raw: &str) -> Option<RecordId> {
    Uuid::parse_str(raw.trim()).ok()
}

fn to_chat_item(message: &sahpathi_core::ChatMessage) -> ChatItem {
    ChatItem {
        id: message.id.to_string(),
        text: message.text.clone(),
        sender: message.sender.as_str().to_string(),
        timestamp: message.timestamp.clone(),
    }
}

fn to_event_item(event: &sahpathi_core::CalendarEvent) -> EventItem {
    EventItem {
        id: event.id.to_string(),
        title: event.title.clone(),
        date: event.date.format(EVENT_DATE_FORMAT).to_string(),
        kind: event.kind.as_str().to_string(),
        description: event.description.clone(),
    }
}
