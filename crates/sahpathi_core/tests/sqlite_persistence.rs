use chrono::NaiveDate;
use sahpathi_core::db::open_db;
use sahpathi_core::platform::FixedClock;
use sahpathi_core::store::{load_collection, save_collection, LoadOutcome, TODOS_KEY};
use sahpathi_core::{
    AppContext, CalendarService, ChatService, DiaryDraft, DiaryService, EventDraft, EventKind,
    Mood, NoteDraft, NoteService, Priority, SqliteKeyValueStore, Subject, TodoDraft, TodoItem,
    TodoService,
};
use std::time::Instant;

fn fixed_context() -> AppContext {
    AppContext::default().with_clock(FixedClock::new(
        NaiveDate::from_ymd_opt(2025, 1, 20)
            .unwrap()
            .and_hms_opt(16, 45, 0)
            .unwrap(),
    ))
}

#[test]
fn every_module_survives_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sahpathi.sqlite3");
    let ctx = fixed_context();
    let today = ctx.today();

    {
        let conn = open_db(&path).unwrap();
        let store = SqliteKeyValueStore::new(&conn);

        NoteService::hydrate(store)
            .create(
                &ctx,
                &NoteDraft {
                    title: "Kinematics".to_string(),
                    subject: Some(Subject::Science),
                    content: "v = u + at".to_string(),
                },
            )
            .unwrap();
        TodoService::hydrate(store)
            .create(
                &ctx,
                &TodoDraft {
                    priority: Priority::Low,
                    due_date: NaiveDate::from_ymd_opt(2025, 1, 25),
                    ..TodoDraft::new("Flashcards")
                },
            )
            .unwrap();
        CalendarService::hydrate(store, today)
            .create(
                &ctx,
                &EventDraft {
                    title: "Essay due".to_string(),
                    date: "2025-01-28".to_string(),
                    kind: EventKind::Assignment,
                    description: "500 words".to_string(),
                },
            )
            .unwrap();
        DiaryService::hydrate(store)
            .create(
                &ctx,
                &DiaryDraft {
                    mood: Some(Mood::Loved),
                    content: "Family dinner".to_string(),
                },
            )
            .unwrap();
        ChatService::hydrate(&ctx, store)
            .send(&ctx, "How do I focus?", Instant::now())
            .unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = SqliteKeyValueStore::new(&conn);

    let notes = NoteService::hydrate(store);
    assert_eq!(notes.notes()[0].title, "Kinematics");
    assert_eq!(notes.notes()[0].date, "1/20/2025");

    let todos = TodoService::hydrate(store);
    assert_eq!(todos.items()[0].priority, Priority::Low);
    assert_eq!(todos.items()[0].due_date, NaiveDate::from_ymd_opt(2025, 1, 25));

    let calendar = CalendarService::hydrate(store, today);
    assert_eq!(calendar.events().len(), 8);
    assert_eq!(calendar.events()[7].kind, EventKind::Assignment);

    let diary = DiaryService::hydrate(store);
    assert_eq!(diary.entries()[0].date, "Monday, January 20, 2025");
    assert_eq!(diary.cursor(), Some(0));

    let chat = ChatService::hydrate(&ctx, store);
    assert_eq!(chat.messages().len(), 2);
    assert_eq!(chat.messages()[1].timestamp, "4:45:00 PM");
}

#[test]
fn saving_loaded_collection_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("idempotent.sqlite3")).unwrap();
    let store = SqliteKeyValueStore::new(&conn);
    let ctx = fixed_context();

    let mut todos = TodoService::hydrate(store);
    todos.create(&ctx, &TodoDraft::new("One")).unwrap();
    todos.create(&ctx, &TodoDraft::new("Two")).unwrap();

    let (first, outcome) = load_collection::<TodoItem, _>(&store, TODOS_KEY);
    assert_eq!(outcome, LoadOutcome::Loaded);
    save_collection(&store, TODOS_KEY, &first).unwrap();
    let (second, _) = load_collection::<TodoItem, _>(&store, TODOS_KEY);

    assert_eq!(first, second);
    assert_eq!(second, todos.items());
}

#[test]
fn todo_payload_uses_camel_case_and_omits_missing_due_date() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("shape.sqlite3")).unwrap();
    let store = SqliteKeyValueStore::new(&conn);
    let ctx = fixed_context();

    let mut todos = TodoService::hydrate(store);
    todos
        .create(
            &ctx,
            &TodoDraft {
                due_date: NaiveDate::from_ymd_opt(2025, 2, 1),
                ..TodoDraft::new("Dated")
            },
        )
        .unwrap();
    todos.create(&ctx, &TodoDraft::new("Undated")).unwrap();

    let payload: String = conn
        .query_row(
            "SELECT payload FROM kv_slots WHERE slot_key = ?1;",
            [TODOS_KEY],
            |row| row.get(0),
        )
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&payload).unwrap();

    assert_eq!(json[0]["text"], "Undated");
    assert!(json[0].get("dueDate").is_none());
    assert_eq!(json[1]["dueDate"], "2025-02-01");
    assert_eq!(json[1]["priority"], "medium");
    assert_eq!(json[1]["completed"], false);
}
