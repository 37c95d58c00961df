use chrono::NaiveDate;
use sahpathi_core::platform::{FixedClock, RecordingNarrator};
use sahpathi_core::store::DIARY_KEY;
use sahpathi_core::{
    AccessibilitySettings, AppContext, DiaryDraft, DiaryEntry, DiaryService, MemoryKeyValueStore,
    Mood,
};
use std::rc::Rc;

fn context() -> (AppContext, Rc<RecordingNarrator>, Rc<FixedClock>) {
    let narrator = Rc::new(RecordingNarrator::new());
    let clock = Rc::new(FixedClock::new(
        NaiveDate::from_ymd_opt(2025, 1, 6)
            .unwrap()
            .and_hms_opt(21, 0, 0)
            .unwrap(),
    ));
    let ctx = AppContext::new(AccessibilitySettings {
        voice_enabled: true,
        ..AccessibilitySettings::default()
    })
    .with_narrator(Rc::clone(&narrator))
    .with_clock(Rc::clone(&clock));
    (ctx, narrator, clock)
}

fn entry(mood: Mood, content: &str) -> DiaryDraft {
    DiaryDraft {
        mood: Some(mood),
        content: content.to_string(),
    }
}

fn seeded(ctx: &AppContext, store: &MemoryKeyValueStore) -> Vec<DiaryEntry> {
    let mut service = DiaryService::hydrate(store);
    [Mood::Happy, Mood::Calm, Mood::Sad]
        .into_iter()
        .map(|mood| service.create(ctx, &entry(mood, mood.as_str())).unwrap())
        .collect()
}

#[test]
fn create_appends_and_moves_cursor_to_new_entry() {
    let (ctx, narrator, clock) = context();
    let store = MemoryKeyValueStore::new();
    let mut service = DiaryService::hydrate(&store);
    assert_eq!(service.cursor(), None);
    assert!(service.current().is_none());

    service.create(&ctx, &entry(Mood::Happy, "Won the quiz")).unwrap();
    clock.set(
        NaiveDate::from_ymd_opt(2025, 1, 7)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap(),
    );
    let second = service.create(&ctx, &entry(Mood::Excited, "Trip tomorrow")).unwrap();

    assert_eq!(service.entries().len(), 2);
    assert_eq!(service.cursor(), Some(1));
    assert_eq!(service.current().map(|entry| entry.id), Some(second.id));
    assert_eq!(second.date, "Tuesday, January 7, 2025");
    assert_eq!(second.emoji, Mood::Excited.emoji());
    assert_eq!(narrator.last().as_deref(), Some("Diary entry saved"));

    let stored: Vec<DiaryEntry> = serde_json::from_str(&store.raw(DIARY_KEY).unwrap()).unwrap();
    assert_eq!(stored, service.entries());
}

#[test]
fn missing_mood_or_content_is_rejected() {
    let (ctx, narrator, _) = context();
    let store = MemoryKeyValueStore::new();
    let mut service = DiaryService::hydrate(&store);
    let writes = store.write_count();

    let no_mood = DiaryDraft {
        mood: None,
        content: "quiet day".to_string(),
    };
    assert!(service.create(&ctx, &no_mood).is_err());
    assert!(service.create(&ctx, &entry(Mood::Calm, "   ")).is_err());

    assert!(service.entries().is_empty());
    assert_eq!(store.write_count(), writes);
    assert_eq!(
        narrator.last().as_deref(),
        Some("Please select a mood and write something")
    );
}

#[test]
fn hydrate_opens_most_recent_entry() {
    let (ctx, _, _) = context();
    let store = MemoryKeyValueStore::new();
    seeded(&ctx, &store);

    let service = DiaryService::hydrate(&store);
    assert_eq!(service.cursor(), Some(2));
    assert_eq!(service.current().map(|entry| entry.mood), Some(Mood::Sad));
}

#[test]
fn deleting_last_page_clamps_cursor() {
    let (ctx, narrator, _) = context();
    let store = MemoryKeyValueStore::new();
    let created = seeded(&ctx, &store);
    let mut service = DiaryService::hydrate(&store);
    assert_eq!(service.cursor(), Some(2));

    assert!(service.delete(&ctx, created[2].id).unwrap());
    assert_eq!(service.cursor(), Some(1));
    assert_eq!(narrator.last().as_deref(), Some("Entry deleted"));

    assert!(service.delete(&ctx, created[0].id).unwrap());
    assert_eq!(service.cursor(), Some(0));
    assert!(service.delete(&ctx, created[1].id).unwrap());
    assert_eq!(service.cursor(), None);
    assert!(service.current().is_none());
}

#[test]
fn flipping_stays_within_bounds() {
    let (ctx, narrator, _) = context();
    let store = MemoryKeyValueStore::new();
    seeded(&ctx, &store);
    let mut service = DiaryService::hydrate(&store);

    assert!(!service.next(&ctx));
    assert!(service.previous(&ctx));
    assert_eq!(
        narrator.last().as_deref(),
        Some("Entry from Monday, January 6, 2025. Mood: Calm")
    );
    assert!(service.previous(&ctx));
    assert!(!service.previous(&ctx));
    assert_eq!(service.cursor(), Some(0));

    assert!(service.open(&ctx, 2));
    assert!(!service.open(&ctx, 3));
    assert_eq!(service.cursor(), Some(2));
}

#[test]
fn mood_counts_skip_unused_moods() {
    let (ctx, _, _) = context();
    let store = MemoryKeyValueStore::new();
    let mut service = DiaryService::hydrate(&store);
    for mood in [Mood::Sad, Mood::Happy, Mood::Sad] {
        service.create(&ctx, &entry(mood, "text")).unwrap();
    }

    assert_eq!(
        service.mood_counts(),
        vec![(Mood::Happy, 1), (Mood::Sad, 2)]
    );
}

#[test]
fn unknown_id_delete_keeps_cursor() {
    let (ctx, _, _) = context();
    let store = MemoryKeyValueStore::new();
    seeded(&ctx, &store);
    let mut service = DiaryService::hydrate(&store);
    service.previous(&ctx);
    let writes = store.write_count();

    assert!(!service.delete(&ctx, uuid::Uuid::now_v7()).unwrap());
    assert_eq!(service.cursor(), Some(1));
    assert_eq!(store.write_count(), writes);
}
