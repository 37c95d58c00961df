use chrono::NaiveDate;
use sahpathi_core::platform::{FixedClock, RecordingNarrator};
use sahpathi_core::store::{KeyValueStore, EVENTS_KEY};
use sahpathi_core::{
    AccessibilitySettings, AppContext, CalendarEvent, CalendarService, EventDraft, EventKind,
    MemoryKeyValueStore, ServiceError, ValidationError,
};
use std::rc::Rc;

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn context(today: NaiveDate) -> (AppContext, Rc<RecordingNarrator>) {
    let narrator = Rc::new(RecordingNarrator::new());
    let ctx = AppContext::new(AccessibilitySettings {
        voice_enabled: true,
        ..AccessibilitySettings::default()
    })
    .with_narrator(Rc::clone(&narrator))
    .with_clock(FixedClock::new(today.and_hms_opt(8, 0, 0).unwrap()));
    (ctx, narrator)
}

fn exam(title: &str, date: &str) -> EventDraft {
    EventDraft {
        title: title.to_string(),
        date: date.to_string(),
        kind: EventKind::Exam,
        description: String::new(),
    }
}

#[test]
fn first_hydrate_seeds_holidays_once() {
    let store = MemoryKeyValueStore::new();
    let today = day(2025, 1, 1);

    let service = CalendarService::hydrate(&store, today);
    assert_eq!(service.events().len(), 7);
    assert!(store.raw(EVENTS_KEY).is_some());

    let reloaded = CalendarService::hydrate(&store, today);
    let first_ids = service.events().iter().map(|event| event.id).collect::<Vec<_>>();
    let second_ids = reloaded.events().iter().map(|event| event.id).collect::<Vec<_>>();
    assert_eq!(first_ids, second_ids);
}

#[test]
fn emptied_calendar_is_not_reseeded() {
    let store = MemoryKeyValueStore::new();
    store.set(EVENTS_KEY, "[]").unwrap();

    let service = CalendarService::hydrate(&store, day(2025, 1, 1));
    assert!(service.events().is_empty());
}

#[test]
fn january_2025_grid_places_seeded_holidays() {
    let today = day(2025, 1, 14);
    let (ctx, narrator) = context(today);
    let service = CalendarService::hydrate(MemoryKeyValueStore::new(), today);

    let grid = service.grid(today).unwrap();
    assert_eq!(grid.leading_blanks, 3);
    assert_eq!(grid.days_in_month, 31);
    assert_eq!(grid.cells.len(), 31);
    assert!(grid.cells[13].is_today);
    assert_eq!(grid.cells[13].events[0].title, "Uttarayan");
    assert_eq!(grid.cells[25].events[0].title, "Republic Day");

    assert_eq!(service.select_day(&ctx, 14), 1);
    assert_eq!(narrator.last().as_deref(), Some("14 January. 1 events"));

    let spoken = narrator.spoken().len();
    assert_eq!(service.select_day(&ctx, 2), 0);
    assert_eq!(narrator.spoken().len(), spoken);
}

#[test]
fn navigate_rolls_over_year_and_announces_month() {
    let today = day(2025, 1, 10);
    let (ctx, narrator) = context(today);
    let mut service = CalendarService::hydrate(MemoryKeyValueStore::new(), today);

    assert_eq!(service.navigate(&ctx, -1), (2024, 12));
    assert_eq!(narrator.last().as_deref(), Some("December"));
    assert_eq!(service.navigate(&ctx, 2), (2025, 2));
    assert_eq!(service.displayed_month(), (2025, 2));

    let grid = service.grid(today).unwrap();
    assert_eq!(grid.days_in_month, 28);
    assert!(grid.cells.iter().all(|cell| !cell.is_today));
}

#[test]
fn navigate_out_of_range_keeps_displayed_month() {
    let today = day(2025, 1, 10);
    let (ctx, narrator) = context(today);
    let mut service = CalendarService::hydrate(MemoryKeyValueStore::new(), today);

    assert_eq!(service.navigate(&ctx, i32::MAX), (2025, 1));
    assert_eq!(service.navigate(&ctx, i32::MIN), (2025, 1));
    assert_eq!(service.navigate(&ctx, 12 * 1_000_000), (2025, 1));
    assert_eq!(service.displayed_month(), (2025, 1));
    assert!(narrator.last().is_none());

    assert_eq!(service.navigate(&ctx, 1), (2025, 2));
    assert!(service.grid(today).is_some());
}

#[test]
fn create_appends_and_upcoming_is_sorted() {
    let today = day(2025, 3, 1);
    let (ctx, narrator) = context(today);
    let store = MemoryKeyValueStore::new();
    let mut service = CalendarService::hydrate(&store, today);

    let exam_event = service.create(&ctx, &exam("Physics", "2025-03-10")).unwrap();
    assert_eq!(service.events().last().map(|event| event.id), Some(exam_event.id));
    assert_eq!(narrator.last().as_deref(), Some("Event added"));

    let titles = service
        .upcoming(today)
        .into_iter()
        .map(|event| event.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        titles,
        vec!["Physics", "Holi", "Ram Navami", "Janmashtami", "Navratri", "Diwali"]
    );

    let stored: Vec<CalendarEvent> =
        serde_json::from_str(&store.raw(EVENTS_KEY).unwrap()).unwrap();
    assert_eq!(stored.len(), 8);
    assert_eq!(service.events_on(day(2025, 3, 10)).len(), 1);
}

#[test]
fn invalid_drafts_are_rejected_without_write() {
    let today = day(2025, 3, 1);
    let (ctx, narrator) = context(today);
    let store = MemoryKeyValueStore::new();
    let mut service = CalendarService::hydrate(&store, today);
    let writes = store.write_count();

    let missing = service.create(&ctx, &exam("", "2025-03-10")).unwrap_err();
    assert!(matches!(
        missing,
        ServiceError::Validation(ValidationError::MissingEventFields)
    ));
    assert_eq!(narrator.last().as_deref(), Some("Please fill required fields"));

    let impossible = service.create(&ctx, &exam("Maths", "2025-02-30")).unwrap_err();
    assert!(matches!(
        impossible,
        ServiceError::Validation(ValidationError::InvalidEventDate(_))
    ));

    assert_eq!(service.events().len(), 7);
    assert_eq!(store.write_count(), writes);
}

#[test]
fn delete_removes_event_and_ignores_unknown_ids() {
    let today = day(2025, 1, 1);
    let (ctx, narrator) = context(today);
    let mut service = CalendarService::hydrate(MemoryKeyValueStore::new(), today);
    let holi = service
        .events()
        .iter()
        .find(|event| event.title == "Holi")
        .map(|event| event.id)
        .unwrap();

    assert!(service.delete(&ctx, holi).unwrap());
    assert_eq!(service.events().len(), 6);
    assert_eq!(narrator.last().as_deref(), Some("Event deleted"));
    assert!(!service.delete(&ctx, holi).unwrap());
}
