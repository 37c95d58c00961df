//! Regional holiday seed for the calendar module.

use crate::model::event::{CalendarEvent, EventKind};
use crate::model::id::new_record_id;
use chrono::NaiveDate;

/// `(title, year, month, day, description)`
const REGIONAL_HOLIDAYS: &[(&str, i32, u32, u32, &str)] = &[
    ("Uttarayan", 2025, 1, 14, "Kite Festival"),
    ("Republic Day", 2025, 1, 26, "National Holiday"),
    ("Holi", 2025, 3, 14, "Festival of Colors"),
    ("Ram Navami", 2025, 4, 6, "Hindu Festival"),
    ("Janmashtami", 2025, 8, 16, "Krishna Birthday"),
    ("Navratri", 2025, 9, 25, "9 Nights Festival"),
    ("Diwali", 2025, 10, 20, "Festival of Lights"),
];

/// Builds fresh holiday events, each with its own id.
pub fn regional_holidays() -> Vec<CalendarEvent> {
    REGIONAL_HOLIDAYS
        .iter()
        .filter_map(|&(title, year, month, day, description)| {
            let date = NaiveDate::from_ymd_opt(year, month, day)?;
            Some(CalendarEvent {
                id: new_record_id(),
                title: title.to_string(),
                date,
                kind: EventKind::Holiday,
                description: description.to_string(),
            })
        })
        .collect()
}
