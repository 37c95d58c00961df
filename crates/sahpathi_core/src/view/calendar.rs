//! Month grid, day buckets and upcoming list for calendar events.
//!
//! Months are 1-based (`1 = January`). The grid starts on Sunday.

use crate::model::event::CalendarEvent;
use chrono::{Datelike, NaiveDate};

/// Maximum number of entries in the upcoming list.
pub const UPCOMING_LIMIT: usize = 10;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English month name for a 1-based month, `None` outside `1..=12`.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell<'a> {
    pub day: u32,
    pub date: NaiveDate,
    pub is_today: bool,
    pub events: Vec<&'a CalendarEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid<'a> {
    pub year: i32,
    pub month: u32,
    /// Empty cells before day 1; weekday of day 1 with Sunday = 0.
    pub leading_blanks: u32,
    pub days_in_month: u32,
    pub cells: Vec<DayCell<'a>>,
}

/// Number of days in a 1-based month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = shift_month(year, month, 1)?;
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    u32::try_from(next_first.signed_duration_since(first).num_days()).ok()
}

/// Moves a 1-based `(year, month)` by `delta` months with year rollover.
///
/// Returns `None` when the month index leaves the `i32` range.
pub fn shift_month(year: i32, month: u32, delta: i32) -> Option<(i32, u32)> {
    let month_index = i32::try_from(month).ok()?.checked_sub(1)?;
    let zero_based = year
        .checked_mul(12)?
        .checked_add(month_index)?
        .checked_add(delta)?;
    let month = u32::try_from(zero_based.rem_euclid(12)).ok()? + 1;
    Some((zero_based.div_euclid(12), month))
}

/// Events whose date equals `date`, in collection order.
pub fn events_on(events: &[CalendarEvent], date: NaiveDate) -> Vec<&CalendarEvent> {
    events.iter().filter(|event| event.date == date).collect()
}

/// Builds the grid for one month. Returns `None` for an invalid month.
pub fn month_grid(
    events: &[CalendarEvent],
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Option<MonthGrid<'_>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let days_in_month = days_in_month(year, month)?;

    let cells = first
        .iter_days()
        .take(days_in_month as usize)
        .map(|date| DayCell {
            day: date.day(),
            date,
            is_today: date == today,
            events: events_on(events, date),
        })
        .collect();

    Some(MonthGrid {
        year,
        month,
        leading_blanks: first.weekday().num_days_from_sunday(),
        days_in_month,
        cells,
    })
}

/// Events on or after `today`, ascending by date, at most `UPCOMING_LIMIT`.
pub fn upcoming(events: &[CalendarEvent], today: NaiveDate) -> Vec<&CalendarEvent> {
    let mut upcoming = events
        .iter()
        .filter(|event| event.date >= today)
        .collect::<Vec<_>>();
    upcoming.sort_by_key(|event| event.date);
    upcoming.truncate(UPCOMING_LIMIT);
    upcoming
}

/// Phrase read out when a day cell is selected, e.g. `14 January. 2 events`.
pub fn day_summary(cell: &DayCell<'_>) -> String {
    let month = month_name(cell.date.month()).unwrap_or_default();
    format!("{} {}. {} events", cell.day, month, cell.events.len())
}

#[cfg(test)]
mod tests {
    use super::{day_summary, days_in_month, month_grid, month_name, shift_month, upcoming};
    use crate::model::event::{CalendarEvent, EventKind};
    use crate::model::id::new_record_id;
    use chrono::NaiveDate;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn event(title: &str, date: NaiveDate) -> CalendarEvent {
        CalendarEvent {
            id: new_record_id(),
            title: title.to_string(),
            date,
            kind: EventKind::Event,
            description: String::new(),
        }
    }

    #[test]
    fn january_2025_starts_on_wednesday_with_31_days() {
        let grid = month_grid(&[], 2025, 1, day(2025, 1, 10)).unwrap();
        assert_eq!(grid.leading_blanks, 3);
        assert_eq!(grid.days_in_month, 31);
        assert_eq!(grid.cells.len(), 31);
        assert_eq!(grid.cells[0].day, 1);
        assert_eq!(grid.cells[30].day, 31);
        assert!(grid.cells[9].is_today);
    }

    #[test]
    fn leap_february_has_29_days() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2025, 2), Some(28));
        assert_eq!(days_in_month(2025, 12), Some(31));
        assert_eq!(days_in_month(2025, 13), None);
    }

    #[test]
    fn events_are_bucketed_by_exact_date() {
        let events = vec![
            event("Exam", day(2025, 1, 14)),
            event("Party", day(2025, 1, 14)),
            event("Other month", day(2025, 2, 14)),
        ];
        let grid = month_grid(&events, 2025, 1, day(2025, 1, 1)).unwrap();
        assert_eq!(grid.cells[13].events.len(), 2);
        assert_eq!(day_summary(&grid.cells[13]), "14 January. 2 events");
        let total = grid.cells.iter().map(|cell| cell.events.len()).sum::<usize>();
        assert_eq!(total, 2);
    }

    #[test]
    fn shift_month_rolls_over_years() {
        assert_eq!(shift_month(2025, 1, -1), Some((2024, 12)));
        assert_eq!(shift_month(2025, 12, 1), Some((2026, 1)));
        assert_eq!(shift_month(2025, 6, 0), Some((2025, 6)));
    }

    #[test]
    fn shift_month_rejects_overflowing_delta() {
        assert_eq!(shift_month(2025, 6, i32::MAX), None);
        assert_eq!(shift_month(2025, 6, i32::MIN), None);
        assert_eq!(shift_month(i32::MAX, 12, 1), None);
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
    }

    #[test]
    fn upcoming_includes_today_sorts_and_caps() {
        let today = day(2025, 3, 1);
        let mut events = vec![event("past", day(2025, 2, 28)), event("today", today)];
        for offset in (1..=12).rev() {
            events.push(event("later", day(2025, 4, offset)));
        }

        let list = upcoming(&events, today);
        assert_eq!(list.len(), 10);
        assert_eq!(list[0].title, "today");
        assert!(list.windows(2).all(|pair| pair[0].date <= pair[1].date));
        assert!(list.iter().all(|event| event.title != "past"));
    }
}
