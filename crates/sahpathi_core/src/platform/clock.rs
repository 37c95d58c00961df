//! Wall-clock access and the display formats derived from it.

use chrono::{Local, NaiveDate, NaiveDateTime};
use std::cell::Cell;

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a settable instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

impl<T: Clock + ?Sized> Clock for std::rc::Rc<T> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Short day label stored on notes, e.g. `1/14/2025`.
pub fn short_date_label(now: NaiveDateTime) -> String {
    now.format("%-m/%-d/%Y").to_string()
}

/// Long day label stored on diary entries, e.g. `Tuesday, January 14, 2025`.
pub fn long_date_label(now: NaiveDateTime) -> String {
    now.format("%A, %B %-d, %Y").to_string()
}

/// Time label stored on chat messages, e.g. `3:04:05 PM`.
pub fn time_label(now: NaiveDateTime) -> String {
    now.format("%-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::{long_date_label, short_date_label, time_label};
    use chrono::NaiveDate;

    #[test]
    fn labels_match_display_formats() {
        let now = NaiveDate::from_ymd_opt(2025, 1, 14)
            .unwrap()
            .and_hms_opt(15, 4, 5)
            .unwrap();
        assert_eq!(short_date_label(now), "1/14/2025");
        assert_eq!(long_date_label(now), "Tuesday, January 14, 2025");
        assert_eq!(time_label(now), "3:04:05 PM");
    }
}
