//! Calendar use-case service.
//!
//! # Responsibility
//! - Add and delete calendar events; seed regional holidays on first run.
//! - Track the displayed month and expose grid/upcoming projections.
//!
//! # Invariants
//! - Seeding happens only when the slot was never written; an emptied
//!   calendar stays empty.
//! - New events are appended.

use super::{reject, storage_failure, ServiceResult};
use crate::catalog::holidays::regional_holidays;
use crate::context::AppContext;
use crate::model::event::{CalendarEvent, EventDraft};
use crate::model::id::{new_record_id, RecordId};
use crate::store::{KeyValueStore, PersistedList, EVENTS_KEY};
use crate::view::calendar::{
    day_summary, events_on, month_grid, month_name, shift_month, upcoming, MonthGrid,
};
use chrono::{Datelike, NaiveDate};
use log::{info, warn};

const MODULE: &str = "calendar";

pub struct CalendarService<S: KeyValueStore> {
    events: PersistedList<CalendarEvent, S>,
    year: i32,
    month: u32,
}

impl<S: KeyValueStore> CalendarService<S> {
    /// Loads the events slot and opens the month containing `today`.
    pub fn hydrate(store: S, today: NaiveDate) -> Self {
        Self {
            events: PersistedList::hydrate(store, EVENTS_KEY, regional_holidays),
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn events(&self) -> &[CalendarEvent] {
        self.events.items()
    }

    /// Displayed `(year, month)`, month 1-based.
    pub fn displayed_month(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    pub fn grid(&self, today: NaiveDate) -> Option<MonthGrid<'_>> {
        month_grid(self.events.items(), self.year, self.month, today)
    }

    pub fn upcoming(&self, today: NaiveDate) -> Vec<&CalendarEvent> {
        upcoming(self.events.items(), today)
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        events_on(self.events.items(), date)
    }

    /// Moves the displayed month by `delta` and announces the new month.
    ///
    /// A target outside the representable date range keeps the current month.
    pub fn navigate(&mut self, ctx: &AppContext, delta: i32) -> (i32, u32) {
        let Some((year, month)) = shift_month(self.year, self.month, delta)
            .filter(|&(year, month)| NaiveDate::from_ymd_opt(year, month, 1).is_some())
        else {
            warn!(
                "event=calendar_navigate module={MODULE} status=rejected delta={delta} reason=out_of_range"
            );
            return (self.year, self.month);
        };
        self.year = year;
        self.month = month;
        if let Some(name) = month_name(month) {
            ctx.announce(name);
        }
        (year, month)
    }

    /// Announces the events of one day of the displayed month, if it has any.
    pub fn select_day(&self, ctx: &AppContext, day: u32) -> usize {
        let Some(grid) = self.grid(ctx.today()) else {
            return 0;
        };
        let Some(cell) = grid.cells.iter().find(|cell| cell.day == day) else {
            return 0;
        };
        if !cell.events.is_empty() {
            ctx.announce(&day_summary(cell));
        }
        cell.events.len()
    }

    pub fn create(&mut self, ctx: &AppContext, draft: &EventDraft) -> ServiceResult<CalendarEvent> {
        let date = match draft.validate() {
            Ok(date) => date,
            Err(err) => return reject(ctx, MODULE, err),
        };

        let event = CalendarEvent {
            id: new_record_id(),
            title: draft.title.clone(),
            date,
            kind: draft.kind,
            description: draft.description.clone(),
        };

        self.events
            .mutate(|events| {
                events.push(event.clone());
                Some(())
            })
            .map_err(|err| storage_failure(MODULE, "event_create", err))?;

        info!(
            "event=event_create module={MODULE} status=ok kind={} count={}",
            event.kind.as_str(),
            self.events.len()
        );
        ctx.announce("Event added");
        Ok(event)
    }

    pub fn delete(&mut self, ctx: &AppContext, id: RecordId) -> ServiceResult<bool> {
        let deleted = self
            .events
            .mutate(|events| {
                let index = events.iter().position(|event| event.id == id)?;
                events.remove(index);
                Some(())
            })
            .map_err(|err| storage_failure(MODULE, "event_delete", err))?
            .is_some();

        if deleted {
            info!(
                "event=event_delete module={MODULE} status=ok count={}",
                self.events.len()
            );
            ctx.announce("Event deleted");
        }
        Ok(deleted)
    }
}
