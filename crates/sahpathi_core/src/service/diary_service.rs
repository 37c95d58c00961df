//! Flip-book mood diary service.
//!
//! # Responsibility
//! - Save and delete diary entries.
//! - Own the flip-book cursor and keep it within bounds.
//!
//! # Invariants
//! - `cursor` is `None` exactly when the collection is empty, otherwise a
//!   valid index.
//! - Saving an entry moves the cursor onto it.

use super::{reject, storage_failure, ServiceResult};
use crate::context::AppContext;
use crate::model::diary::{DiaryDraft, DiaryEntry, Mood};
use crate::model::id::{new_record_id, RecordId};
use crate::platform::clock::long_date_label;
use crate::store::{KeyValueStore, PersistedList, DIARY_KEY};
use crate::view::diary::{clamp_cursor, mood_counts};
use log::info;

const MODULE: &str = "diary";

pub struct DiaryService<S: KeyValueStore> {
    entries: PersistedList<DiaryEntry, S>,
    cursor: Option<usize>,
}

impl<S: KeyValueStore> DiaryService<S> {
    /// Loads the diary slot and opens the most recent entry.
    pub fn hydrate(store: S) -> Self {
        let entries = PersistedList::hydrate(store, DIARY_KEY, Vec::new);
        let cursor = entries.len().checked_sub(1);
        Self { entries, cursor }
    }

    pub fn entries(&self) -> &[DiaryEntry] {
        self.entries.items()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Entry under the cursor; `None` renders the empty state.
    pub fn current(&self) -> Option<&DiaryEntry> {
        self.entries.items().get(self.cursor?)
    }

    pub fn mood_counts(&self) -> Vec<(Mood, usize)> {
        mood_counts(self.entries.items())
    }

    pub fn create(&mut self, ctx: &AppContext, draft: &DiaryDraft) -> ServiceResult<DiaryEntry> {
        let mood = match draft.validate() {
            Ok(mood) => mood,
            Err(err) => return reject(ctx, MODULE, err),
        };

        let entry = DiaryEntry {
            id: new_record_id(),
            date: long_date_label(ctx.now()),
            mood,
            emoji: mood.emoji().to_string(),
            content: draft.content.clone(),
        };

        self.entries
            .mutate(|entries| {
                entries.push(entry.clone());
                Some(())
            })
            .map_err(|err| storage_failure(MODULE, "diary_create", err))?;

        self.cursor = self.entries.len().checked_sub(1);
        info!(
            "event=diary_create module={MODULE} status=ok mood={} count={}",
            mood.as_str(),
            self.entries.len()
        );
        ctx.announce("Diary entry saved");
        Ok(entry)
    }

    pub fn delete(&mut self, ctx: &AppContext, id: RecordId) -> ServiceResult<bool> {
        let deleted = self
            .entries
            .mutate(|entries| {
                let index = entries.iter().position(|entry| entry.id == id)?;
                entries.remove(index);
                Some(())
            })
            .map_err(|err| storage_failure(MODULE, "diary_delete", err))?
            .is_some();

        if deleted {
            self.cursor = clamp_cursor(self.cursor.unwrap_or(0), self.entries.len());
            info!(
                "event=diary_delete module={MODULE} status=ok count={}",
                self.entries.len()
            );
            ctx.announce("Entry deleted");
        }
        Ok(deleted)
    }

    /// Flips forward one page. Returns whether the cursor moved.
    pub fn next(&mut self, ctx: &AppContext) -> bool {
        match self.cursor {
            Some(index) if index + 1 < self.entries.len() => self.move_to(ctx, index + 1),
            _ => false,
        }
    }

    /// Flips back one page. Returns whether the cursor moved.
    pub fn previous(&mut self, ctx: &AppContext) -> bool {
        match self.cursor {
            Some(index) if index > 0 => self.move_to(ctx, index - 1),
            _ => false,
        }
    }

    /// Jumps to a specific page, e.g. from the entry list.
    pub fn open(&mut self, ctx: &AppContext, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.cursor = Some(index);
        if let Some(entry) = self.current() {
            ctx.announce(&format!("Entry from {}", entry.date));
        }
        true
    }

    fn move_to(&mut self, ctx: &AppContext, index: usize) -> bool {
        self.cursor = Some(index);
        if let Some(entry) = self.current() {
            ctx.announce(&format!(
                "Entry from {}. Mood: {}",
                entry.date,
                entry.mood.as_str()
            ));
        }
        true
    }
}
