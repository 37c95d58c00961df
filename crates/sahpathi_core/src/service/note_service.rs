//! Notes use-case service.
//!
//! # Responsibility
//! - Create, edit and delete subject notes.
//! - Expose the search/subject projection over the current collection.
//!
//! # Invariants
//! - New notes are inserted at the front of the collection.
//! - Edits replace title, subject and content; id and creation date stay.

use super::{reject, storage_failure, ServiceResult};
use crate::context::AppContext;
use crate::model::id::{new_record_id, RecordId};
use crate::model::note::{Note, NoteDraft};
use crate::platform::clock::short_date_label;
use crate::store::{KeyValueStore, PersistedList, NOTES_KEY};
use crate::view::notes::{filter_notes, NoteQuery};
use log::info;

const MODULE: &str = "notes";

pub struct NoteService<S: KeyValueStore> {
    notes: PersistedList<Note, S>,
}

impl<S: KeyValueStore> NoteService<S> {
    /// Loads the notes slot; a missing or unreadable slot starts empty.
    pub fn hydrate(store: S) -> Self {
        Self {
            notes: PersistedList::hydrate(store, NOTES_KEY, Vec::new),
        }
    }

    pub fn notes(&self) -> &[Note] {
        self.notes.items()
    }

    pub fn get(&self, id: RecordId) -> Option<&Note> {
        self.notes.items().iter().find(|note| note.id == id)
    }

    pub fn filtered(&self, query: &NoteQuery) -> Vec<&Note> {
        filter_notes(self.notes.items(), query)
    }

    pub fn create(&mut self, ctx: &AppContext, draft: &NoteDraft) -> ServiceResult<Note> {
        let subject = match draft.validate() {
            Ok(subject) => subject,
            Err(err) => return reject(ctx, MODULE, err),
        };

        let note = Note {
            id: new_record_id(),
            title: draft.title.clone(),
            subject,
            content: draft.content.clone(),
            date: short_date_label(ctx.now()),
        };

        self.notes
            .mutate(|notes| {
                notes.insert(0, note.clone());
                Some(())
            })
            .map_err(|err| storage_failure(MODULE, "note_create", err))?;

        info!(
            "event=note_create module={MODULE} status=ok subject={} count={}",
            note.subject.as_str(),
            self.notes.len()
        );
        ctx.advise("Note added");
        Ok(note)
    }

    /// Prefills an edit form for `id` and announces edit mode.
    pub fn begin_edit(&self, ctx: &AppContext, id: RecordId) -> Option<NoteDraft> {
        let note = self.get(id)?;
        ctx.announce("Editing note");
        Some(NoteDraft {
            title: note.title.clone(),
            subject: Some(note.subject),
            content: note.content.clone(),
        })
    }

    /// Replaces an existing note's fields. Unknown ids return `Ok(false)`.
    pub fn update(&mut self, ctx: &AppContext, id: RecordId, draft: &NoteDraft) -> ServiceResult<bool> {
        let subject = match draft.validate() {
            Ok(subject) => subject,
            Err(err) => return reject(ctx, MODULE, err),
        };

        let updated = self
            .notes
            .mutate(|notes| {
                let note = notes.iter_mut().find(|note| note.id == id)?;
                note.title = draft.title.clone();
                note.subject = subject;
                note.content = draft.content.clone();
                Some(())
            })
            .map_err(|err| storage_failure(MODULE, "note_update", err))?
            .is_some();

        if updated {
            info!("event=note_update module={MODULE} status=ok");
            ctx.advise("Note updated");
        }
        Ok(updated)
    }

    pub fn delete(&mut self, ctx: &AppContext, id: RecordId) -> ServiceResult<bool> {
        let deleted = self
            .notes
            .mutate(|notes| {
                let index = notes.iter().position(|note| note.id == id)?;
                notes.remove(index);
                Some(())
            })
            .map_err(|err| storage_failure(MODULE, "note_delete", err))?
            .is_some();

        if deleted {
            info!(
                "event=note_delete module={MODULE} status=ok count={}",
                self.notes.len()
            );
            ctx.announce("Note deleted");
        }
        Ok(deleted)
    }
}
