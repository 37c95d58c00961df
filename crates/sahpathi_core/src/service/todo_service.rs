//! To-do use-case service.
//!
//! # Responsibility
//! - Add, toggle and delete to-do items.
//! - Celebrate completions with a motivational line and a haptic pulse.
//!
//! # Invariants
//! - New items are inserted at the front.
//! - Only a transition to completed triggers the celebration.

use super::{reject, storage_failure, ServiceResult};
use crate::assistant::responses::COMPLETION_QUOTES;
use crate::context::AppContext;
use crate::model::id::{new_record_id, RecordId};
use crate::model::todo::{TodoDraft, TodoItem};
use crate::platform::haptics::{TASK_ADDED_PATTERN, TASK_COMPLETED_PATTERN};
use crate::store::{KeyValueStore, PersistedList, TODOS_KEY};
use crate::view::todos::{filter_todos, summarize, StatusFilter, TodoSummary};
use log::info;
use rand::seq::SliceRandom;

const MODULE: &str = "todos";

pub struct TodoService<S: KeyValueStore> {
    todos: PersistedList<TodoItem, S>,
}

impl<S: KeyValueStore> TodoService<S> {
    pub fn hydrate(store: S) -> Self {
        Self {
            todos: PersistedList::hydrate(store, TODOS_KEY, Vec::new),
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        self.todos.items()
    }

    pub fn filtered(&self, filter: StatusFilter) -> Vec<&TodoItem> {
        filter_todos(self.todos.items(), filter)
    }

    pub fn summary(&self) -> TodoSummary {
        summarize(self.todos.items())
    }

    pub fn create(&mut self, ctx: &AppContext, draft: &TodoDraft) -> ServiceResult<TodoItem> {
        if let Err(err) = draft.validate() {
            return reject(ctx, MODULE, err);
        }

        let item = TodoItem {
            id: new_record_id(),
            text: draft.text.clone(),
            completed: false,
            priority: draft.priority,
            due_date: draft.due_date,
        };

        self.todos
            .mutate(|todos| {
                todos.insert(0, item.clone());
                Some(())
            })
            .map_err(|err| storage_failure(MODULE, "todo_create", err))?;

        info!(
            "event=todo_create module={MODULE} status=ok priority={} count={}",
            item.priority.as_str(),
            self.todos.len()
        );
        if ctx.settings.voice_enabled {
            ctx.announce("Task added");
            ctx.pulse(TASK_ADDED_PATTERN);
        }
        Ok(item)
    }

    /// Flips completion. Returns the new state, or `None` for unknown ids.
    pub fn toggle(&mut self, ctx: &AppContext, id: RecordId) -> ServiceResult<Option<bool>> {
        let completed = self
            .todos
            .mutate(|todos| {
                let item = todos.iter_mut().find(|item| item.id == id)?;
                item.completed = !item.completed;
                Some(item.completed)
            })
            .map_err(|err| storage_failure(MODULE, "todo_toggle", err))?;

        if completed == Some(true) {
            info!("event=todo_toggle module={MODULE} status=ok completed=true");
            if ctx.settings.voice_enabled {
                let quote = ctx
                    .with_random(|rng| COMPLETION_QUOTES.choose(rng).copied())
                    .unwrap_or_default();
                ctx.announce(&format!("Task completed! {quote}"));
            }
            ctx.pulse(TASK_COMPLETED_PATTERN);
        } else if completed == Some(false) {
            info!("event=todo_toggle module={MODULE} status=ok completed=false");
        }
        Ok(completed)
    }

    pub fn delete(&mut self, ctx: &AppContext, id: RecordId) -> ServiceResult<bool> {
        let deleted = self
            .todos
            .mutate(|todos| {
                let index = todos.iter().position(|item| item.id == id)?;
                todos.remove(index);
                Some(())
            })
            .map_err(|err| storage_failure(MODULE, "todo_delete", err))?
            .is_some();

        if deleted {
            info!(
                "event=todo_delete module={MODULE} status=ok count={}",
                self.todos.len()
            );
            ctx.announce("Task deleted");
        }
        Ok(deleted)
    }
}
