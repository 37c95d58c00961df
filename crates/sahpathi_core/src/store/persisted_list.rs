//! Whole-collection persistence for one module slot.
//!
//! # Responsibility
//! - Hydrate a module collection from its slot, seeding defaults when absent.
//! - Write the full collection back after every accepted mutation.
//!
//! # Invariants
//! - `load_collection` never fails: corrupt payloads and unavailable storage
//!   degrade to an empty collection.
//! - `PersistedList::mutate` commits in memory only after the write succeeded,
//!   so a rejected write leaves the in-memory collection untouched.
//! - A mutation closure returning `None` is a no-op and performs no write.

use super::kv::{KeyValueStore, StoreResult};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// How a slot read resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Slot held a decodable collection.
    Loaded,
    /// Slot was never written (or was cleared).
    Missing,
    /// Slot existed but could not be decoded.
    Corrupt,
    /// Backend refused the read.
    Unavailable,
}

/// Reads the collection stored under `key`.
///
/// Returns an empty collection for every outcome other than `Loaded`.
pub fn load_collection<T, S>(store: &S, key: &str) -> (Vec<T>, LoadOutcome)
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let payload = match store.get(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return (Vec::new(), LoadOutcome::Missing),
        Err(err) => {
            warn!(
                "event=slot_load module=store status=error slot={key} error_code=storage_unavailable error={err}"
            );
            return (Vec::new(), LoadOutcome::Unavailable);
        }
    };

    match serde_json::from_str::<Vec<T>>(&payload) {
        Ok(items) => {
            debug!(
                "event=slot_load module=store status=ok slot={key} count={}",
                items.len()
            );
            (items, LoadOutcome::Loaded)
        }
        Err(err) => {
            warn!(
                "event=slot_load module=store status=error slot={key} error_code=corrupt_payload error={err}"
            );
            (Vec::new(), LoadOutcome::Corrupt)
        }
    }
}

/// Overwrites the slot under `key` with the full serialized collection.
pub fn save_collection<T, S>(store: &S, key: &str, items: &[T]) -> StoreResult<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let payload = serde_json::to_string(items)?;
    store.set(key, &payload)?;
    debug!(
        "event=slot_save module=store status=ok slot={key} count={}",
        items.len()
    );
    Ok(())
}

/// In-memory collection mirrored to one storage slot.
pub struct PersistedList<T, S> {
    key: &'static str,
    store: S,
    items: Vec<T>,
    outcome: LoadOutcome,
}

impl<T, S> PersistedList<T, S>
where
    T: Serialize + DeserializeOwned + Clone,
    S: KeyValueStore,
{
    /// Hydrates from `key`, calling `seed` only when the slot was never written.
    ///
    /// Seeded collections are written immediately; a failed seed write is
    /// logged and the seeds stay in memory.
    pub fn hydrate(store: S, key: &'static str, seed: impl FnOnce() -> Vec<T>) -> Self {
        let (mut items, outcome) = load_collection(&store, key);
        if outcome == LoadOutcome::Missing {
            items = seed();
            if !items.is_empty() {
                if let Err(err) = save_collection(&store, key, &items) {
                    warn!(
                        "event=slot_seed module=store status=error slot={key} error={err}"
                    );
                }
            }
        }

        Self {
            key,
            store,
            items,
            outcome,
        }
    }

    /// Hydrates from `key`, showing `fallback` while the collection is empty.
    ///
    /// Unlike `hydrate`, the fallback is never written; it reaches storage
    /// only together with the next accepted mutation.
    pub fn hydrate_or(store: S, key: &'static str, fallback: impl FnOnce() -> Vec<T>) -> Self {
        let (mut items, outcome) = load_collection(&store, key);
        if items.is_empty() {
            items = fallback();
        }

        Self {
            key,
            store,
            items,
            outcome,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Outcome of the initial hydrate.
    pub fn load_outcome(&self) -> LoadOutcome {
        self.outcome
    }

    /// Applies `change` to a copy, persists it, then commits.
    ///
    /// `change` returns `None` to signal a no-op; nothing is written then.
    pub fn mutate<R>(
        &mut self,
        change: impl FnOnce(&mut Vec<T>) -> Option<R>,
    ) -> StoreResult<Option<R>> {
        let mut candidate = self.items.clone();
        let Some(result) = change(&mut candidate) else {
            return Ok(None);
        };

        save_collection(&self.store, self.key, &candidate)?;
        self.items = candidate;
        Ok(Some(result))
    }

    /// Removes the slot entirely and replaces the in-memory collection.
    pub fn reset(&mut self, replacement: Vec<T>) -> StoreResult<()> {
        self.store.remove(self.key)?;
        self.items = replacement;
        Ok(())
    }
}
