//! Contact entry collection with draft/edit flow and persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`EntryBook`] is the whole application state. The UI holds it in a single
//! `RwSignal` and every handler mutates it through `update`, which doubles as
//! the re-render trigger.
//!
//! DESIGN
//! ======
//! - The collection is mirrored in full to the store after each successful
//!   mutation, before control returns to the caller.
//! - Edit state is an explicit [`EditMode`] instead of a nullable id.
//! - Identifiers are millisecond timestamps clamped to be strictly greater
//!   than every id issued or loaded before, so two adds within the same
//!   millisecond still get distinct ids.

#[cfg(test)]
#[path = "entries_test.rs"]
mod entries_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::draft::{Draft, DraftField};
use crate::util::clock;
use crate::util::storage::{KeyValueStore, LocalStorage, load_json, save_json};

/// Store key holding the serialized collection.
pub const STORAGE_KEY: &str = "entries";

/// Unique entry identifier (creation time in epoch milliseconds).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub i64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One committed contact record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub email: String,
    pub number: String,
    pub date: String,
}

impl Entry {
    fn from_draft(id: EntryId, draft: Draft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            number: draft.number,
            date: draft.date,
        }
    }
}

/// Whether submission adds a new entry or updates an existing one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Idle,
    Editing(EntryId),
}

impl EditMode {
    /// Current edit target, if any.
    #[must_use]
    pub fn target(self) -> Option<EntryId> {
        match self {
            Self::Idle => None,
            Self::Editing(id) => Some(id),
        }
    }
}

/// Result of [`EntryBook::submit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(EntryId),
    Updated(EntryId),
    /// Draft incomplete or edit target gone; nothing was committed.
    Rejected,
}

/// Ordered contact collection bound to a persistent store.
#[derive(Clone, Debug)]
pub struct EntryBook<S> {
    store: S,
    key: String,
    entries: Vec<Entry>,
    draft: Draft,
    mode: EditMode,
    last_id: i64,
}

/// The entry book as used in the browser.
pub type ContactBook = EntryBook<LocalStorage>;

impl<S: KeyValueStore> EntryBook<S> {
    /// Load the collection stored under [`STORAGE_KEY`].
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, STORAGE_KEY)
    }

    /// Load the collection stored under `key`.
    ///
    /// An absent key, an unreachable store, or malformed data all start an
    /// empty collection.
    pub fn load_with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let entries = match load_json::<Vec<Entry>>(&store, &key) {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(e) => {
                leptos::logging::warn!("ignoring stored entries under {key:?}: {e}");
                Vec::new()
            }
        };
        leptos::logging::log!("loaded {} entries", entries.len());
        let last_id = entries.iter().map(|e| e.id.0).max().unwrap_or(0);
        Self {
            store,
            key,
            entries,
            draft: Draft::default(),
            mode: EditMode::Idle,
            last_id,
        }
    }

    /// Entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn find(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Label for the submit control.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            EditMode::Idle => "Add",
            EditMode::Editing(_) => "Update",
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn into_store(self) -> S {
        self.store
    }

    /// Replace one draft field.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Commit the draft using the current time for new identifiers.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.submit_at(clock::now_ms())
    }

    /// Commit the draft: add when idle, update the target when editing.
    ///
    /// On success the draft is cleared and the book returns to idle. An
    /// incomplete draft is rejected with no state change. If the edit target
    /// no longer exists the book drops back to idle and keeps the draft.
    pub fn submit_at(&mut self, now_ms: i64) -> SubmitOutcome {
        if !self.draft.is_complete() {
            return SubmitOutcome::Rejected;
        }
        let draft = self.draft.clone();
        let committed = match self.mode {
            EditMode::Idle => self.add(draft, now_ms).map(SubmitOutcome::Added),
            EditMode::Editing(id) => self.update(id, draft).then_some(SubmitOutcome::Updated(id)),
        };
        self.mode = EditMode::Idle;
        match committed {
            Some(outcome) => {
                self.draft.clear();
                outcome
            }
            None => SubmitOutcome::Rejected,
        }
    }

    /// Append a new entry built from `draft`.
    ///
    /// Returns the new id, or `None` when the draft is incomplete.
    pub fn add(&mut self, draft: Draft, now_ms: i64) -> Option<EntryId> {
        if !draft.is_complete() {
            return None;
        }
        let id = self.next_id(now_ms);
        self.entries.push(Entry::from_draft(id, draft));
        self.persist();
        Some(id)
    }

    /// Replace the data fields of entry `id` in place.
    ///
    /// Returns `false` when the draft is incomplete or `id` is not present.
    pub fn update(&mut self, id: EntryId, draft: Draft) -> bool {
        if !draft.is_complete() {
            return false;
        }
        let Some(slot) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        *slot = Entry::from_draft(id, draft);
        self.persist();
        true
    }

    /// Remove entry `id`. Deleting the edit target also abandons the edit.
    ///
    /// Returns `false` (and writes nothing) when `id` is not present.
    pub fn delete(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.mode == EditMode::Editing(id) {
            self.mode = EditMode::Idle;
            self.draft.clear();
        }
        if self.entries.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Load entry `id` into the draft and make it the edit target.
    ///
    /// Unknown ids leave the book untouched.
    pub fn begin_edit(&mut self, id: EntryId) -> bool {
        let Some(entry) = self.find(id) else {
            return false;
        };
        self.draft = Draft::from_entry(entry);
        self.mode = EditMode::Editing(id);
        true
    }

    fn next_id(&mut self, now_ms: i64) -> EntryId {
        let id = now_ms.max(self.last_id.saturating_add(1));
        self.last_id = id;
        EntryId(id)
    }

    fn persist(&mut self) {
        if let Err(e) = save_json(&mut self.store, &self.key, &self.entries) {
            leptos::logging::warn!("failed to persist {} entries: {e}", self.entries.len());
        }
    }
}
