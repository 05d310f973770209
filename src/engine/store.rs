//! Committed entry store.
//!
//! The entry set is the single piece of mutable state a generation run
//! threads through every per-class walk. Commit and rollback are the
//! whole write contract: a commit either lands a complete entry or
//! rejects it, so availability checks always read a consistent set.

use thiserror::Error;

use crate::models::{EntryKey, TimetableEntry};

/// Commit rejected: the class already has an entry in that period.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("an entry already exists for {0}")]
pub struct DuplicateEntry(pub EntryKey);

/// The committed timetable entry set for one generation run.
///
/// Enforces the identity invariant — at most one entry per
/// `(class, period)` — and exposes the snapshot the conflict checks
/// and selection policies read.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<TimetableEntry>,
}

impl EntryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed entries, in commit order.
    pub fn entries(&self) -> &[TimetableEntry] {
        &self.entries
    }

    /// Commits an entry. Rejects a duplicate `(class, period)` key.
    pub fn commit(&mut self, entry: TimetableEntry) -> Result<(), DuplicateEntry> {
        let key = entry.key();
        if self.get(&key).is_some() {
            return Err(DuplicateEntry(key));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Rolls back the entry with the given key, returning it if present.
    pub fn remove(&mut self, key: &EntryKey) -> Option<TimetableEntry> {
        let idx = self.entries.iter().position(|e| e.key() == *key)?;
        Some(self.entries.remove(idx))
    }

    /// Finds the entry with the given key.
    pub fn get(&self, key: &EntryKey) -> Option<&TimetableEntry> {
        self.entries.iter().find(|e| e.key() == *key)
    }

    /// All entries for one class.
    pub fn entries_for_class(&self, class: &str) -> Vec<&TimetableEntry> {
        self.entries.iter().filter(|e| e.class == class).collect()
    }

    /// Number of committed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the store, yielding the entries in commit order.
    pub fn into_entries(self) -> Vec<TimetableEntry> {
        self.entries
    }
}
