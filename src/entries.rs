use crate::{
    error::{Result, StoreError},
    store::JsonStore,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

pub const FILE_NAME: &str = "entries.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub mood: String,
    pub journal_entry: String,
}

impl JournalEntry {
    pub fn new(mood: impl Into<String>, journal_entry: impl Into<String>) -> Self {
        Self {
            mood: mood.into(),
            journal_entry: journal_entry.into(),
        }
    }
}

/// The journal: every entry in the order it was written, mirrored to disk
/// after each change.
pub struct EntryLog {
    store: JsonStore<JournalEntry>,
    entries: Vec<JournalEntry>,
}

impl EntryLog {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = JsonStore::new(path);
        let entries = store.load()?;

        Ok(Self { store, entries })
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends `entry` and rewrites the store. If the write fails the entry
    /// stays in memory.
    pub fn push(&mut self, entry: JournalEntry) -> Result<()> {
        info!(mood = %entry.mood, "adding journal entry");
        self.entries.push(entry);
        self.store.save(&self.entries)
    }

    /// Removes the entry at `index` (zero-based) and rewrites the store.
    pub fn remove(&mut self, index: usize) -> Result<JournalEntry> {
        if index >= self.entries.len() {
            return Err(StoreError::OutOfRange {
                index,
                len: self.entries.len(),
            });
        }

        let removed = self.entries.remove(index);
        info!(index, mood = %removed.mood, "removed journal entry");
        self.store.save(&self.entries)?;

        Ok(removed)
    }
}
