//! Durable list persistence for journal entries over a key-value backend.

use crate::{JournalEntry, KeyValueStore, Result};

/// The single key the whole entry list is stored under.
pub(crate) const ENTRIES_KEY: &str = "journal_entries";

/// Persists the entry list as one JSON array under a single well-known key.
///
/// Every mutation rewrites the entire collection. That is acceptable at
/// personal-journal scale (low thousands of entries) and keeps the backend
/// contract to a single get/set pair.
///
/// The persisted order is newest-first: [`append`](Self::append) prepends,
/// so the stored list always matches the display order and a reload
/// reproduces it without any reordering step.
pub struct EntryStore<S> {
    backend: S,
}

impl<S: KeyValueStore> EntryStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Reads the persisted list, or an empty list when nothing has been
    /// stored yet.
    ///
    /// # Errors
    ///
    /// Propagates backend failures, and returns
    /// [`crate::MindlogError::Json`] when the stored value is corrupt. A
    /// failed load is never silently replaced by an empty list.
    pub fn load_all(&self) -> Result<Vec<JournalEntry>> {
        match self.backend.get(ENTRIES_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Prepends `entry` to the persisted list and returns the updated list.
    ///
    /// # Errors
    ///
    /// Propagates backend read/write failures; the stored list is untouched
    /// when the write fails.
    pub fn append(&mut self, entry: JournalEntry) -> Result<Vec<JournalEntry>> {
        let mut entries = self.load_all()?;
        entries.insert(0, entry);
        self.save_all(&entries)?;
        Ok(entries)
    }

    /// Overwrites the persisted list wholesale.
    pub fn save_all(&mut self, entries: &[JournalEntry]) -> Result<()> {
        let json = serde_json::to_string(entries)?;
        self.backend.set(ENTRIES_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, MindlogError, Mood};

    fn entry(text: &str) -> JournalEntry {
        JournalEntry::new(text.to_string(), Mood::Good, None, None)
    }

    #[test]
    fn test_load_all_empty_store() {
        let store = EntryStore::new(MemoryStore::new());
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_prepends() {
        let mut store = EntryStore::new(MemoryStore::new());

        store.append(entry("first")).unwrap();
        let entries = store.append(entry("second")).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "second");
        assert_eq!(entries[1].text, "first");

        // The returned list is exactly what a reload produces
        assert_eq!(store.load_all().unwrap(), entries);
    }

    #[test]
    fn test_save_all_overwrites() {
        let mut store = EntryStore::new(MemoryStore::new());

        store.append(entry("first")).unwrap();
        store.append(entry("second")).unwrap();

        let kept = vec![entry("only")];
        store.save_all(&kept).unwrap();

        assert_eq!(store.load_all().unwrap(), kept);
    }

    #[test]
    fn test_load_all_corrupt_value() {
        let mut backend = MemoryStore::new();
        backend.set(ENTRIES_KEY, "not json").unwrap();

        let store = EntryStore::new(backend);
        assert!(matches!(store.load_all(), Err(MindlogError::Json(_))));
    }
}
