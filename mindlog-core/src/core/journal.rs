//! Observable journal state over an [`EntryStore`].

use crate::{EntryDraft, EntryStore, JournalEntry, KeyValueStore, MindlogError, Result};

/// How many times a failed persist is attempted before the error surfaces.
const PERSIST_ATTEMPTS: u32 = 3;

/// Lifecycle of a [`Journal`] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed but not yet loaded; mutations are rejected with
    /// [`MindlogError::NotReady`].
    Uninitialized,
    /// Initial load in progress.
    Loading,
    /// List populated (possibly empty); all operations available.
    Ready,
}

/// Handle returned by [`Journal::subscribe`], used to unsubscribe later.
pub type SubscriberId = usize;

type Subscriber = Box<dyn FnMut(&[JournalEntry])>;

/// The in-memory authority over the entry list, reconciled with the
/// [`EntryStore`] on every mutation and observable by presentation layers.
///
/// A `Journal` is constructed explicitly around a backend and handed to
/// consumers by reference; there is no global instance. It is the sole
/// writer to its store. Mutations take `&mut self`, so at most one is in
/// flight per instance and a staged read-modify-write can never interleave
/// with another.
///
/// Every mutation stages the change, persists it, and only then commits it
/// to the observable list, so a failed persist leaves memory and storage
/// identical. After each committed change all subscribers are invoked
/// synchronously with the new list.
///
/// ```
/// use mindlog_core::{EntryDraft, Journal, MemoryStore, Mood};
///
/// let mut journal = Journal::new(MemoryStore::new());
/// journal.initialize().unwrap();
///
/// let draft = EntryDraft {
///     text: "slept well".to_string(),
///     mood: Some(Mood::Good),
///     sleep: Some("8h".to_string()),
///     social: None,
/// };
/// journal.add(draft).unwrap();
/// assert_eq!(journal.entries().len(), 1);
/// ```
pub struct Journal<S: KeyValueStore> {
    store: EntryStore<S>,
    entries: Vec<JournalEntry>,
    lifecycle: Lifecycle,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber_id: SubscriberId,
}

impl<S: KeyValueStore> Journal<S> {
    /// Creates an uninitialized journal over `backend`. Call
    /// [`initialize`](Self::initialize) before mutating.
    pub fn new(backend: S) -> Self {
        Self {
            store: EntryStore::new(backend),
            entries: Vec::new(),
            lifecycle: Lifecycle::Uninitialized,
            subscribers: Vec::new(),
            next_subscriber_id: 0,
        }
    }

    /// Loads the persisted list and transitions to [`Lifecycle::Ready`].
    ///
    /// Calling this again on a ready journal refreshes the list from the
    /// store. Subscribers are notified after a successful load.
    ///
    /// # Errors
    ///
    /// On a failed load the journal reverts to [`Lifecycle::Uninitialized`]
    /// so the caller can retry; the error is surfaced rather than replaced
    /// by an empty list, since an unreadable store may still hold data.
    pub fn initialize(&mut self) -> Result<()> {
        self.lifecycle = Lifecycle::Loading;
        match self.store.load_all() {
            Ok(entries) => {
                self.entries = entries;
                self.lifecycle = Lifecycle::Ready;
                self.notify();
                Ok(())
            }
            Err(e) => {
                self.lifecycle = Lifecycle::Uninitialized;
                Err(e)
            }
        }
    }

    /// Drops all subscribers and entries and returns to
    /// [`Lifecycle::Uninitialized`]. The persisted list is untouched.
    pub fn dispose(&mut self) {
        self.subscribers.clear();
        self.entries.clear();
        self.lifecycle = Lifecycle::Uninitialized;
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// The current list, newest entry first.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Creates an entry from `draft` and persists it at the head of the
    /// list. Returns the new entry's ID.
    ///
    /// # Errors
    ///
    /// Returns [`MindlogError::ValidationFailed`] before any state change
    /// when the draft has no mood, [`MindlogError::NotReady`] before the
    /// initial load, or the store error when persisting fails after the
    /// bounded retries. On failure the in-memory list is unchanged.
    pub fn add(&mut self, draft: EntryDraft) -> Result<String> {
        self.ensure_ready()?;
        let mood = draft.mood.ok_or_else(|| {
            MindlogError::ValidationFailed("an entry needs a mood".to_string())
        })?;

        let entry = JournalEntry::new(draft.text, mood, draft.sleep, draft.social);
        let id = entry.id.clone();

        let entries = self.with_retries(|store| store.append(entry.clone()))?;
        self.entries = entries;
        self.notify();
        Ok(id)
    }

    /// Removes the entry with `id`, if present, from memory and storage.
    ///
    /// A second call with the same `id` is a no-op: nothing is persisted
    /// and no subscriber is notified.
    ///
    /// # Errors
    ///
    /// Returns [`MindlogError::NotReady`] before the initial load, or the
    /// store error when persisting fails. On failure the entry stays in
    /// the list.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        self.ensure_ready()?;
        if self.get(id).is_none() {
            return Ok(());
        }

        let staged: Vec<JournalEntry> = self
            .entries
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        self.with_retries(|store| store.save_all(&staged))?;
        self.entries = staged;
        self.notify();
        Ok(())
    }

    /// Flips the `favorite` flag of the entry with `id`, if present.
    /// Order and every other field are preserved; unknown IDs are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`MindlogError::NotReady`] before the initial load, or the
    /// store error when persisting fails. On failure the flag is unchanged.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<()> {
        self.ensure_ready()?;
        if self.get(id).is_none() {
            return Ok(());
        }

        let mut staged = self.entries.clone();
        for entry in staged.iter_mut().filter(|e| e.id == id) {
            entry.favorite = !entry.favorite;
        }
        self.with_retries(|store| store.save_all(&staged))?;
        self.entries = staged;
        self.notify();
        Ok(())
    }

    /// Registers `callback` to be invoked with the entry list after every
    /// committed change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriberId
    where
        F: FnMut(&[JournalEntry]) + 'static,
    {
        let id = self.next_subscriber_id;
        self.next_subscriber_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a previously registered subscriber. Unknown IDs are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    fn ensure_ready(&self) -> Result<()> {
        match self.lifecycle {
            Lifecycle::Ready => Ok(()),
            _ => Err(MindlogError::NotReady),
        }
    }

    fn with_retries<T>(&mut self, mut persist: impl FnMut(&mut EntryStore<S>) -> Result<T>) -> Result<T> {
        let mut attempt = 1;
        loop {
            match persist(&mut self.store) {
                Ok(value) => return Ok(value),
                Err(e) if attempt < PERSIST_ATTEMPTS => {
                    log::warn!("persist attempt {attempt} failed, retrying: {e}");
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn notify(&mut self) {
        let entries = &self.entries;
        for (_, callback) in self.subscribers.iter_mut() {
            callback(entries);
        }
    }
}
