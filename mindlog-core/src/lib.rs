//! Core library for Mindlog, a local-first mood journaling application.
//!
//! The primary entry point is [`Journal`], the in-memory authority over the
//! entry list. It is constructed around a [`KeyValueStore`] backend (the
//! SQLite-backed [`Storage`] on device, [`MemoryStore`] in tests), loaded
//! once via [`Journal::initialize`], and mutated through its `add`, `delete`
//! and `toggle_favorite` operations. Presentation layers observe committed
//! changes via [`Journal::subscribe`].
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    entry::{EntryDraft, JournalEntry, Mood},
    error::{MindlogError, Result},
    journal::{Journal, Lifecycle, SubscriberId},
    storage::{KeyValueStore, MemoryStore, Storage},
    store::EntryStore,
};
