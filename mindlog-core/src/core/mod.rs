//! Internal domain modules for the Mindlog core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod entry;
pub mod error;
pub mod journal;
pub mod storage;
pub mod store;

#[doc(inline)]
pub use entry::{EntryDraft, JournalEntry, Mood};
#[doc(inline)]
pub use error::{MindlogError, Result};
#[doc(inline)]
pub use journal::{Journal, Lifecycle, SubscriberId};
#[doc(inline)]
pub use storage::{KeyValueStore, MemoryStore, Storage};
#[doc(inline)]
pub use store::EntryStore;
