//! Snapshot persistence boundary.
//!
//! Stores write an entity's [`Snapshot`](ledgerbook_core::Snapshot) under the
//! [`StorageKey`](ledgerbook_core::StorageKey) derived from its identity.
//! Saves overwrite unconditionally; colliding keys are last-write-wins.

pub mod file;
pub mod in_memory;
pub mod r#trait;

pub use file::{FileStore, save};
pub use in_memory::InMemorySnapshotStore;
pub use r#trait::{PersistError, PersistResult, SnapshotStore, restore};
