//! Infrastructure layer: snapshot stores and their configuration.

pub mod config;
pub mod snapshot_store;

pub use config::StoreConfig;
pub use snapshot_store::{
    FileStore, InMemorySnapshotStore, PersistError, PersistResult, SnapshotStore, restore, save,
};
