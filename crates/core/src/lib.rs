//! `ledgerbook-core` — building blocks for persistable domain entities.
//!
//! This crate contains **pure domain** primitives (no IO). Writing snapshots to
//! disk lives in `ledgerbook-infra`.

pub mod entity;
pub mod error;
pub mod snapshot;
pub mod storage_key;
pub mod value_object;

pub use entity::{Entity, Serializable};
pub use error::{DomainError, DomainResult};
pub use snapshot::Snapshot;
pub use storage_key::{StorageKey, normalize};
pub use value_object::ValueObject;
