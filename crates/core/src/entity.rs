//! Entity traits: identity + a serializable view of current state.

use crate::snapshot::Snapshot;
use crate::storage_key::StorageKey;

/// Entity marker + minimal interface.
///
/// Identity is derived from the entity's own fields; there is no surrogate key.
pub trait Entity {
    /// Human-readable identity (e.g. `"John Best-Budget"`).
    fn identity(&self) -> String;
}

/// Capability of an entity to describe itself as an ordered snapshot.
///
/// `snapshot()` must cover every field needed to rebuild the entity's
/// observable state. It is recomputed on every call.
pub trait Serializable: Entity {
    fn snapshot(&self) -> Snapshot;

    /// Key under which the snapshot is persisted.
    fn storage_key(&self) -> StorageKey {
        StorageKey::from_identity(&self.identity())
    }
}
