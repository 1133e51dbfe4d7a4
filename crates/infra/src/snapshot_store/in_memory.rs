use std::collections::HashMap;
use std::sync::RwLock;

use ledgerbook_core::{Serializable, Snapshot, StorageKey};

use super::r#trait::{PersistError, PersistResult, SnapshotStore};

/// In-memory snapshot store.
///
/// Intended for tests/dev. Keeps the serialized JSON text so reads go through
/// the same encode/decode path as the file store.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    entries: RwLock<HashMap<StorageKey, String>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON stored under `key`, if any.
    pub fn raw(&self, key: &StorageKey) -> PersistResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| PersistError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    pub fn len(&self) -> PersistResult<usize> {
        let entries = self.entries.read().map_err(|_| PersistError::LockPoisoned)?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> PersistResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn save(&self, entity: &dyn Serializable) -> PersistResult<StorageKey> {
        let key = entity.storage_key();
        let json = serde_json::to_string(&entity.snapshot())?;

        let mut entries = self.entries.write().map_err(|_| PersistError::LockPoisoned)?;
        entries.insert(key.clone(), json);

        tracing::debug!(key = %key, "snapshot saved in memory");
        Ok(key)
    }

    fn load(&self, key: &StorageKey) -> PersistResult<Snapshot> {
        let json = self
            .raw(key)?
            .ok_or_else(|| PersistError::NotFound(key.clone()))?;
        Ok(serde_json::from_str(&json)?)
    }
}
