use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use ledgerbook_core::{DomainError, DomainResult, Serializable, Snapshot, StorageKey};

pub type PersistResult<T> = Result<T, PersistError>;

#[derive(Debug, Error)]
pub enum PersistError {
    /// Directory missing or unwritable, disk full, permission denied.
    #[error("io error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no snapshot stored under key '{0}'")]
    NotFound(StorageKey),

    #[error("invalid store configuration: {0}")]
    InvalidConfig(String),

    #[error("store lock poisoned")]
    LockPoisoned,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl PersistError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Keyed snapshot storage.
///
/// Implementations must not retry or swallow failures; every error reaches
/// the caller as-is.
pub trait SnapshotStore: Send + Sync {
    /// Persist `entity.snapshot()` under `entity.storage_key()`, replacing
    /// whatever was stored there. Returns the key used.
    fn save(&self, entity: &dyn Serializable) -> PersistResult<StorageKey>;

    /// Read back the snapshot stored under `key`.
    fn load(&self, key: &StorageKey) -> PersistResult<Snapshot>;
}

impl<S> SnapshotStore for Arc<S>
where
    S: SnapshotStore + ?Sized,
{
    fn save(&self, entity: &dyn Serializable) -> PersistResult<StorageKey> {
        (**self).save(entity)
    }

    fn load(&self, key: &StorageKey) -> PersistResult<Snapshot> {
        (**self).load(key)
    }
}

/// Load the snapshot under `key` and rebuild an entity from it.
///
/// `rebuild` is typically a `from_snapshot` constructor; its validation errors
/// surface as [`PersistError::Domain`].
pub fn restore<S, T, F>(store: &S, key: &StorageKey, rebuild: F) -> PersistResult<T>
where
    S: SnapshotStore + ?Sized,
    F: FnOnce(&Snapshot) -> DomainResult<T>,
{
    let snapshot = store.load(key)?;
    Ok(rebuild(&snapshot)?)
}
