use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;

use ledgerbook_core::{Serializable, Snapshot, StorageKey};

use super::r#trait::{PersistError, PersistResult, SnapshotStore};
use crate::config::StoreConfig;

/// Save `entity` as `<base_dir>/<storage-key>.json` and return the path written.
///
/// Fails with [`PersistError::Io`] if `base_dir` is missing or not writable.
pub fn save(entity: &dyn Serializable, base_dir: &Path) -> PersistResult<PathBuf> {
    FileStore::new(base_dir).write_snapshot(&entity.storage_key(), &entity.snapshot())
}

/// One JSON file per entity in a caller-supplied directory.
///
/// With `atomic_writes` on, the snapshot is written to a temp file in the same
/// directory and renamed over the target, so readers never see a partial file.
/// Concurrent saves to the same key are last-write-wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
    atomic_writes: bool,
}

impl FileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            atomic_writes: true,
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(&config.data_dir).with_atomic_writes(config.atomic_writes)
    }

    pub fn with_atomic_writes(mut self, atomic_writes: bool) -> Self {
        self.atomic_writes = atomic_writes;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn path_for(&self, key: &StorageKey) -> PathBuf {
        self.base_dir.join(key.file_name())
    }

    /// Serialize `snapshot` and write it under `key`, replacing any existing file.
    pub fn write_snapshot(&self, key: &StorageKey, snapshot: &Snapshot) -> PersistResult<PathBuf> {
        let path = self.path_for(key);
        let json = serde_json::to_string(snapshot)?;

        if self.atomic_writes {
            self.write_atomic(&path, json.as_bytes())?;
        } else {
            fs::write(&path, json.as_bytes()).map_err(|e| PersistError::io(&path, e))?;
        }

        tracing::debug!(key = %key, path = %path.display(), atomic = self.atomic_writes, "snapshot saved");
        Ok(path)
    }

    fn write_atomic(&self, path: &Path, bytes: &[u8]) -> PersistResult<()> {
        let mut tmp = temp_builder()
            .tempfile_in(&self.base_dir)
            .map_err(|e| PersistError::io(&self.base_dir, e))?;
        tmp.write_all(bytes)
            .map_err(|e| PersistError::io(tmp.path(), e))?;
        tmp.persist(path)
            .map_err(|e| PersistError::io(path, e.error))?;
        Ok(())
    }
}

/// Temp files get the same mode a plain `fs::write` would (0666 minus umask),
/// not tempfile's owner-only default.
#[cfg(unix)]
fn temp_builder() -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_builder() -> Builder<'static, 'static> {
    Builder::new()
}

impl SnapshotStore for FileStore {
    fn save(&self, entity: &dyn Serializable) -> PersistResult<StorageKey> {
        let key = entity.storage_key();
        self.write_snapshot(&key, &entity.snapshot())?;
        Ok(key)
    }

    fn load(&self, key: &StorageKey) -> PersistResult<Snapshot> {
        let path = self.path_for(key);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(PersistError::NotFound(key.clone()));
            }
            Err(e) => return Err(PersistError::io(&path, e)),
        };

        let snapshot = serde_json::from_str(&json)?;
        tracing::debug!(key = %key, path = %path.display(), "snapshot loaded");
        Ok(snapshot)
    }
}
