//! Store configuration loaded from the environment.
//!
//! - `LEDGERBOOK_DATA_DIR`: directory snapshots are written to (default `./data`)
//! - `LEDGERBOOK_ATOMIC_WRITES`: `true`/`false`/`1`/`0` (default `true`)

use std::path::PathBuf;

use crate::snapshot_store::{PersistError, PersistResult};

pub const DATA_DIR_VAR: &str = "LEDGERBOOK_DATA_DIR";
pub const ATOMIC_WRITES_VAR: &str = "LEDGERBOOK_ATOMIC_WRITES";

const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub atomic_writes: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            atomic_writes: true,
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> PersistResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a closure over a map).
    pub fn from_lookup<F>(lookup: F) -> PersistResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_dir = match lookup(DATA_DIR_VAR) {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => {
                tracing::debug!(
                    "{DATA_DIR_VAR} not set; using {}",
                    defaults.data_dir.display()
                );
                defaults.data_dir
            }
        };

        let atomic_writes = match lookup(ATOMIC_WRITES_VAR) {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                PersistError::InvalidConfig(format!(
                    "{ATOMIC_WRITES_VAR} must be true/false/1/0, got '{raw}'"
                ))
            })?,
            None => defaults.atomic_writes,
        };

        Ok(Self {
            data_dir,
            atomic_writes,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
