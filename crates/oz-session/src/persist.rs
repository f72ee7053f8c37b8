//! Save-state persistence.
//!
//! The save is a single JSON snapshot stored under one fixed key. Stores are
//! injected so the session never touches the filesystem directly; writes are
//! idempotent full-state snapshots, so no transaction semantics are needed.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// The fixed key the snapshot lives under.
pub const SAVE_KEY: &str = "onyzuka_chrono_save";

/// Result type for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Errors a save store can report.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The underlying storage failed.
    #[error("storage failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Key-value storage for save snapshots.
pub trait SaveStore {
    /// Read the snapshot stored under `key`, if any.
    fn load(&self, key: &str) -> PersistResult<Option<String>>;

    /// Write `snapshot` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, snapshot: &str) -> PersistResult<()>;
}

/// In-memory store, used in tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with one snapshot.
    pub fn with_snapshot(key: &str, snapshot: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), snapshot.to_string());
        store
    }
}

impl SaveStore for MemoryStore {
    fn load(&self, key: &str) -> PersistResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, snapshot: &str) -> PersistResult<()> {
        self.entries.insert(key.to_string(), snapshot.to_string());
        Ok(())
    }
}

/// File-backed store keeping each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// A store rooted at the given directory. The directory is created on
    /// the first write, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SaveStore for FileStore {
    fn load(&self, key: &str) -> PersistResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, key: &str, snapshot: &str) -> PersistResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), snapshot)?;
        Ok(())
    }
}
