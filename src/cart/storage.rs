//! Cart Persistence Adapters
//!
//! The browser profile's localStorage slot, generalized to a small
//! key-value trait: the store serializes the whole cart into a single
//! string value under a fixed key and reads it back on startup. Two
//! adapters: a JSON-file directory for the server binary and a DashMap
//! slot table for tests.

use dashmap::DashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The fixed slot the cart lives under.
pub const CART_STORAGE_KEY: &str = "lapstone-cart";

/// Failure writing or removing a slot. Reads never fail: a missing or
/// unreadable slot is reported as absent.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o failure: {0}")]
    Io(#[from] io::Error),
}

/// Durable key-value slots for serialized state. Implementations must
/// round-trip values byte-exactly.
pub trait CartStorage: Send + Sync {
    /// Returns the value under `key`, or `None` when absent/unreadable.
    fn read(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the slot; removing an absent slot is a no-op.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// File-backed adapter
// =============================================================================

/// One JSON file per key under a state directory. The durable adapter
/// the server runs with.
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Opens (and creates, if needed) the state directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// The directory this adapter writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl CartStorage for JsonFileStorage {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.slot_path(key)).ok()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.slot_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

// =============================================================================
// In-memory adapter
// =============================================================================

/// Ephemeral slot table. DashMap keeps the adapter `Sync` without an
/// external mutex.
#[derive(Default)]
pub struct MemoryStorage {
    slots: DashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.slots.get(key).map(|v| v.value().clone())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.slots.remove(key);
        Ok(())
    }
}
