//! Local persistence for codeit-chat
//!
//! A small key-value storage seam ([`KeyValueStorage`]) with in-memory and
//! file-backed implementations, plus the [`SessionStore`] that reads and
//! writes the session id and conversation history through it.

mod file_storage;
mod memory;
mod session_store;

pub use file_storage::FileStorage;
pub use memory::MemoryStorage;
pub use session_store::SessionStore;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode value for key {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value storage, the persistence seam of the client.
///
/// Implementations must be usable from any task; all methods take `&self`.
pub trait KeyValueStorage: Send + Sync {
    /// Stored value for `key`, or `None` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Remove every key
    fn clear(&self) -> Result<(), StorageError>;
}
