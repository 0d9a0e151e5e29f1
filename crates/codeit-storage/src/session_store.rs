use std::sync::Arc;

use codeit_types::{ConversationHistory, SessionId, HISTORY_KEY, SESSION_KEY};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{KeyValueStorage, StorageError};

/// JSON persistence of the session id and conversation history.
///
/// Reads never fail: anything unreadable yields the caller's fallback.
/// Writes hand storage failures back to the caller.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &Arc<dyn KeyValueStorage> {
        &self.storage
    }

    /// Decode the JSON stored under `key`, or return `fallback`
    pub fn read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let raw = match self.storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("No stored value for {}, using default", key);
                return fallback;
            }
            Err(e) => {
                log::warn!("Failed to read local storage key {}: {}", key, e);
                return fallback;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to parse local storage key {}: {}", key, e);
                fallback
            }
        }
    }

    /// Encode `value` as JSON and store it under `key`
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.storage.set(key, &json)
    }

    pub fn load_session_id(&self) -> SessionId {
        self.read(SESSION_KEY, SessionId::NoSession)
    }

    pub fn load_history(&self) -> ConversationHistory {
        self.read(HISTORY_KEY, Vec::new())
    }

    pub fn save_session_id(&self, session_id: &SessionId) -> Result<(), StorageError> {
        self.write(SESSION_KEY, session_id)
    }

    pub fn save_history(&self, history: &ConversationHistory) -> Result<(), StorageError> {
        self.write(HISTORY_KEY, history)
    }

    /// Rewrite both persisted entries in full
    pub fn save_snapshot(
        &self,
        session_id: &SessionId,
        history: &ConversationHistory,
    ) -> Result<(), StorageError> {
        self.save_session_id(session_id)?;
        self.save_history(history)
    }
}
