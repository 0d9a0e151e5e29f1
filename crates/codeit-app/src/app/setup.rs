use std::sync::Arc;

use codeit_api::HttpChatbotClient;
use codeit_chat::ChatOrchestrator;
use codeit_storage::{FileStorage, KeyValueStorage, MemoryStorage, SessionStore};
use colored::Colorize;

use crate::config::{ClientConfig, StorageConfig};

/// Open the configured storage. A directory that cannot be opened degrades
/// to memory-only storage: the conversation still works, it just is not kept.
pub fn open_storage(storage: &StorageConfig) -> Arc<dyn KeyValueStorage> {
    match storage {
        StorageConfig::Ephemeral => Arc::new(MemoryStorage::new()),
        StorageConfig::Directory(dir) => match FileStorage::open(dir) {
            Ok(storage) => {
                log::debug!("Using storage directory {}", storage.dir().display());
                Arc::new(storage)
            }
            Err(e) => {
                log::warn!("Local storage unavailable, history will not be saved: {}", e);
                eprintln!(
                    "{} {}",
                    "⚠️".yellow(),
                    format!("Could not open {}; history will not be saved.", dir.display()).yellow()
                );
                Arc::new(MemoryStorage::new())
            }
        },
    }
}

/// Wire the HTTP client and storage into an orchestrator
pub fn build_orchestrator(config: &ClientConfig) -> Arc<ChatOrchestrator> {
    let api = Arc::new(HttpChatbotClient::new(&config.api_base_url));
    let store = SessionStore::new(open_storage(&config.storage));
    Arc::new(ChatOrchestrator::new(api, store))
}
