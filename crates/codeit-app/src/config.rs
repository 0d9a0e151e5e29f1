use std::path::PathBuf;

use crate::cli::Cli;
use codeit_api::resolve_base_url;

const APP_DIR: &str = ".codeit-chat";
const STORAGE_SUBDIR: &str = "storage";

/// Where the session and history are kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    Directory(PathBuf),
    Ephemeral,
}

/// Settings resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub storage: StorageConfig,
}

impl ClientConfig {
    /// `--ephemeral` beats any storage directory, including one from the
    /// environment. Without a home directory the conversation is kept in
    /// memory only.
    pub fn from_cli(cli: &Cli) -> Self {
        let storage = if cli.ephemeral {
            StorageConfig::Ephemeral
        } else {
            match cli.storage_dir.clone().or_else(default_storage_dir) {
                Some(dir) => StorageConfig::Directory(dir),
                None => {
                    log::warn!("No home directory found, history will not be saved");
                    StorageConfig::Ephemeral
                }
            }
        };

        Self {
            api_base_url: resolve_base_url(cli.api_base_url.as_deref()),
            storage,
        }
    }
}

/// `~/.codeit-chat/storage`
pub fn default_storage_dir() -> Option<PathBuf> {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()?;

    Some(PathBuf::from(home_dir).join(APP_DIR).join(STORAGE_SUBDIR))
}
