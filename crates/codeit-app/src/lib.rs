//! CodeIT Chat Application Library
//!
//! Terminal client for the CodeIT chatbot service: command line, configuration,
//! logging setup, the interactive REPL and the text rendering of a conversation.

// Re-export workspace crates
pub use codeit_api::{self as api, ChatbotApi, HttpChatbotClient};
pub use codeit_chat::{self as chat, ChatOrchestrator, SendOutcome};
pub use codeit_storage::{self as storage, FileStorage, MemoryStorage, SessionStore};
pub use codeit_types::{self as types, ClientState, ConversationTurn, Role, SessionId};

// Local modules
pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;

// Re-exports from local modules
pub use app::{build_orchestrator, run_command, run_repl_mode};
pub use cli::{Cli, Commands};
pub use config::{ClientConfig, StorageConfig};
pub use logging::init_logging;
