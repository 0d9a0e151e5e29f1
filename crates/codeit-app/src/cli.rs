use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// CLI arguments for codeit-chat
#[derive(Parser, Debug)]
#[command(name = "codeit-chat")]
#[command(about = "CodeIT AI Assistant - terminal client for the CodeIT chatbot service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the chatbot service (default: http://127.0.0.1:8000)
    #[arg(long, value_name = "URL", env = "CODEIT_API_BASE_URL", global = true)]
    pub api_base_url: Option<String>,

    /// Directory holding the saved session and history (default: ~/.codeit-chat/storage)
    #[arg(long, value_name = "DIR", env = "CODEIT_STORAGE_DIR", global = true)]
    pub storage_dir: Option<PathBuf>,

    /// Keep the conversation in memory only; nothing is read from or written to disk.
    /// Takes precedence over --storage-dir and CODEIT_STORAGE_DIR
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Enable verbose debug output (HTTP requests, storage fallbacks)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Send one message and print the resulting conversation
    Send {
        /// Message text
        message: String,
    },
    /// Print the saved conversation
    History,
    /// Forget the saved session and history
    Reset,
    /// Check whether the chatbot service is reachable
    Health,
}
