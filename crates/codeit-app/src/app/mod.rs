// Application modules - interactive REPL, one-shot commands and wiring
pub mod commands;
pub mod repl;
pub mod setup;

pub use commands::run_command;
pub use repl::run_repl_mode;
pub use setup::{build_orchestrator, open_storage};
