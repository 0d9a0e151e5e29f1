//! Conversation orchestration for codeit-chat
//!
//! This crate owns the client state (history, session id, typing flag, error
//! text, service status), talks to the chatbot service through
//! [`codeit_api::ChatbotApi`] and keeps the [`codeit_storage::SessionStore`]
//! in step with every change.

pub mod orchestrator;

pub use orchestrator::{ChatOrchestrator, SendOutcome};
