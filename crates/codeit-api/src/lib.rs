//! # codeit-api
//!
//! HTTP client for the CodeIT chatbot service.
//!
//! The service exposes two routes:
//! - `POST /chat` sends a user message and returns the whole conversation
//! - `GET /health` reports whether the service is reachable
//!
//! ## Example
//!
//! ```rust,no_run
//! use codeit_api::{ChatbotApi, ChatRequest, HttpChatbotClient};
//! use codeit_types::SessionId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), codeit_api::ApiError> {
//!     let client = HttpChatbotClient::new("http://127.0.0.1:8000");
//!     let response = client
//!         .send_message(ChatRequest::new("What courses do you offer?", SessionId::NoSession))
//!         .await?;
//!     println!("session {} has {} turns", response.session_id, response.history.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;

pub use client::HttpChatbotClient;
pub use config::{normalize_base_url, resolve_base_url};
pub use error::ApiError;
pub use protocol::{ChatRequest, ChatResponse};

use async_trait::async_trait;

/// Chatbot service seam used by the orchestrator
#[async_trait]
pub trait ChatbotApi: Send + Sync {
    /// `POST /chat`: deliver one user message and receive the canonical conversation
    async fn send_message(&self, request: ChatRequest) -> Result<ChatResponse, ApiError>;

    /// `GET /health`: succeeds on any 2xx response with a JSON body
    async fn health(&self) -> Result<serde_json::Value, ApiError>;
}
