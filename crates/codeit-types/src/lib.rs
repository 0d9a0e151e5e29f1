//! Core types and structures for codeit-chat
//!
//! This crate provides the conversation data model shared by the storage,
//! API, orchestration and application crates.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Storage key holding the JSON-encoded session id
pub const SESSION_KEY: &str = "codeit-chatbot-session";

/// Storage key holding the JSON-encoded conversation history
pub const HISTORY_KEY: &str = "codeit-chatbot-history";

/// Chatbot service used when no base URL is configured
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Environment variable that overrides the chatbot service base URL
pub const API_BASE_ENV: &str = "CODEIT_API_BASE_URL";

/// Error text shown when the service gives no usable detail
pub const DEFAULT_SEND_ERROR: &str = "Failed to reach chatbot service.";

/// Error text shown when a successful response cannot be decoded
pub const UNEXPECTED_RESPONSE_ERROR: &str = "Unexpected response from chatbot service.";

// ============================================================================
// Conversation Types
// ============================================================================

/// Author of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message in the conversation.
///
/// The timestamp is kept verbatim as the ISO-8601 string that produced it, so
/// server-supplied turns are stored and rendered exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
    pub timestamp: String,
}

impl ConversationTurn {
    pub fn new(role: Role, content: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: timestamp.into(),
        }
    }

    /// A user turn stamped with the current UTC time (millisecond precision, `Z` suffix)
    pub fn user_now(content: impl Into<String>) -> Self {
        Self::new(Role::User, content, now_timestamp())
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Ordered conversation, oldest turn first
pub type ConversationHistory = Vec<ConversationTurn>;

/// Current time formatted like `2024-05-01T09:30:00.000Z`
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ============================================================================
// Session Types
// ============================================================================

/// Server-assigned conversation context.
///
/// Serialized as JSON `null` or a string. An empty string is never a session:
/// it decodes to [`SessionId::NoSession`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum SessionId {
    #[default]
    NoSession,
    Session(String),
}

impl SessionId {
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            SessionId::NoSession => None,
            SessionId::Session(id) => Some(id.as_str()),
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self, SessionId::Session(_))
    }
}

impl From<Option<String>> for SessionId {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(id) if !id.is_empty() => SessionId::Session(id),
            _ => SessionId::NoSession,
        }
    }
}

impl From<SessionId> for Option<String> {
    fn from(value: SessionId) -> Self {
        match value {
            SessionId::NoSession => None,
            SessionId::Session(id) => Some(id),
        }
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        SessionId::from(Some(value))
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        SessionId::from(value.to_string())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionId::NoSession => f.write_str("(none)"),
            SessionId::Session(id) => f.write_str(id),
        }
    }
}

// ============================================================================
// Client State
// ============================================================================

/// Everything the UI renders from.
///
/// `history` and `session_id` are persisted; `is_typing` and `error` only
/// live for the current process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientState {
    pub history: ConversationHistory,
    pub session_id: SessionId,
    pub is_typing: bool,
    pub error: Option<String>,
    pub service_online: bool,
}

impl ClientState {
    pub fn new(session_id: SessionId, history: ConversationHistory) -> Self {
        Self {
            history,
            session_id,
            is_typing: false,
            error: None,
            service_online: true,
        }
    }
}

impl Default for ClientState {
    fn default() -> Self {
        Self::new(SessionId::NoSession, Vec::new())
    }
}
