use codeit_types::{ConversationHistory, SessionId};
use serde::{Deserialize, Serialize};

/// Body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(rename = "sessionId")]
    pub session_id: SessionId,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, session_id: SessionId) -> Self {
        Self {
            message: message.into(),
            session_id,
        }
    }
}

/// Successful `POST /chat` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub session_id: SessionId,
    pub history: ConversationHistory,
    /// The assistant's latest reply; it is also the last turn of `history`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}

/// Optional body of a non-2xx response
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The `detail` text, when it is a non-empty string
    pub(crate) fn detail_text(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
            _ => None,
        }
    }
}
