use codeit_types::{DEFAULT_SEND_ERROR, UNEXPECTED_RESPONSE_ERROR};
use thiserror::Error;

/// Failure talking to the chatbot service
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("request to chatbot service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status
    #[error("chatbot service returned HTTP {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    /// A 2xx response whose body could not be decoded
    #[error("invalid response from chatbot service: {0}")]
    Decode(#[from] serde_json::Error),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_ref().map(|d| format!(": {}", d)).unwrap_or_default()
}

impl ApiError {
    /// Text shown to the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Status { detail: None, .. } | ApiError::Transport(_) => {
                DEFAULT_SEND_ERROR.to_string()
            }
            ApiError::Decode(_) => UNEXPECTED_RESPONSE_ERROR.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
