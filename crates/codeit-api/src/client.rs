use async_trait::async_trait;

use crate::config::normalize_base_url;
use crate::error::ApiError;
use crate::protocol::{ChatRequest, ChatResponse, ErrorBody};
use crate::ChatbotApi;

/// reqwest-backed client for the chatbot service
pub struct HttpChatbotClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpChatbotClient {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl AsRef<str>, client: reqwest::Client) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_ref()),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn chat_url(&self) -> String {
        format!("{}/chat", self.base_url)
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    /// Turn a non-2xx response into [`ApiError::Status`], keeping a textual `detail` if present
    async fn status_error(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(ErrorBody::detail_text);
        ApiError::Status { status, detail }
    }
}

#[async_trait]
impl ChatbotApi for HttpChatbotClient {
    async fn send_message(&self, request: ChatRequest) -> Result<ChatResponse, ApiError> {
        let url = self.chat_url();
        log::debug!(
            "POST {} (session: {}, {} chars)",
            url,
            request.session_id,
            request.message.chars().count()
        );

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let err = Self::status_error(response).await;
            log::debug!("Chat request failed: {}", err);
            return Err(err);
        }

        let response_text = response.text().await?;
        let chat_response: ChatResponse = serde_json::from_str(&response_text)?;
        log::debug!(
            "Chat response for session {} with {} turns",
            chat_response.session_id,
            chat_response.history.len()
        );

        Ok(chat_response)
    }

    async fn health(&self) -> Result<serde_json::Value, ApiError> {
        let url = self.health_url();
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let response_text = response.text().await?;
        Ok(serde_json::from_str(&response_text)?)
    }
}
