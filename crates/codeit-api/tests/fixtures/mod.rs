use serde_json::json;
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock chatbot service for exercising the HTTP client
pub struct ChatbotMockServer {
    server: MockServer,
}

impl ChatbotMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Reply to a first message with a fresh session and a two-turn history
    pub async fn mock_chat_success(&self, user_message: &str, reply: &str, session_id: &str) {
        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({ "message": user_message })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "reply": reply,
                "session_id": session_id,
                "history": [
                    {"role": "user", "content": user_message, "timestamp": "2024-03-01T08:00:00.000000+00:00"},
                    {"role": "assistant", "content": reply, "timestamp": "2024-03-01T08:00:01.000000+00:00"}
                ]
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Non-2xx chat response with an optional JSON body
    pub async fn mock_chat_status(&self, status: u16, body: Option<serde_json::Value>) {
        let template = match body {
            Some(body) => ResponseTemplate::new(status).set_body_json(body),
            None => ResponseTemplate::new(status),
        };
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    /// 200 chat response whose body is not the expected shape
    pub async fn mock_chat_garbage(&self) {
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_health_ok(&self) {
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_health_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_health_not_json(&self) {
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .mount(&self.server)
            .await;
    }
}
