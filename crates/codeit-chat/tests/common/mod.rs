use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use codeit_api::{ApiError, ChatRequest, ChatResponse, ChatbotApi};
use codeit_chat::ChatOrchestrator;
use codeit_storage::{KeyValueStorage, MemoryStorage, SessionStore, StorageError};
use codeit_types::{ConversationTurn, Role, SessionId};
use tokio::sync::oneshot;

pub type Reply = Result<ChatResponse, ApiError>;

/// Fake chatbot service.
///
/// Each `send_message` call records its request and then waits for the next
/// queued reply. Replies are either ready immediately (`push_reply`) or held
/// back until the test releases them (`push_gate`).
#[derive(Default)]
pub struct FakeChatbot {
    replies: Mutex<VecDeque<oneshot::Receiver<Reply>>>,
    requests: Mutex<Vec<ChatRequest>>,
    healthy: Mutex<bool>,
}

impl FakeChatbot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            healthy: Mutex::new(true),
            ..Default::default()
        })
    }

    pub fn push_reply(&self, reply: Reply) {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(reply);
        self.replies.lock().unwrap().push_back(rx);
    }

    pub fn push_gate(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.lock().unwrap().push_back(rx);
        tx
    }

    pub fn set_healthy(&self, healthy: bool) {
        *self.healthy.lock().unwrap() = healthy;
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Yield until `count` requests have reached the fake service
    pub async fn wait_for_requests(&self, count: usize) {
        while self.requests.lock().unwrap().len() < count {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl ChatbotApi for FakeChatbot {
    async fn send_message(&self, request: ChatRequest) -> Result<ChatResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(rx) => rx.await.unwrap_or(Err(ApiError::Status {
                status: 599,
                detail: Some("gate dropped".to_string()),
            })),
            None => Err(ApiError::Status {
                status: 599,
                detail: Some("no scripted reply".to_string()),
            }),
        }
    }

    async fn health(&self) -> Result<serde_json::Value, ApiError> {
        if *self.healthy.lock().unwrap() {
            Ok(serde_json::json!({"status": "ok"}))
        } else {
            Err(ApiError::Status {
                status: 503,
                detail: None,
            })
        }
    }
}

/// Storage whose reads and writes can be switched off
#[derive(Default)]
pub struct FlakyStorage {
    inner: MemoryStorage,
    reads_fail: Mutex<bool>,
    writes_fail: Mutex<bool>,
}

impl FlakyStorage {
    pub fn failing_reads() -> Self {
        let storage = Self::default();
        *storage.reads_fail.lock().unwrap() = true;
        storage
    }

    pub fn fail_writes(&self, fail: bool) {
        *self.writes_fail.lock().unwrap() = fail;
    }
}

impl KeyValueStorage for FlakyStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if *self.reads_fail.lock().unwrap() {
            return Err(StorageError::Unavailable("storage disabled".to_string()));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if *self.writes_fail.lock().unwrap() {
            return Err(StorageError::Unavailable("quota exceeded".to_string()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.inner.clear()
    }
}

pub fn user(content: &str, timestamp: &str) -> ConversationTurn {
    ConversationTurn::new(Role::User, content, timestamp)
}

pub fn assistant(content: &str, timestamp: &str) -> ConversationTurn {
    ConversationTurn::new(Role::Assistant, content, timestamp)
}

pub fn response(session_id: &str, history: Vec<ConversationTurn>) -> Reply {
    let reply = history.last().map(|turn| turn.content.clone());
    Ok(ChatResponse {
        session_id: SessionId::from(session_id),
        history,
        reply,
    })
}

pub fn server_error(status: u16) -> Reply {
    Err(ApiError::Status {
        status,
        detail: None,
    })
}

pub fn build(
    api: &Arc<FakeChatbot>,
    storage: Arc<dyn KeyValueStorage>,
) -> (Arc<ChatOrchestrator>, SessionStore) {
    let store = SessionStore::new(storage);
    let orchestrator = ChatOrchestrator::new(api.clone(), store.clone());
    (Arc::new(orchestrator), store)
}
