use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use codeit_api::{ChatRequest, ChatbotApi};
use codeit_storage::{SessionStore, StorageError};
use codeit_types::{ClientState, ConversationHistory, ConversationTurn, SessionId};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// What became of a [`ChatOrchestrator::send`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input; nothing changed and nothing was sent
    Ignored,
    /// The server history and session id were adopted
    Delivered,
    /// The request failed; history was rolled back and this message surfaced
    Failed(String),
    /// A newer send or a reset was issued first; the response was discarded
    Superseded,
}

/// Owner of the client state.
///
/// State lives in a `watch` channel so renderers can follow every change.
/// Every mutation happens inside the channel's write lock, and every
/// mutation of history or session id rewrites both persisted entries.
///
/// Each send takes a sequence number from `latest_request`; a response may
/// only touch state while its number is still the latest. `reset` advances
/// the counter too, so nothing that was in flight can undo it.
///
/// A failed send rolls back to `confirmed`: the history as last restored,
/// returned by the server or reset. Optimistic turns of superseded requests
/// are never part of it.
pub struct ChatOrchestrator {
    api: Arc<dyn ChatbotApi>,
    store: SessionStore,
    state: watch::Sender<ClientState>,
    latest_request: AtomicU64,
    confirmed: Mutex<ConversationHistory>,
}

impl ChatOrchestrator {
    /// Hydrate session id and history from storage. Never fails: unreadable
    /// entries fall back to no session and an empty history.
    pub fn new(api: Arc<dyn ChatbotApi>, store: SessionStore) -> Self {
        let session_id = store.load_session_id();
        let history = store.load_history();
        log::debug!(
            "Restored session {} with {} turns",
            session_id,
            history.len()
        );

        let confirmed = Mutex::new(history.clone());
        let (state, _) = watch::channel(ClientState::new(session_id, history));
        Self {
            api,
            store,
            state,
            latest_request: AtomicU64::new(0),
            confirmed,
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> ClientState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<ClientState> {
        self.state.subscribe()
    }

    pub fn session_id(&self) -> SessionId {
        self.state.borrow().session_id.clone()
    }

    /// Send one user message.
    ///
    /// The user turn is shown (and persisted) immediately, then replaced by
    /// the server's history on success or removed again on failure.
    pub async fn send(&self, message: &str) -> Result<SendOutcome, StorageError> {
        if message.trim().is_empty() {
            return Ok(SendOutcome::Ignored);
        }

        let mut request_id = 0;
        let mut session_id = SessionId::NoSession;
        let mut persisted = Ok(());
        self.state.send_modify(|state| {
            request_id = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
            session_id = state.session_id.clone();

            state.error = None;
            state.is_typing = true;
            state.history.push(ConversationTurn::user_now(message));
            persisted = self.store.save_snapshot(&state.session_id, &state.history);
        });

        if let Err(e) = persisted {
            self.state.send_if_modified(|state| {
                if !self.is_latest(request_id) {
                    return false;
                }
                state.history = self.confirmed_history();
                state.is_typing = false;
                true
            });
            return Err(e);
        }

        let result = self
            .api
            .send_message(ChatRequest::new(message, session_id))
            .await;

        let mut outcome = SendOutcome::Superseded;
        let mut persisted = Ok(());
        self.state.send_if_modified(|state| {
            if !self.is_latest(request_id) {
                return false;
            }

            match result {
                Ok(response) => {
                    log::info!(
                        "Message delivered (session {}, {} turns)",
                        response.session_id,
                        response.history.len()
                    );
                    self.set_confirmed(&response.history);
                    state.history = response.history;
                    state.session_id = response.session_id;
                    state.service_online = true;
                    state.error = None;
                    outcome = SendOutcome::Delivered;
                }
                Err(e) => {
                    log::warn!("Message delivery failed: {}", e);
                    let message = e.user_message();
                    state.history = self.confirmed_history();
                    state.error = Some(message.clone());
                    state.service_online = false;
                    outcome = SendOutcome::Failed(message);
                }
            }
            state.is_typing = false;
            persisted = self.store.save_snapshot(&state.session_id, &state.history);
            true
        });

        if outcome == SendOutcome::Superseded {
            log::debug!("Discarded response for superseded request {}", request_id);
        }

        persisted.map(|_| outcome)
    }

    /// Forget the conversation locally. The server is not told.
    pub fn reset(&self) -> Result<(), StorageError> {
        let mut persisted = Ok(());
        self.state.send_modify(|state| {
            self.latest_request.fetch_add(1, Ordering::SeqCst);
            self.set_confirmed(&[]);
            state.history.clear();
            state.session_id = SessionId::NoSession;
            state.error = None;
            state.is_typing = false;
            persisted = self.store.save_snapshot(&state.session_id, &state.history);
        });
        log::info!("Conversation reset");
        persisted
    }

    /// Ask the service whether it is up and record the answer.
    /// A failed probe only flips the indicator; it never sets error text.
    pub async fn probe_health(&self) -> bool {
        let online = match self.api.health().await {
            Ok(_) => true,
            Err(e) => {
                log::warn!("Health check failed: {}", e);
                false
            }
        };

        self.state.send_if_modified(|state| {
            if state.service_online == online {
                return false;
            }
            state.service_online = online;
            true
        });
        online
    }

    /// Run [`probe_health`](Self::probe_health) in the background
    pub fn spawn_health_probe(self: &Arc<Self>) -> JoinHandle<bool> {
        let orchestrator = Arc::clone(self);
        tokio::spawn(async move { orchestrator.probe_health().await })
    }

    fn is_latest(&self, request_id: u64) -> bool {
        self.latest_request.load(Ordering::SeqCst) == request_id
    }

    fn confirmed_history(&self) -> ConversationHistory {
        self.confirmed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_confirmed(&self, history: &[ConversationTurn]) {
        *self.confirmed.lock().unwrap_or_else(PoisonError::into_inner) = history.to_vec();
    }
}
