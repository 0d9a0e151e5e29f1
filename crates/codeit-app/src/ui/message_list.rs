use chrono::{DateTime, Local};
use codeit_types::{ClientState, ConversationTurn, Role};
use colored::Colorize;

use super::status::render_status;

const GREETING: &str = "Namaste! 👋";
const GREETING_HINT: &str = "Ask me about courses, schedules, mentors, scholarships, or campus life.";
const NEW_CONVERSATION_HINT: &str = "Type /reset to start a new conversation.";
const TYPING_INDICATOR: &str = "🤖 • • •";

/// Local `HH:MM` for an RFC 3339 timestamp; `None` when it does not parse
pub fn time_label(timestamp: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.with_timezone(&Local).format("%H:%M").to_string())
}

/// One message bubble: assistant turns carry the avatar
pub fn render_turn(turn: &ConversationTurn) -> String {
    let time = time_label(&turn.timestamp)
        .map(|t| format!(" {}", t.bright_black()))
        .unwrap_or_default();

    match turn.role {
        Role::User => format!("{}{}\n{}\n", "You:".bright_green().bold(), time, turn.content),
        Role::Assistant => format!(
            "{}{}\n{}\n",
            "🤖 Assistant:".bright_cyan().bold(),
            time,
            turn.content
        ),
    }
}

fn render_error(error: &str) -> String {
    format!("{} {}\n", "Oops!".red().bold(), error.red())
}

fn render_greeting() -> String {
    format!("{}\n{}\n", GREETING.bold(), GREETING_HINT.bright_black())
}

/// Full view of the conversation: status, turns (or the greeting), typing
/// indicator and the current error
pub fn render_conversation(state: &ClientState) -> String {
    let mut out = String::new();
    out.push_str(&render_status(state.service_online));
    out.push('\n');

    if state.history.is_empty() {
        out.push_str(&render_greeting());
    } else {
        for turn in &state.history {
            out.push('\n');
            out.push_str(&render_turn(turn));
        }
        out.push('\n');
        out.push_str(&format!("{}\n", NEW_CONVERSATION_HINT.bright_black()));
    }

    if state.is_typing {
        out.push_str(&format!("{}\n", TYPING_INDICATOR.bright_black()));
    }
    if let Some(error) = &state.error {
        out.push_str(&render_error(error));
    }
    out
}

fn same_turn(a: &ConversationTurn, b: &ConversationTurn) -> bool {
    a.role == b.role && a.content == b.content
}

/// Incremental renderer for a terminal that cannot redraw.
///
/// Remembers what has been printed and, given a new state, returns only the
/// text needed to bring the screen up to date. Turns are matched by role and
/// content, so the server's copy of an optimistic turn is not printed twice.
#[derive(Debug, Default)]
pub struct Transcript {
    shown: Vec<ConversationTurn>,
    typing: bool,
    error: Option<String>,
    online: Option<bool>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a fully rendered state, returning that rendering
    pub fn render_full(&mut self, state: &ClientState) -> String {
        self.remember(state);
        render_conversation(state)
    }

    pub fn update(&mut self, state: &ClientState) -> String {
        let mut out = String::new();

        if self.online != Some(state.service_online) {
            out.push_str(&render_status(state.service_online));
            out.push('\n');
        }

        let extends_shown = state.history.len() >= self.shown.len()
            && self
                .shown
                .iter()
                .zip(&state.history)
                .all(|(a, b)| same_turn(a, b));
        let rolled_back = state.history.len() < self.shown.len()
            && state
                .history
                .iter()
                .zip(&self.shown)
                .all(|(a, b)| same_turn(a, b));

        if state.history.is_empty() && !self.shown.is_empty() {
            out.push_str(&render_greeting());
        } else if extends_shown {
            for turn in &state.history[self.shown.len()..] {
                out.push_str(&render_turn(turn));
            }
        } else if !rolled_back {
            out.push_str(&format!("{}\n", "── conversation updated ──".bright_black()));
            for turn in &state.history {
                out.push_str(&render_turn(turn));
            }
        }

        if state.is_typing && !self.typing {
            out.push_str(&format!("{}\n", TYPING_INDICATOR.bright_black()));
        }

        if let Some(error) = &state.error {
            if self.error.as_ref() != Some(error) {
                out.push_str(&render_error(error));
            }
        }

        self.remember(state);
        out
    }

    fn remember(&mut self, state: &ClientState) {
        self.shown = state.history.clone();
        self.typing = state.is_typing;
        self.error = state.error.clone();
        self.online = Some(state.service_online);
    }
}
