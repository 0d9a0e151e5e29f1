/// REPL commands, entered on their own line with a leading `/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Reset,
    Health,
    History,
    Help,
    Quit,
    Unknown(String),
}

impl SlashCommand {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if matches!(line, "exit" | "quit") {
            return Some(SlashCommand::Quit);
        }

        let name = line.strip_prefix('/')?;
        let command = match name.to_lowercase().as_str() {
            "reset" | "new" => SlashCommand::Reset,
            "health" | "status" => SlashCommand::Health,
            "history" => SlashCommand::History,
            "help" | "?" => SlashCommand::Help,
            "quit" | "exit" => SlashCommand::Quit,
            _ => SlashCommand::Unknown(name.to_string()),
        };
        Some(command)
    }
}

pub const HELP_TEXT: &str = "\
Enter sends the message. End a line with \\ to continue on the next line.
  /reset    start a new conversation
  /health   check whether the chatbot service is online
  /history  show the whole conversation
  /help     show this help
  /quit     leave (also: exit, quit, Ctrl-D)";

/// What the REPL should do with the line just entered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Send this (trimmed, non-blank) message
    Submit(String),
    Command(SlashCommand),
    /// The line ended with `\`; keep reading
    Continue,
    /// Nothing to send
    Empty,
}

/// Collects lines until a message is complete.
///
/// A line ending in `\` adds a newline instead of submitting. Blank
/// messages never submit.
#[derive(Debug, Default)]
pub struct InputBuffer {
    lines: Vec<String>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_continuing(&self) -> bool {
        !self.lines.is_empty()
    }

    pub fn push_line(&mut self, line: &str) -> InputAction {
        if self.lines.is_empty() {
            if let Some(command) = SlashCommand::parse(line) {
                return InputAction::Command(command);
            }
        }

        if let Some(partial) = line.strip_suffix('\\') {
            self.lines.push(partial.to_string());
            return InputAction::Continue;
        }

        self.lines.push(line.to_string());
        let message = self.lines.join("\n");
        self.lines.clear();

        let message = message.trim();
        if message.is_empty() {
            InputAction::Empty
        } else {
            InputAction::Submit(message.to_string())
        }
    }

    /// Drop a half-entered message (Ctrl-C)
    pub fn discard(&mut self) {
        self.lines.clear();
    }
}
