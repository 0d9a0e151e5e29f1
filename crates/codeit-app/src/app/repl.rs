use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, ExternalPrinter};
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;

use codeit_chat::{ChatOrchestrator, SendOutcome};

use crate::config::ClientConfig;
use crate::ui::input::HELP_TEXT;
use crate::ui::{render_header, InputAction, InputBuffer, SlashCommand, Transcript};

fn emit(text: &str) {
    if text.is_empty() {
        return;
    }
    print!("{}", text);
    let _ = std::io::stdout().flush();
}

/// One transcript for the prompt loop and the background printer, so each
/// change is printed exactly once
type SharedTranscript = Arc<Mutex<Transcript>>;

fn lock(transcript: &SharedTranscript) -> MutexGuard<'_, Transcript> {
    transcript.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Print state changes that land while the prompt is waiting for input,
/// such as the startup health probe flipping the status indicator
fn spawn_state_printer<P>(
    orchestrator: &ChatOrchestrator,
    transcript: SharedTranscript,
    mut printer: P,
) -> JoinHandle<()>
where
    P: ExternalPrinter + Send + 'static,
{
    let mut updates = orchestrator.subscribe();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            let text = lock(&transcript).update(&state);
            if text.is_empty() {
                continue;
            }
            if let Err(e) = printer.print(text) {
                log::debug!("Background printer stopped: {}", e);
                break;
            }
        }
    })
}

/// Run interactive REPL mode
pub async fn run_repl_mode(config: &ClientConfig, orchestrator: Arc<ChatOrchestrator>) -> Result<()> {
    println!("{}", render_header());
    println!("{}", format!("Chatbot service: {}", config.api_base_url).bright_black());
    println!("{}", "Type /help for commands, 'exit' or 'quit' to leave\n".bright_black());

    let transcript: SharedTranscript = Arc::new(Mutex::new(Transcript::new()));
    emit(&lock(&transcript).render_full(&orchestrator.snapshot()));

    let mut rl = DefaultEditor::new()?;
    let printer = match rl.create_external_printer() {
        Ok(printer) => Some(spawn_state_printer(&orchestrator, transcript.clone(), printer)),
        Err(e) => {
            log::debug!("No external printer, status updates wait for the next prompt: {}", e);
            None
        }
    };

    // The prompt is not held back for the probe
    let probe = orchestrator.spawn_health_probe();
    let mut input = InputBuffer::new();

    let result = loop {
        emit(&lock(&transcript).update(&orchestrator.snapshot()));

        let prompt = if input.is_continuing() {
            format!("{} ", "...".bright_black())
        } else {
            format!("{} ", "You:".bright_green().bold())
        };

        match rl.readline(&prompt) {
            Ok(line) => match input.push_line(&line) {
                InputAction::Continue | InputAction::Empty => continue,
                InputAction::Submit(message) => {
                    let _ = rl.add_history_entry(message.as_str());
                    send_and_render(&orchestrator, &transcript, &message).await;
                }
                InputAction::Command(SlashCommand::Quit) => break Ok(()),
                InputAction::Command(SlashCommand::Reset) => {
                    if let Err(e) = orchestrator.reset() {
                        eprintln!("{} {}", "Failed to save the cleared conversation:".red(), e);
                    }
                    println!("{}", "✓ Started a new conversation".green());
                }
                InputAction::Command(SlashCommand::Health) => {
                    orchestrator.probe_health().await;
                }
                InputAction::Command(SlashCommand::History) => {
                    emit(&lock(&transcript).render_full(&orchestrator.snapshot()));
                }
                InputAction::Command(SlashCommand::Help) => {
                    println!("{}", HELP_TEXT.bright_black());
                }
                InputAction::Command(SlashCommand::Unknown(name)) => {
                    println!("{}", format!("Unknown command /{} (try /help)", name).yellow());
                }
            },
            Err(ReadlineError::Interrupted) => {
                input.discard();
                println!("{}", "^C".bright_black());
            }
            Err(ReadlineError::Eof) => break Ok(()),
            Err(e) => break Err(e.into()),
        }
    };

    probe.abort();
    if let Some(printer) = printer {
        printer.abort();
    }
    if result.is_ok() {
        println!("{}", "Goodbye!".bright_cyan());
    }
    result
}

/// Send one message, printing each state change (optimistic turn, typing
/// indicator, reply or error) as it happens
async fn send_and_render(orchestrator: &ChatOrchestrator, transcript: &SharedTranscript, message: &str) {
    let mut updates = orchestrator.subscribe();
    let send = orchestrator.send(message);
    tokio::pin!(send);

    let result = loop {
        tokio::select! {
            result = &mut send => break result,
            Ok(()) = updates.changed() => {
                let state = updates.borrow_and_update().clone();
                emit(&lock(transcript).update(&state));
            }
        }
    };

    emit(&lock(transcript).update(&orchestrator.snapshot()));

    match result {
        Ok(SendOutcome::Failed(_)) | Ok(SendOutcome::Delivered) | Ok(SendOutcome::Ignored) => {}
        Ok(SendOutcome::Superseded) => log::debug!("Reply arrived after a newer request"),
        Err(e) => eprintln!("{} {}", "Failed to save the conversation:".red(), e),
    }
}
