use anyhow::{bail, Result};
use colored::Colorize;

use codeit_chat::{ChatOrchestrator, SendOutcome};

use crate::cli::Commands;
use crate::ui::{render_conversation, render_status};

/// Run a one-shot subcommand and return what to print
pub async fn run_command(command: &Commands, orchestrator: &ChatOrchestrator) -> Result<String> {
    match command {
        Commands::Send { message } => {
            match orchestrator.send(message.trim()).await? {
                SendOutcome::Ignored => bail!("Message is empty; nothing was sent."),
                SendOutcome::Failed(error) => bail!("{}", error),
                SendOutcome::Delivered | SendOutcome::Superseded => {}
            }
            Ok(render_conversation(&orchestrator.snapshot()))
        }
        Commands::History => Ok(render_conversation(&orchestrator.snapshot())),
        Commands::Reset => {
            orchestrator.reset()?;
            Ok(format!("{}", "✓ Conversation cleared".green()))
        }
        Commands::Health => {
            let online = orchestrator.probe_health().await;
            let status = render_status(online);
            if online {
                Ok(status)
            } else {
                bail!("{}", status)
            }
        }
    }
}
