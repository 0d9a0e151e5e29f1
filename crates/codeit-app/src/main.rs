use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;

use codeit::{build_orchestrator, init_logging, run_command, run_repl_mode, Cli, ClientConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(shell) = cli.generate {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
        return Ok(());
    }

    let config = ClientConfig::from_cli(&cli);
    log::debug!("Resolved configuration: {:?}", config);
    let orchestrator = build_orchestrator(&config);

    match &cli.command {
        Some(command) => match run_command(command, &orchestrator).await {
            Ok(output) => {
                println!("{}", output);
                Ok(())
            }
            Err(e) => {
                eprintln!("{} {}", "Oops!".red().bold(), e);
                std::process::exit(1);
            }
        },
        None => run_repl_mode(&config, orchestrator).await,
    }
}
