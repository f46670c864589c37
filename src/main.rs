use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use html_extractor::cli::{Cli, Commands, ConfigCommands};
use html_extractor::theme::current_theme;

mod commands;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "html_extractor=warn".into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract(args) => commands::extract::handle(&args),
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Reset => commands::config::handle_reset(),
        }
        .map(|()| ExitCode::SUCCESS),
        Commands::Analyze { dir } => commands::analyze::handle(&dir),
        Commands::Completions { shell } => {
            commands::completions::handle(shell).map(|()| ExitCode::SUCCESS)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", current_theme().error_text(&format!("Error: {e:#}")));
            ExitCode::FAILURE
        }
    }
}
