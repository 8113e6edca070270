// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { file, force }) => commands::cmd_init(file, force),
        Some(Commands::List { file }) => commands::cmd_list(file),
        Some(Commands::Show {
            selector,
            all,
            no_pause,
            file,
        }) => commands::cmd_show(selector, all, no_pause, file),
        Some(Commands::Delete {
            selector,
            dry_run,
            file,
        }) => commands::cmd_delete(&selector, dry_run, file),
        Some(Commands::Check { file }) => commands::cmd_check(file),
        Some(Commands::Completions { shell }) => commands::cmd_completions(shell),
        None => {
            // No command provided, show help
            println!("Kokbok Recipe Box v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'kokbok --help' for usage information");
            Ok(())
        }
    }
}
