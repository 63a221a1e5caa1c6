// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        #[cfg(feature = "server")]
        Some(Commands::Serve { config, bind, seed }) => {
            commands::cmd_serve(&config, bind, seed).await
        }
        Some(Commands::Summary {
            name,
            catalog,
            json,
        }) => commands::cmd_summary(&name, &catalog, json),
        Some(Commands::Check { catalog }) => commands::cmd_check(&catalog),
        Some(Commands::Deps { name, catalog }) => commands::cmd_deps(&name, &catalog),
        Some(Commands::Parse { input }) => commands::cmd_parse(&input),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
