// dataforge/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug dataforge generate ... pour voir les détails
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            project_dir,
            seed,
            out_dir,
            domains,
        } => {
            commands::generate::execute(project_dir, seed, out_dir, domains).await?;
        }

        Commands::List => {
            commands::list::execute()?;
        }

        Commands::Publish {
            workbook,
            server,
            token_name,
            token_value,
            site,
            project,
        } => {
            commands::publish::execute(workbook, server, token_name, token_value, site, project)
                .await?;
        }
    }

    Ok(())
}
