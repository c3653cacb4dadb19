//! ReviewClaw CLI — the main entry point.
//!
//! Commands:
//! - `scan`    — Show which files a folder selection would include
//! - `review`  — Run one AI review over a folder and print the Markdown

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod walker;

#[derive(Parser)]
#[command(
    name = "reviewclaw",
    about = "ReviewClaw — one-shot AI code review for a local project folder",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which files would be sent for review, and why the rest are skipped
    Scan {
        /// The project folder
        path: PathBuf,
    },

    /// Review a project folder and print the Markdown review
    Review {
        /// The project folder
        path: PathBuf,

        /// Project name shown to the model (defaults to the folder name)
        #[arg(short, long)]
        name: Option<String>,

        /// Override the configured model
        #[arg(short, long)]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Scan { path } => commands::scan::run(&path)?,
        Commands::Review { path, name, model } => commands::review::run(&path, name, model).await?,
    }

    Ok(())
}
