//! Clipdeck CLI - Headless Playlist Player Harness
//!
//! Features:
//! - Catalog validation
//! - Scripted session replay over a recording surface
//! - Text, JSON, or table output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod output;
mod script;

/// Clipdeck CLI - Video playlist player toolkit
#[derive(Parser)]
#[command(name = "clipdeck")]
#[command(version)]
#[command(about = "Validate catalogs and replay playlist player sessions", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, json, table)
    #[arg(short, long, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a catalog manifest and list its videos
    Catalog {
        /// Path to catalog JSON
        path: PathBuf,
    },

    /// Replay a session, e.g. `clipdeck run next speed=2 move=0:2 ended`
    Run {
        /// Path to catalog JSON (defaults to the three-video sample)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Path to player configuration JSON
        #[arg(long)]
        config: Option<PathBuf>,

        /// Base URL for the sample catalog
        #[arg(long, default_value = "http://localhost:8080/")]
        base_url: String,

        /// Deny fullscreen requests, like a browser without user activation
        #[arg(long)]
        reject_fullscreen: bool,

        /// Steps to apply in order
        steps: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .init();

    clipdeck_core::init();

    match cli.command {
        Commands::Catalog { path } => {
            commands::catalog(&path, &cli.format)?;
        }
        Commands::Run {
            catalog,
            config,
            base_url,
            reject_fullscreen,
            steps,
        } => {
            commands::run(
                catalog.as_deref(),
                config.as_deref(),
                &base_url,
                &steps,
                reject_fullscreen,
                &cli.format,
            )?;
        }
    }

    Ok(())
}
