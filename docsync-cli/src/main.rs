//! docsync — README → crate-doc header synchronizer.
//!
//! # Usage
//!
//! ```text
//! docsync                           # sync every configured pair
//! docsync sync [name] [--dry-run]
//! docsync diff [name]
//! docsync status [--json]
//! ```
//!
//! Every subcommand accepts `--base <dir>`; relative pair paths resolve
//! against it (default: the current working directory).

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{diff::DiffArgs, status::StatusArgs, sync::SyncArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "docsync",
    version,
    about = "Keep crate-level doc comments in sync with README files",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rewrite source doc headers from their README files.
    Sync(SyncArgs),

    /// Show unified diffs of what sync would write.
    Diff(DiffArgs),

    /// Show per-pair doc header freshness.
    Status(StatusArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Sync(args)) => args.run(),
        Some(Commands::Diff(args)) => args.run(),
        Some(Commands::Status(args)) => args.run(),
        // Bare `docsync` processes every configured pair.
        None => SyncArgs::default().run(),
    }
}
