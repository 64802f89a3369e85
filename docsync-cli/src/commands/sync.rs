//! `docsync sync` — rewrite source doc headers from their README files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use docsync_core::config;
use docsync_sync::{
    pipeline::{self, SyncScope},
    SyncPairResult, WriteResult,
};

/// Arguments for `docsync sync`.
#[derive(Args, Debug, Default)]
pub struct SyncArgs {
    /// Name of the pair to sync (omit to sync every configured pair).
    pub name: Option<String>,

    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,

    /// Base directory relative pair paths resolve against (default: current directory).
    #[arg(long)]
    pub base: Option<PathBuf>,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let base = config::resolve_base(self.base).context("could not resolve base directory")?;
        let pairs = config::builtin_pairs();

        let scope = match self.name {
            Some(name) => SyncScope::Pair(name),
            None => SyncScope::All,
        };
        let results = pipeline::run(&pairs, &base, scope, self.dry_run)
            .context("sync failed")?;

        print_results(&results, self.dry_run);
        Ok(())
    }
}

fn print_results(results: &[SyncPairResult], dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let written = results
        .iter()
        .filter(|r| {
            matches!(
                r.result,
                WriteResult::Written { .. } | WriteResult::WouldWrite { .. }
            )
        })
        .count();
    let unchanged = results.len() - written;

    for r in results {
        match &r.result {
            WriteResult::Written { path } => println!("  ✎  {} ({})", path.display(), r.pair_name),
            WriteResult::WouldWrite { path } => {
                println!("  ~  {} ({})", path.display(), r.pair_name)
            }
            WriteResult::Unchanged { path } => {
                println!("  ·  {} ({})", path.display(), r.pair_name)
            }
        }
    }

    println!("{prefix}✓ {written} written, {unchanged} unchanged");
}
