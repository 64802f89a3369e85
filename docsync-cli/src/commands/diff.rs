//! `docsync diff` — show unified diffs of what sync would write.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use docsync_core::config;
use docsync_sync::{diff_all, diff_pair, FileDiff};

/// Arguments for `docsync diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Pair name to diff (omit to diff every configured pair).
    pub name: Option<String>,

    /// Base directory relative pair paths resolve against (default: current directory).
    #[arg(long)]
    pub base: Option<PathBuf>,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let base = config::resolve_base(self.base).context("could not resolve base directory")?;
        let pairs = config::builtin_pairs();

        let diffs: Vec<FileDiff> = match self.name {
            Some(name) => {
                let pair = config::find_pair(&pairs, &name)?;
                diff_pair(pair, &base)
                    .with_context(|| format!("diff failed for '{name}'"))?
                    .into_iter()
                    .collect()
            }
            None => diff_all(&pairs, &base).context("diff failed")?,
        };

        if diffs.is_empty() {
            println!("No differences.");
            return Ok(());
        }

        for diff in diffs {
            print!("{}", diff.unified_diff);
            if !diff.unified_diff.ends_with('\n') {
                println!();
            }
        }

        Ok(())
    }
}
