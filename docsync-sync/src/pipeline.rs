//! Shared sync pipeline entrypoint used by every `docsync` invocation path.

use std::path::Path;

use docsync_core::{config, SyncPair};

use crate::{sync_all, sync_pair, SyncError, SyncPairResult};

/// Scope for a sync pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncScope {
    /// Sync every configured pair.
    All,
    /// Sync a single named pair.
    Pair(String),
}

/// Run the sync pipeline for a scope.
///
/// This is the canonical sync entrypoint for `docsync sync` and for the bare
/// no-argument invocation.
pub fn run(
    pairs: &[SyncPair],
    base: &Path,
    scope: SyncScope,
    dry_run: bool,
) -> Result<Vec<SyncPairResult>, SyncError> {
    match scope {
        SyncScope::All => sync_all(pairs, base, dry_run),
        SyncScope::Pair(name) => {
            let pair = config::find_pair(pairs, &name)?;
            Ok(vec![sync_pair(pair, base, dry_run)?])
        }
    }
}
