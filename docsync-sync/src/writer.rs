//! Atomic writer and sync orchestration.
//!
//! ## `sync_pair` — 5-step protocol
//!
//! 1. Read the README verbatim.
//! 2. Read the source file and split off its current `//!` header.
//! 3. Render README lines as the new header, compose with the body.
//! 4. Skip if the composed content already matches the file on disk.
//! 5. Write to `<path>.docsync.tmp`, rename to the final path (atomic on POSIX).

use std::path::{Path, PathBuf};

use docsync_core::{
    header::{compose, render_header, split_body},
    SyncPair,
};

use crate::error::{io_err, SyncError};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (header changed or the file had none).
    Written { path: PathBuf },
    /// File was skipped — composed content matches what is on disk.
    Unchanged { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

/// Outcome of syncing a single pair.
#[derive(Debug)]
pub struct SyncPairResult {
    pub pair_name: String,
    pub result: WriteResult,
}

// ---------------------------------------------------------------------------
// atomic_write
// ---------------------------------------------------------------------------

/// Write `content` to `path` through a temporary sibling plus rename.
///
/// The rename is the only mutation of the real path; if it fails the
/// temporary file is removed and the original is left intact.
pub(crate) fn atomic_write(path: &Path, content: &str) -> Result<WriteResult, SyncError> {
    let tmp = PathBuf::from(format!("{}.docsync.tmp", path.display()));
    std::fs::write(&tmp, content).map_err(|e| io_err(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }
    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// sync_pair
// ---------------------------------------------------------------------------

/// Sync one configured pair: replace the source file's doc header with the
/// rendered README.
///
/// The README is read first; a missing README aborts before the source file
/// is touched. The body region below the header is preserved byte-for-byte.
pub fn sync_pair(
    pair: &SyncPair,
    base: &Path,
    dry_run: bool,
) -> Result<SyncPairResult, SyncError> {
    let readme_path = pair.readme_at(base);
    let readme = std::fs::read_to_string(&readme_path).map_err(|e| io_err(&readme_path, e))?;

    let source_path = pair.source_at(base);
    let current = std::fs::read_to_string(&source_path).map_err(|e| io_err(&source_path, e))?;

    let (dropped, body) = split_body(&current);
    let composed = compose(&render_header(&readme), body);

    let result = if composed == current {
        tracing::debug!("unchanged: {}", source_path.display());
        WriteResult::Unchanged { path: source_path }
    } else if dry_run {
        tracing::info!("[dry-run] would write: {}", source_path.display());
        WriteResult::WouldWrite { path: source_path }
    } else {
        tracing::debug!(
            "replacing {dropped} header line(s) in {}",
            source_path.display()
        );
        atomic_write(&source_path, &composed)?
    };

    Ok(SyncPairResult {
        pair_name: pair.name.0.clone(),
        result,
    })
}

// ---------------------------------------------------------------------------
// sync_all
// ---------------------------------------------------------------------------

/// Sync every configured pair, in list order.
///
/// Fail-fast: the first unreadable file aborts the remaining pairs. Writes
/// already completed for earlier pairs stand.
pub fn sync_all(
    pairs: &[SyncPair],
    base: &Path,
    dry_run: bool,
) -> Result<Vec<SyncPairResult>, SyncError> {
    let mut results = Vec::with_capacity(pairs.len());
    for pair in pairs {
        results.push(sync_pair(pair, base, dry_run)?);
    }
    Ok(results)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
