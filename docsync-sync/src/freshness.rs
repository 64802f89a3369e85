//! Per-pair freshness classification for `docsync status`.
//!
//! Signal precedence:
//! 1. `MissingReadme` (configured README absent)
//! 2. `MissingSource` (configured source file absent)
//! 3. `OutOfSync` (composed output differs from on-disk content)
//! 4. `Current`

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use docsync_core::{
    header::{compose, render_header, split_body},
    SyncPair,
};

use crate::{error::io_err, SyncError};

/// Freshness classification for a single pair. Nothing is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairState {
    MissingReadme { path: PathBuf },
    MissingSource { path: PathBuf },
    OutOfSync,
    Current,
}

/// Classify one pair without writing anything.
pub fn check(pair: &SyncPair, base: &Path) -> Result<PairState, SyncError> {
    let readme_path = pair.readme_at(base);
    let readme = match std::fs::read_to_string(&readme_path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Ok(PairState::MissingReadme { path: readme_path });
        }
        Err(err) => return Err(io_err(&readme_path, err)),
    };

    let source_path = pair.source_at(base);
    let current = match std::fs::read_to_string(&source_path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Ok(PairState::MissingSource { path: source_path });
        }
        Err(err) => return Err(io_err(&source_path, err)),
    };

    let (_, body) = split_body(&current);
    if compose(&render_header(&readme), body) == current {
        Ok(PairState::Current)
    } else {
        Ok(PairState::OutOfSync)
    }
}
