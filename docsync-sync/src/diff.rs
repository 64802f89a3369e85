//! Dry-run unified diff support for `docsync diff`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use docsync_core::{
    header::{compose, render_header, split_body},
    SyncPair,
};

use crate::{error::io_err, SyncError};

/// A single pending file change, rendered as a unified diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub pair_name: String,
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Render what `sync` would write for one pair and compare it to the current
/// on-disk content.
///
/// Returns `None` when the file is already in sync. A missing source file
/// diffs against empty content; a missing README is an error. No files are
/// written.
pub fn diff_pair(pair: &SyncPair, base: &Path) -> Result<Option<FileDiff>, SyncError> {
    let readme_path = pair.readme_at(base);
    let readme = std::fs::read_to_string(&readme_path).map_err(|e| io_err(&readme_path, e))?;

    let source_path = pair.source_at(base);
    let existing = read_existing_or_empty(&source_path)?;

    let (_, body) = split_body(&existing);
    let rendered = compose(&render_header(&readme), body);
    if existing == rendered {
        return Ok(None);
    }

    let old_header = format!("a/{}", pair.source.display());
    let new_header = format!("b/{}", pair.source.display());
    let unified = TextDiff::from_lines(&existing, &rendered)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();

    Ok(Some(FileDiff {
        pair_name: pair.name.0.clone(),
        path: source_path,
        unified_diff: unified,
    }))
}

/// Diff every configured pair, in list order. Pairs already in sync are
/// omitted from the result.
pub fn diff_all(pairs: &[SyncPair], base: &Path) -> Result<Vec<FileDiff>, SyncError> {
    let mut diffs = Vec::new();
    for pair in pairs {
        if let Some(diff) = diff_pair(pair, base)? {
            diffs.push(diff);
        }
    }
    Ok(diffs)
}

fn read_existing_or_empty(path: &Path) -> Result<String, SyncError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(io_err(path, err)),
    }
}
