//! Static sync-pair configuration.
//!
//! The pair list is compiled in, constructed once at process start, and passed
//! explicitly into the synchronizer. There are no config files and no
//! environment variables; deployments that manage a different set of crates
//! edit [`builtin_pairs`] and rebuild.

use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::types::SyncPair;

/// The configured pair list, in processing order.
///
/// Each entry names a library crate in this workspace that keeps its
/// `src/lib.rs` doc header mirrored from its `README.md`.
pub fn builtin_pairs() -> Vec<SyncPair> {
    vec![
        SyncPair::new(
            "docsync-core",
            "docsync-core/README.md",
            "docsync-core/src/lib.rs",
        ),
        SyncPair::new(
            "docsync-sync",
            "docsync-sync/README.md",
            "docsync-sync/src/lib.rs",
        ),
    ]
}

/// Resolve the base directory relative pair paths are joined against.
///
/// An explicit directory wins; otherwise the process working directory is
/// used.
pub fn resolve_base(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(dir) => Ok(dir),
        None => env::current_dir().map_err(|_| ConfigError::BaseDirUnavailable),
    }
}

/// Find a configured pair by name.
pub fn find_pair<'a>(pairs: &'a [SyncPair], name: &str) -> Result<&'a SyncPair, ConfigError> {
    pairs
        .iter()
        .find(|pair| pair.name.0 == name)
        .ok_or_else(|| ConfigError::UnknownPair {
            name: name.to_owned(),
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_list_is_ordered_and_nonempty() {
        let pairs = builtin_pairs();
        assert!(!pairs.is_empty());
        assert_eq!(pairs[0].name.0, "docsync-core");
        for pair in &pairs {
            assert!(pair.readme.ends_with("README.md"));
            assert!(pair.source.ends_with("src/lib.rs"));
        }
    }

    #[test]
    fn explicit_base_wins() {
        let base = resolve_base(Some(PathBuf::from("/somewhere"))).expect("base");
        assert_eq!(base, PathBuf::from("/somewhere"));
    }

    #[test]
    fn default_base_is_current_dir() {
        let base = resolve_base(None).expect("base");
        assert_eq!(base, env::current_dir().expect("cwd"));
    }

    #[test]
    fn find_pair_by_name() {
        let pairs = builtin_pairs();
        let pair = find_pair(&pairs, "docsync-sync").expect("pair");
        assert_eq!(pair.source, PathBuf::from("docsync-sync/src/lib.rs"));
    }

    #[test]
    fn find_pair_unknown_name_errors() {
        let pairs = builtin_pairs();
        let err = find_pair(&pairs, "nope").expect_err("unknown pair");
        assert!(matches!(err, ConfigError::UnknownPair { name } if name == "nope"));
    }
}
