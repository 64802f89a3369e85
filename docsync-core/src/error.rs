//! Error types for docsync-core.

use thiserror::Error;

/// All errors that can arise from pair configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `std::env::current_dir()` returned an error — relative pair paths
    /// cannot be resolved.
    #[error("cannot determine base directory; pass --base or fix the working directory")]
    BaseDirUnavailable,

    /// A pair name was requested that is not in the configured list.
    #[error("no configured pair named '{name}'")]
    UnknownPair { name: String },
}
