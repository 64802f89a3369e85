//! # docsync-core
//!
//! Domain types, the static pair list, and the pure header transformation shared
//! by the docsync workspace.
//!
//! A `SyncPair` maps a README file onto the source file whose leading `//!`
//! block mirrors it. `header::split_body` separates that block from the
//! untouched body and `header::render_header` rebuilds it from README lines.
//! The compiled-in pair list lives in `config::builtin_pairs`.

pub mod config;
pub mod error;
pub mod header;
pub mod types;

pub use error::ConfigError;
pub use types::{PairName, SyncPair, DOC_MARKER};
