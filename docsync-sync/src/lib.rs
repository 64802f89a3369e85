//! # docsync-sync
//!
//! Atomic writer and sync orchestration for docsync.
//!
//! `sync_pair` replaces one source file's doc header with its rendered README,
//! writing through a temporary sibling file so the destination is never observed
//! half-written. `sync_all` processes the whole configured list in order and
//! fails fast on the first unreadable file. The `diff` and `freshness` modules
//! back the read-only `docsync diff` and `docsync status` commands.

pub mod diff;
pub mod error;
pub mod freshness;
pub mod pipeline;
pub mod writer;

pub use diff::{diff_all, diff_pair, FileDiff};
pub use error::SyncError;
pub use freshness::PairState;
pub use writer::{sync_all, sync_pair, SyncPairResult, WriteResult};
