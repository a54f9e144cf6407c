//! Line-level diffing and selective merging of document revisions.
//!
//! [`diff`] computes an LCS edit script between two texts, [`group_changes`]
//! splits it into reviewable change groups, [`merge`] applies a chosen subset
//! of those groups and [`summarize_revisions`] describes the change in a few
//! words. Everything is pure and synchronous.

mod diffs;
mod errors;
mod grouping;
mod merge;
mod options;
mod side_by_side;
mod summary;
mod tokenizer;
mod types;
mod utils;

pub use diffs::{diff, try_diff};
pub use errors::DiffError;
pub use grouping::{GroupIndex, group_changes};
pub use merge::{merge, merge_with_options, try_merge};
pub use options::{DEFAULT_CONTEXT_WINDOW, DiffOptions};
pub use side_by_side::side_by_side;
pub use summary::{Revision, RevisionStats, StatsDelta, summarize, summarize_revisions};
pub use tokenizer::{line_count, line_tokenizer};
pub use types::{ChangeGroup, ChangeKind, DiffLine, DiffResult, LineKind, SideBySide};

#[cfg(feature = "wasm")]
pub mod wasm;
