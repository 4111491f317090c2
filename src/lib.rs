//! Line-level diff engine for reviewing edits to short text documents.
//!
//! [`diff`] aligns two sequences on their longest common subsequence and
//! emits a flat edit script of kept, added, and removed lines;
//! [`diff_lines`] does the same for raw text. The [`render`] module
//! carries the marker convention review UIs use to display a script.

pub mod lcs;
pub mod render;

pub use lcs::{
    diff, diff_lines, reconstruct_original, reconstruct_updated, DiffResult, DiffStats, EditOp,
};
pub use render::Annotate;
