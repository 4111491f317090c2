pub mod types;
pub use types::*;

use std::cmp::max;

/// LCS length table, kept in a single contiguous row-major buffer.
struct Table {
    data: Vec<usize>,
    cols: usize,
}

impl Table {
    fn new(rows: usize, cols: usize) -> Self {
        Table {
            data: vec![0; rows * cols],
            cols,
        }
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.data[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, val: usize) {
        self.data[i * self.cols + j] = val;
    }
}

/// Computes the diff between two texts after breaking them into lines
/// and running `diff`.
///
/// Splitting is on `'\n'` alone, so an empty text diffs as one empty
/// line rather than as no lines at all, and a trailing newline
/// contributes a final empty line.
pub fn diff_lines(original: &str, updated: &str) -> DiffResult<String> {
    let old_lines: Vec<String> = original.split('\n').map(ToString::to_string).collect();
    let new_lines: Vec<String> = updated.split('\n').map(ToString::to_string).collect();
    diff(&old_lines, &new_lines)
}

/// Computes the diff between two sequences as a longest-common-subsequence
/// alignment.
///
/// The result is maximal: the number of [`EditOp::Kept`] entries equals the
/// length of a longest common subsequence of the inputs, under exact
/// equality. Where several maximal alignments exist, ties resolve toward
/// [`EditOp::Added`], so replaced content reads as new lines arriving rather
/// than old lines surviving. The choice is deterministic; identical inputs
/// always produce identical scripts.
///
/// Runs in O(n·m) time and space. There is no failure mode: any two
/// sequences, including empty ones, are valid input.
///
/// # Examples
///
/// ```
/// use linediff::{diff, EditOp};
///
/// let original = vec!["a", "b", "c"];
/// let updated = vec!["a", "x", "c"];
/// let result = diff(&original, &updated);
/// assert_eq!(result, vec![
///     EditOp::Kept("a"),
///     EditOp::Removed("b"),
///     EditOp::Added("x"),
///     EditOp::Kept("c"),
/// ]);
/// ```
pub fn diff<T: Eq + Clone>(original: &[T], updated: &[T]) -> DiffResult<T> {
    if original.is_empty() {
        return updated.iter().map(|e| EditOp::Added(e.clone())).collect();
    }
    if updated.is_empty() {
        return original.iter().map(|e| EditOp::Removed(e.clone())).collect();
    }

    let n = original.len();
    let m = updated.len();
    let mut table = Table::new(n + 1, m + 1);
    for i in 1..=n {
        for j in 1..=m {
            let len = if original[i - 1] == updated[j - 1] {
                table.get(i - 1, j - 1) + 1
            } else {
                max(table.get(i - 1, j), table.get(i, j - 1))
            };
            table.set(i, j, len);
        }
    }

    walk_back(original, updated, &table)
}

/// Rebuilds the edit script by walking the table backward from the
/// bottom-right corner. On a tie between the two non-matching moves the
/// walk takes the Added direction; this pins down which of several
/// equally long alignments is produced.
fn walk_back<T: Eq + Clone>(original: &[T], updated: &[T], table: &Table) -> DiffResult<T> {
    let mut ops: DiffResult<T> = Vec::new();
    let mut i = original.len();
    let mut j = updated.len();
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && original[i - 1] == updated[j - 1] {
            ops.push(EditOp::Kept(original[i - 1].clone()));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            ops.push(EditOp::Added(updated[j - 1].clone()));
            j -= 1;
        } else {
            ops.push(EditOp::Removed(original[i - 1].clone()));
            i -= 1;
        }
    }

    ops.reverse();
    ops
}

/// Rebuilds the original sequence from an edit script: the kept and
/// removed payloads, in order.
pub fn reconstruct_original<T: Clone>(ops: &[EditOp<T>]) -> Vec<T> {
    ops.iter()
        .filter_map(|op| match op {
            EditOp::Kept(el) | EditOp::Removed(el) => Some(el.clone()),
            EditOp::Added(_) => None,
        })
        .collect()
}

/// Rebuilds the updated sequence from an edit script: the kept and
/// added payloads, in order.
pub fn reconstruct_updated<T: Clone>(ops: &[EditOp<T>]) -> Vec<T> {
    ops.iter()
        .filter_map(|op| match op {
            EditOp::Kept(el) | EditOp::Added(el) => Some(el.clone()),
            EditOp::Removed(_) => None,
        })
        .collect()
}
