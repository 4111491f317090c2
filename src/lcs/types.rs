/// Alias for a vector of EditOp
/// Result of the diff function
pub type DiffResult<T> = Vec<EditOp<T>>;

/// Each line of a rendered diff is either
/// carried over unchanged (Kept)
/// present only in the updated text (Added)
/// present only in the original text (Removed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EditOp<T> {
    Kept(T),
    Added(T),
    Removed(T),
}

impl<T> EditOp<T> {
    /// The line carried by this operation.
    pub fn value(&self) -> &T {
        match self {
            EditOp::Kept(el) | EditOp::Added(el) | EditOp::Removed(el) => el,
        }
    }

    pub fn is_kept(&self) -> bool {
        matches!(self, EditOp::Kept(_))
    }

    pub fn is_added(&self) -> bool {
        matches!(self, EditOp::Added(_))
    }

    pub fn is_removed(&self) -> bool {
        matches!(self, EditOp::Removed(_))
    }
}

/// Operation counts for a finished edit script.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiffStats {
    pub kept: usize,
    pub added: usize,
    pub removed: usize,
}

impl DiffStats {
    /// Tallies the operations of an edit script.
    pub fn of<T>(ops: &[EditOp<T>]) -> Self {
        let mut stats = DiffStats::default();
        for op in ops {
            match op {
                EditOp::Kept(_) => stats.kept += 1,
                EditOp::Added(_) => stats.added += 1,
                EditOp::Removed(_) => stats.removed += 1,
            }
        }
        stats
    }

    /// Number of lines that changed, i.e. everything except kept lines.
    pub fn edit_count(&self) -> usize {
        self.added + self.removed
    }

    pub fn is_unchanged(&self) -> bool {
        self.edit_count() == 0
    }
}
