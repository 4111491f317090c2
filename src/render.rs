use crate::lcs::EditOp;

/// Gutter markers for on-screen review of an edit script.
///
/// Added lines get a `+ ` prefix, removed lines a `- ` prefix, and kept
/// lines a two-column blank gutter so all content stays aligned.
pub trait Annotate {
    fn annotate(&self) -> String;
}

impl<T: ToString> Annotate for EditOp<T> {
    fn annotate(&self) -> String {
        match self {
            EditOp::Kept(el) => format!("  {}", el.to_string()),
            EditOp::Added(el) => format!("+ {}", el.to_string()),
            EditOp::Removed(el) => format!("- {}", el.to_string()),
        }
    }
}

impl<T: ToString> Annotate for [EditOp<T>] {
    fn annotate(&self) -> String {
        self.iter()
            .map(Annotate::annotate)
            .collect::<Vec<String>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcs::diff;

    #[test]
    fn test_annotate_single_ops() {
        assert_eq!(EditOp::Kept("same").annotate(), "  same");
        assert_eq!(EditOp::Added("new").annotate(), "+ new");
        assert_eq!(EditOp::Removed("gone").annotate(), "- gone");
    }

    #[test]
    fn test_annotate_script() {
        let result = diff(&["a", "b", "c"], &["a", "x", "c"]);
        assert_eq!(result.annotate(), "  a\n- b\n+ x\n  c");
    }

    #[test]
    fn test_annotate_empty_script() {
        let result = diff::<&str>(&[], &[]);
        assert_eq!(result.annotate(), "");
    }

    #[test]
    fn test_annotate_preserves_empty_lines() {
        assert_eq!(EditOp::Kept("").annotate(), "  ");
    }
}
