use crate::types::{DiffLine, DiffResult, LineKind, SideBySide};

/// Lays an edit script out as two aligned columns: the old text on the left
/// and the new text on the right.
///
/// Unchanged lines appear in both columns. A removed line is shown on the left
/// opposite a blank placeholder, an added line on the right opposite one.
#[must_use]
pub fn side_by_side<'a>(diff: &DiffResult<'a>) -> SideBySide<'a> {
    let mut result = SideBySide {
        left: Vec::with_capacity(diff.len()),
        right: Vec::with_capacity(diff.len()),
    };

    for line in &diff.lines {
        let (left, right) = match line.kind {
            LineKind::Unchanged => (*line, *line),
            LineKind::Removed => (*line, DiffLine::placeholder()),
            LineKind::Added => (DiffLine::placeholder(), *line),
        };
        result.left.push(left);
        result.right.push(right);
    }

    debug_assert_eq!(result.left.len(), result.right.len());
    result
}
