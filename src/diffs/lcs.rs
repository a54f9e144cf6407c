//! LCS diff algorithm.
//!
//! * time: `O(MN)`
//! * space `O(MN)`
//!
//! Unlike Myers' algorithm this always walks the full dynamic programming
//! table, which makes the choice between equally short edit scripts fully
//! determined by the tie-break in [`diff`].

use crate::types::{DiffLine, DiffResult};

/// Computes the edit script between two line sequences.
///
/// The script is rebuilt walking backwards from the end of both sequences.
/// When skipping a line of `new` is as good as skipping a line of `old`, the
/// new line is emitted as added first, so in forward order removals precede
/// the additions that replace them.
#[must_use]
pub fn diff<'a>(old: &[&'a str], new: &[&'a str]) -> DiffResult<'a> {
    let table = LcsTable::new(old, new);

    let mut result = DiffResult::default();
    let mut lines = Vec::with_capacity(old.len() + new.len() - table.lcs_len());
    let mut i = old.len();
    let mut j = new.len();

    while i > 0 || j > 0 {
        let line = if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
            i -= 1;
            j -= 1;
            DiffLine::unchanged(old[i], i + 1, j + 1)
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            j -= 1;
            DiffLine::added(new[j], j + 1)
        } else {
            i -= 1;
            DiffLine::removed(old[i], i + 1)
        };

        result.count(line.kind);
        lines.push(line);
    }

    lines.reverse();
    result.lines = lines;
    result
}

/// `get(i, j)` is the length of the longest common subsequence of the first
/// `i` items of `old` and the first `j` items of `new`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LcsTable {
    width: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    fn new<T>(old: &[T], new: &[T]) -> Self
    where
        T: PartialEq,
    {
        let width = new.len() + 1;
        let mut cells = vec![0; (old.len() + 1) * width];

        for i in 1..=old.len() {
            for j in 1..=new.len() {
                cells[i * width + j] = if old[i - 1] == new[j - 1] {
                    cells[(i - 1) * width + j - 1] + 1
                } else {
                    cells[(i - 1) * width + j].max(cells[i * width + j - 1])
                };
            }
        }

        LcsTable { width, cells }
    }

    fn get(&self, i: usize, j: usize) -> usize { self.cells[i * self.width + j] }

    fn lcs_len(&self) -> usize { self.cells.last().copied().unwrap_or(0) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::LineKind;

    #[test]
    fn test_table() {
        let table = LcsTable::new(&[2, 3], &[0, 1, 2]);

        assert_eq!(
            table.cells,
            vec![
                0, 0, 0, 0, //
                0, 0, 0, 1, //
                0, 0, 0, 1, //
            ]
        );
        assert_eq!(table.lcs_len(), 1);
    }

    #[test]
    fn test_empty_examples() {
        assert_eq!(diff(&[], &[]), DiffResult::default());
        assert_eq!(
            diff(&["a"], &[]).lines,
            vec![DiffLine::removed("a", 1)]
        );
        assert_eq!(diff(&[], &["a"]).lines, vec![DiffLine::added("a", 1)]);
    }

    #[test]
    fn test_prefers_matching_latest_duplicate() {
        // Walking backwards, the last "a" of `new` is matched first.
        assert_eq!(
            diff(&["a"], &["a", "a"]).lines,
            vec![DiffLine::added("a", 1), DiffLine::unchanged("a", 1, 2)]
        );
    }

    #[test]
    fn test_tie_break_puts_removals_first() {
        let result = diff(&["a", "b"], &["c", "d"]);

        assert_eq!(
            result.lines,
            vec![
                DiffLine::removed("a", 1),
                DiffLine::removed("b", 2),
                DiffLine::added("c", 1),
                DiffLine::added("d", 2),
            ]
        );
    }

    #[test]
    fn test_script_is_minimal() {
        let old = ["x", "a", "b", "c", "y", "d"];
        let new = ["a", "c", "b", "d", "z"];
        let result = diff(&old, &new);

        // LCS is 3 ("a", "b", "d" or "a", "c", "d").
        assert_eq!(result.unchanged, 3);
        assert_eq!(result.deletions, old.len() - 3);
        assert_eq!(result.additions, new.len() - 3);
    }

    #[test]
    fn test_line_numbers_are_monotonic() {
        let old = ["1", "2", "3", "4", "5"];
        let new = ["0", "2", "4", "5", "6"];
        let result = diff(&old, &new);

        let olds = result
            .lines
            .iter()
            .filter_map(|line| line.old_line_number)
            .collect::<Vec<_>>();
        let news = result
            .lines
            .iter()
            .filter_map(|line| line.new_line_number)
            .collect::<Vec<_>>();

        assert_eq!(olds, vec![1, 2, 3, 4, 5]);
        assert_eq!(news, vec![1, 2, 3, 4, 5]);
        for line in &result.lines {
            match line.kind {
                LineKind::Unchanged => {
                    assert!(line.old_line_number.is_some() && line.new_line_number.is_some());
                }
                LineKind::Added => assert!(line.old_line_number.is_none()),
                LineKind::Removed => assert!(line.new_line_number.is_none()),
            }
        }
    }
}
