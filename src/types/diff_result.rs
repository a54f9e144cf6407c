#[cfg(feature = "serde")]
use serde::Serialize;

use super::diff_line::{DiffLine, LineKind};

/// Line-level edit script between two texts together with per-kind tallies.
///
/// `additions + deletions + unchanged == lines.len()` always holds.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiffResult<'a> {
    pub lines: Vec<DiffLine<'a>>,
    pub additions: usize,
    pub deletions: usize,
    pub unchanged: usize,
}

impl<'a> DiffResult<'a> {
    /// Builds a result from an ordered edit script, tallying the kinds.
    #[must_use]
    pub fn from_lines(lines: Vec<DiffLine<'a>>) -> Self {
        let mut result = DiffResult {
            lines: Vec::new(),
            additions: 0,
            deletions: 0,
            unchanged: 0,
        };
        for line in &lines {
            result.count(line.kind);
        }
        result.lines = lines;
        result
    }

    pub(crate) fn count(&mut self, kind: LineKind) {
        match kind {
            LineKind::Unchanged => self.unchanged += 1,
            LineKind::Added => self.additions += 1,
            LineKind::Removed => self.deletions += 1,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.lines.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    /// Whether both texts were line-for-line equal.
    #[must_use]
    pub fn is_identical(&self) -> bool { self.additions == 0 && self.deletions == 0 }

    /// Whether some added or removed line has non-whitespace content.
    #[must_use]
    pub fn has_meaningful_changes(&self) -> bool {
        self.lines
            .iter()
            .any(|line| line.is_change() && !line.content.trim().is_empty())
    }

    /// Rebuilds the old text from the unchanged and removed lines.
    #[must_use]
    pub fn old_text(&self) -> String { self.join(|line| line.kind != LineKind::Added) }

    /// Rebuilds the new text from the unchanged and added lines.
    #[must_use]
    pub fn new_text(&self) -> String { self.join(|line| line.kind != LineKind::Removed) }

    fn join(&self, keep: impl Fn(&DiffLine<'a>) -> bool) -> String {
        self.lines
            .iter()
            .filter(|line| keep(line))
            .map(|line| line.content)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for DiffResult<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
