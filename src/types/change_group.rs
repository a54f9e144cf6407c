use std::ops::Range;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::diff_line::{DiffLine, LineKind};

#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Addition,
    Deletion,
    Modification,
}

impl ChangeKind {
    /// The kind of a run that so far only contains lines of `kind`.
    ///
    /// Returns `None` for unchanged lines since they never start a run.
    #[must_use]
    pub fn from_line_kind(kind: LineKind) -> Option<Self> {
        match kind {
            LineKind::Added => Some(ChangeKind::Addition),
            LineKind::Removed => Some(ChangeKind::Deletion),
            LineKind::Unchanged => None,
        }
    }

    /// The kind of the run after extending it with a line of `kind`.
    #[must_use]
    pub fn extend(self, kind: LineKind) -> Self {
        match (self, kind) {
            (ChangeKind::Addition, LineKind::Removed) | (ChangeKind::Deletion, LineKind::Added) => {
                ChangeKind::Modification
            }
            (current, _) => current,
        }
    }
}

/// A maximal run of added and removed lines from one edit script, treated as
/// a single unit when reviewing or merging.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeGroup<'a> {
    /// Only meaningful within the grouping call that produced it.
    pub id: String,
    pub kind: ChangeKind,
    pub title: String,
    pub description: String,
    pub start_line: usize,
    pub end_line: usize,
    pub core_lines: Vec<DiffLine<'a>>,
    pub context_before: Vec<DiffLine<'a>>,
    pub context_after: Vec<DiffLine<'a>>,

    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) core_range: Range<usize>,
}

impl<'a> ChangeGroup<'a> {
    /// Positions of `core_lines` within the edit script the group was built
    /// from.
    #[must_use]
    pub fn core_range(&self) -> Range<usize> { self.core_range.clone() }

    #[must_use]
    pub fn added_count(&self) -> usize { self.count(LineKind::Added) }

    #[must_use]
    pub fn removed_count(&self) -> usize { self.count(LineKind::Removed) }

    /// Context before, core lines and context after, in display order.
    pub fn lines(&self) -> impl Iterator<Item = &DiffLine<'a>> {
        self.context_before
            .iter()
            .chain(&self.core_lines)
            .chain(&self.context_after)
    }

    fn count(&self, kind: LineKind) -> usize {
        self.core_lines
            .iter()
            .filter(|line| line.kind == kind)
            .count()
    }
}
