#[cfg(feature = "serde")]
use serde::Serialize;

use super::diff_line::DiffLine;

/// Two column-aligned views of one edit script. Both columns always have the
/// same length; row `i` of `left` is displayed next to row `i` of `right`.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SideBySide<'a> {
    pub left: Vec<DiffLine<'a>>,
    pub right: Vec<DiffLine<'a>>,
}

impl<'a> SideBySide<'a> {
    #[must_use]
    pub fn len(&self) -> usize { self.left.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.left.is_empty() }

    /// Iterates over `(left, right)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (&DiffLine<'a>, &DiffLine<'a>)> {
        self.left.iter().zip(self.right.iter())
    }
}
