#[cfg(feature = "serde")]
use serde::Serialize;

/// What happened to a line between the old and the new text.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Unchanged,
    Added,
    Removed,
}

/// A single entry of an edit script.
///
/// `Unchanged` lines carry both line numbers, `Added` lines only the new one
/// and `Removed` lines only the old one. Line numbers are 1-based. Blank
/// padding rows produced by the side-by-side projection are `Unchanged` with
/// neither number set.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffLine<'a> {
    pub kind: LineKind,
    pub content: &'a str,
    pub old_line_number: Option<usize>,
    pub new_line_number: Option<usize>,
}

impl<'a> DiffLine<'a> {
    #[must_use]
    pub fn unchanged(content: &'a str, old_line_number: usize, new_line_number: usize) -> Self {
        DiffLine {
            kind: LineKind::Unchanged,
            content,
            old_line_number: Some(old_line_number),
            new_line_number: Some(new_line_number),
        }
    }

    #[must_use]
    pub fn added(content: &'a str, new_line_number: usize) -> Self {
        DiffLine {
            kind: LineKind::Added,
            content,
            old_line_number: None,
            new_line_number: Some(new_line_number),
        }
    }

    #[must_use]
    pub fn removed(content: &'a str, old_line_number: usize) -> Self {
        DiffLine {
            kind: LineKind::Removed,
            content,
            old_line_number: Some(old_line_number),
            new_line_number: None,
        }
    }

    /// Empty filler row shown opposite an insertion or a deletion.
    #[must_use]
    pub fn placeholder() -> Self {
        DiffLine {
            kind: LineKind::Unchanged,
            content: "",
            old_line_number: None,
            new_line_number: None,
        }
    }

    #[must_use]
    pub fn is_unchanged(&self) -> bool { self.kind == LineKind::Unchanged }

    #[must_use]
    pub fn is_change(&self) -> bool { !self.is_unchanged() }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.is_unchanged() && self.old_line_number.is_none() && self.new_line_number.is_none()
    }

    /// The line's position in the old text, falling back to the new text.
    #[must_use]
    pub fn old_or_new_line_number(&self) -> Option<usize> {
        self.old_line_number.or(self.new_line_number)
    }

    /// The line's position in the new text, falling back to the old text.
    #[must_use]
    pub fn new_or_old_line_number(&self) -> Option<usize> {
        self.new_line_number.or(self.old_line_number)
    }

    /// Unified-diff style prefix: `+`, `-` or a space.
    #[must_use]
    pub fn prefix(&self) -> char {
        match self.kind {
            LineKind::Unchanged => ' ',
            LineKind::Added => '+',
            LineKind::Removed => '-',
        }
    }
}

impl std::fmt::Display for DiffLine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.prefix(), self.content)
    }
}
