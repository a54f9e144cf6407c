use crate::{
    types::{DiffLine, LineKind},
    utils::markdown_patterns::heading_text,
};

/// For every position of an edit script, the text of the closest heading at or
/// before it that exists in the old text (an unchanged or removed line).
///
/// Built in one forward pass so that titling many groups stays linear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingIndex<'a> {
    nearest: Vec<Option<&'a str>>,
}

impl<'a> HeadingIndex<'a> {
    #[must_use]
    pub fn new(lines: &[DiffLine<'a>]) -> Self {
        let mut current = None;
        let nearest = lines
            .iter()
            .map(|line| {
                if line.kind != LineKind::Added {
                    if let Some(text) = heading_text(line.content) {
                        current = Some(text);
                    }
                }
                current
            })
            .collect();

        HeadingIndex { nearest }
    }

    #[must_use]
    pub fn heading_at_or_before(&self, position: usize) -> Option<&'a str> {
        self.nearest.get(position).copied().flatten()
    }
}
