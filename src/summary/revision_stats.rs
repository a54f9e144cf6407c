#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    tokenizer::line_count,
    utils::markdown_patterns::{CODE_BLOCK, HEADING, IMAGE, LINK, PARAGRAPH_BREAK, WORD},
};

/// Structural counts of one revision of a markdown document.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevisionStats {
    pub word_count: usize,
    pub line_count: usize,
    pub paragraph_count: usize,
    pub heading_count: usize,
    pub code_block_count: usize,
    /// Links that are not images.
    pub link_count: usize,
    pub image_count: usize,
}

/// Signed change of every [`RevisionStats`] field, newer minus older.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsDelta {
    pub word_count: i64,
    pub line_count: i64,
    pub paragraph_count: i64,
    pub heading_count: i64,
    pub code_block_count: i64,
    pub link_count: i64,
    pub image_count: i64,
}

impl RevisionStats {
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let image_count = IMAGE.find_iter(text).count();

        RevisionStats {
            word_count: count_words(text),
            line_count: line_count(text),
            paragraph_count: PARAGRAPH_BREAK
                .split(text)
                .filter(|paragraph| !paragraph.trim().is_empty())
                .count(),
            heading_count: text.split('\n').filter(|line| HEADING.is_match(line)).count(),
            code_block_count: CODE_BLOCK.find_iter(text).count(),
            link_count: LINK.find_iter(text).count().saturating_sub(image_count),
            image_count,
        }
    }

    /// How each count changed going from `self` to `newer`.
    #[must_use]
    pub fn delta(&self, newer: &RevisionStats) -> StatsDelta {
        StatsDelta {
            word_count: signed_difference(self.word_count, newer.word_count),
            line_count: signed_difference(self.line_count, newer.line_count),
            paragraph_count: signed_difference(self.paragraph_count, newer.paragraph_count),
            heading_count: signed_difference(self.heading_count, newer.heading_count),
            code_block_count: signed_difference(self.code_block_count, newer.code_block_count),
            link_count: signed_difference(self.link_count, newer.link_count),
            image_count: signed_difference(self.image_count, newer.image_count),
        }
    }
}

#[must_use]
pub fn count_words(text: &str) -> usize { WORD.find_iter(text).count() }

fn signed_difference(older: usize, newer: usize) -> i64 {
    i64::try_from(newer).unwrap_or(i64::MAX) - i64::try_from(older).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const DOCUMENT: &str = "# Release notes\n\nThis release adds [search](https://example.com/search) \
                            and a ![diagram](arch.png).\n\n## Upgrading\n\n```sh\ncargo \
                            update\n```\n\nThat's it.";

    #[test]
    fn test_from_text() {
        assert_eq!(
            RevisionStats::from_text(DOCUMENT),
            RevisionStats {
                word_count: 22,
                line_count: 11,
                paragraph_count: 5,
                heading_count: 2,
                code_block_count: 1,
                link_count: 1,
                image_count: 1,
            }
        );
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(
            RevisionStats::from_text(""),
            RevisionStats {
                line_count: 1,
                ..RevisionStats::default()
            }
        );
    }

    #[test]
    fn test_count_words_splits_on_non_ascii_letters() {
        assert_eq!(count_words("naïve café"), 3);
        assert_eq!(count_words("plain cafe"), 2);
    }

    #[test]
    fn test_hashtag_is_not_a_heading() {
        assert_eq!(RevisionStats::from_text("#rust is fun").heading_count, 0);
    }

    #[test]
    fn test_delta() {
        let older = RevisionStats::from_text("# A\n\none two three");
        let newer = RevisionStats::from_text("one two\n\n![](y.png)");

        assert_eq!(
            older.delta(&newer),
            StatsDelta {
                word_count: 0,
                line_count: 0,
                paragraph_count: 0,
                heading_count: -1,
                code_block_count: 0,
                link_count: 0,
                image_count: 1,
            }
        );
    }
}
