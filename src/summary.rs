mod revision_stats;
mod sections;

use std::collections::HashSet;

pub use revision_stats::{RevisionStats, StatsDelta, count_words};
use sections::SectionChanges;

use crate::{tokenizer::line_tokenizer, utils::pluralize::pluralize};

/// Absolute change in word count above which content edits are worth
/// mentioning by size.
const CONTENT_WORDS_THRESHOLD: u64 = 50;

/// Absolute change in word count above which an abstract counts as revised
/// rather than touched up.
const ABSTRACT_WORDS_THRESHOLD: usize = 10;

/// At most this many phrases make it into a summary.
const MAX_PHRASES: usize = 3;

/// The parts of a stored revision that summaries compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Revision<'a> {
    pub content: Option<&'a str>,
    pub title: Option<&'a str>,
    pub abstract_text: Option<&'a str>,
}

impl<'a> Revision<'a> {
    #[must_use]
    pub fn new(content: &'a str) -> Self {
        Revision {
            content: Some(content),
            ..Revision::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_abstract(mut self, abstract_text: &'a str) -> Self {
        self.abstract_text = Some(abstract_text);
        self
    }
}

/// Describes in a few words how the content changed between two revisions.
///
/// ```
/// use revision_diff::summarize;
///
/// assert_eq!(summarize(None, Some("hello world")), "Initial version");
/// assert_eq!(summarize(Some("same"), Some("same")), "No changes");
/// ```
#[must_use]
pub fn summarize(old: Option<&str>, new: Option<&str>) -> String {
    summarize_revisions(
        &Revision {
            content: old,
            ..Revision::default()
        },
        &Revision {
            content: new,
            ..Revision::default()
        },
    )
}

/// Describes in a few words what changed between two revisions, looking at
/// the title, the abstract and the structure of the content.
///
/// Never fails and never returns an empty string.
#[must_use]
pub fn summarize_revisions(old: &Revision<'_>, new: &Revision<'_>) -> String {
    match (old.content, new.content) {
        (None, Some(_)) => return "Initial version".to_owned(),
        (Some(_), None) => return "Content removed".to_owned(),
        _ if old == new => return "No changes".to_owned(),
        _ => {}
    }

    let mut phrases = Vec::new();

    if old.title != new.title {
        phrases.push("Updated title".to_owned());
    }

    if old.abstract_text != new.abstract_text {
        let words_changed = count_words(old.abstract_text.unwrap_or_default())
            .abs_diff(count_words(new.abstract_text.unwrap_or_default()));
        phrases.push(if words_changed > ABSTRACT_WORDS_THRESHOLD {
            "Revised abstract".to_owned()
        } else {
            "Minor abstract edits".to_owned()
        });
    }

    if old.content != new.content {
        let old_content = old.content.unwrap_or_default();
        let new_content = new.content.unwrap_or_default();

        let mut content_phrases = structural_phrases(old_content, new_content);
        content_phrases.extend(SectionChanges::between(old_content, new_content).phrases());
        if content_phrases.is_empty() {
            content_phrases.push(line_set_phrase(old_content, new_content).to_owned());
        }
        phrases.extend(content_phrases);
    }

    combine(&phrases)
}

fn structural_phrases(old: &str, new: &str) -> Vec<String> {
    let delta = RevisionStats::from_text(old).delta(&RevisionStats::from_text(new));
    let mut phrases = Vec::new();

    if delta.word_count.unsigned_abs() > CONTENT_WORDS_THRESHOLD {
        let verb = added_or_removed(delta.word_count);
        phrases.push(format!("{verb} ~{} words", delta.word_count.unsigned_abs()));
    }

    for (change, noun) in [
        (delta.heading_count, "heading"),
        (delta.code_block_count, "code block"),
        (delta.image_count, "image"),
    ] {
        if change != 0 {
            let count = usize::try_from(change.unsigned_abs()).unwrap_or(usize::MAX);
            phrases.push(format!("{} {}", added_or_removed(change), pluralize(count, noun)));
        }
    }

    phrases
}

fn added_or_removed(change: i64) -> &'static str { if change > 0 { "Added" } else { "Removed" } }

/// Coarse comparison of which lines exist in only one of the texts. Moving a
/// line is invisible to it, while changing how often a line repeats is not
/// counted at all.
fn line_set_phrase(old: &str, new: &str) -> &'static str {
    let old_lines = line_tokenizer(old);
    let new_lines = line_tokenizer(new);
    let old_set = old_lines.iter().copied().collect::<HashSet<_>>();
    let new_set = new_lines.iter().copied().collect::<HashSet<_>>();

    let additions = new_lines.iter().filter(|line| !old_set.contains(*line)).count();
    let deletions = old_lines.iter().filter(|line| !new_set.contains(*line)).count();

    if additions > deletions * 2 {
        "Expanded content"
    } else if deletions > additions * 2 {
        "Condensed content"
    } else {
        "Revised content"
    }
}

fn combine(phrases: &[String]) -> String {
    match phrases {
        [] => "Minor edits".to_owned(),
        [phrase] => phrase.clone(),
        [first, second] => format!("{first} and {second}"),
        _ => phrases[..MAX_PHRASES].join(", "),
    }
}
