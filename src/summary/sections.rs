use std::collections::HashSet;

use crate::utils::markdown_patterns::heading_text;

/// Section titles present in only one of the two texts, in document order and
/// without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionChanges<'a> {
    pub added: Vec<&'a str>,
    pub removed: Vec<&'a str>,
}

impl<'a> SectionChanges<'a> {
    #[must_use]
    pub fn between(old: &'a str, new: &'a str) -> Self {
        let old_titles = section_titles(old);
        let new_titles = section_titles(new);

        SectionChanges {
            added: only_in(&new_titles, &old_titles),
            removed: only_in(&old_titles, &new_titles),
        }
    }

    /// Phrases such as `Added section "Setup"`, additions first.
    #[must_use]
    pub fn phrases(&self) -> Vec<String> {
        [("Added", &self.added), ("Removed", &self.removed)]
            .into_iter()
            .filter_map(|(verb, titles)| phrase(verb, titles))
            .collect()
    }
}

fn section_titles(text: &str) -> Vec<&str> { text.split('\n').filter_map(heading_text).collect() }

fn only_in<'a>(titles: &[&'a str], other: &[&'a str]) -> Vec<&'a str> {
    let other = other.iter().copied().collect::<HashSet<_>>();
    let mut seen = HashSet::new();

    titles
        .iter()
        .copied()
        .filter(|title| !other.contains(title) && seen.insert(*title))
        .collect()
}

fn phrase(verb: &str, titles: &[&str]) -> Option<String> {
    match titles {
        [] => None,
        [title] => Some(format!("{verb} section \"{title}\"")),
        [_, _] | [_, _, _] => Some(format!(
            "{verb} sections {}",
            titles
                .iter()
                .map(|title| format!("\"{title}\""))
                .collect::<Vec<_>>()
                .join(", ")
        )),
        _ => Some(format!("{verb} {} sections", titles.len())),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_renamed_section() {
        let changes = SectionChanges::between("# Intro\ntext", "# Setup\ntext");

        assert_eq!(changes.added, vec!["Setup"]);
        assert_eq!(changes.removed, vec!["Intro"]);
        assert_eq!(
            changes.phrases(),
            vec![
                "Added section \"Setup\"".to_owned(),
                "Removed section \"Intro\"".to_owned()
            ]
        );
    }

    #[test]
    fn test_heading_level_is_ignored() {
        let changes = SectionChanges::between("# Usage", "### Usage");

        assert_eq!(changes, SectionChanges::default());
        assert_eq!(changes.phrases(), Vec::<String>::new());
    }

    #[test]
    fn test_listing_and_counting() {
        let changes = SectionChanges::between(
            "# A\n# B\n# C\n# D\n# E",
            "# A\n# F\n# G\n# G\n# B\n# C\n# D\n# E\n# H\n# I",
        );

        // "G" is reported once even though it appears twice.
        assert_eq!(changes.added, vec!["F", "G", "H", "I"]);
        assert_eq!(changes.phrases(), vec!["Added 4 sections".to_owned()]);

        let changes = SectionChanges::between("# A\n# B\n# C\n# D", "# A");
        assert_eq!(
            changes.phrases(),
            vec!["Removed sections \"B\", \"C\", \"D\"".to_owned()]
        );
    }
}
