//! Stateless markdown patterns shared by grouping and summaries. They are
//! compiled once on first use.

use std::sync::LazyLock;

use regex::Regex;

/// A markdown ATX heading on a single line, capturing its text.
pub static HEADING: LazyLock<Regex> = LazyLock::new(|| compile(r"^#+\s+(.+)$"));

/// A run of ASCII letters, digits or underscores. Accented letters split words.
pub static WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"(?-u:\b\w+\b)"));

/// One or more blank lines separating paragraphs.
pub static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| compile(r"\n\s*\n"));

/// A fenced code block, possibly spanning several lines.
pub static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| compile(r"(?s)```.*?```"));

/// `[text](url)`, which also matches the bracketed part of an image.
pub static LINK: LazyLock<Regex> = LazyLock::new(|| compile(r"\[[^\]]*\]\([^)]*\)"));

pub static IMAGE: LazyLock<Regex> = LazyLock::new(|| compile(r"!\[[^\]]*\]\([^)]*\)"));

fn compile(pattern: &str) -> Regex { Regex::new(pattern).expect("hard-coded pattern is valid") }

/// Returns the text of `line` if it is a markdown heading.
///
/// ```not_rust
/// "## Getting started" -> Some("Getting started")
/// "#hashtag"           -> None
/// ```
#[must_use]
pub fn heading_text(line: &str) -> Option<&str> {
    HEADING
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|heading| heading.as_str())
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("# Intro", Some("Intro"))]
    #[test_case("### Deeply nested heading", Some("Deeply nested heading"))]
    #[test_case("#\tTabbed", Some("Tabbed"))]
    #[test_case("#hashtag", None)]
    #[test_case("text # not a heading", None)]
    #[test_case("#", None)]
    #[test_case("", None)]
    fn test_heading_text(line: &str, expected: Option<&str>) {
        assert_eq!(heading_text(line), expected);
    }

    #[test]
    fn test_heading_text_borrows_from_line() {
        let line = String::from("## Getting started");
        let text = heading_text(&line);

        assert_eq!(text, Some("Getting started"));
        assert!(text.is_some_and(|text| line.contains(text)));
    }

    #[test_case("plain words here", 3)]
    #[test_case("snake_case and x2", 3)]
    #[test_case("naïve café", 3)]
    #[test_case("", 0)]
    fn test_word_pattern(text: &str, expected: usize) {
        assert_eq!(WORD.find_iter(text).count(), expected);
    }

    #[test]
    fn test_counting_patterns() {
        let text = "See [docs](https://example.com) and ![logo](logo.png).\n\n```rust\nfn \
                    main() {}\n```";

        assert_eq!(LINK.find_iter(text).count(), 2);
        assert_eq!(IMAGE.find_iter(text).count(), 1);
        assert_eq!(CODE_BLOCK.find_iter(text).count(), 1);
        assert_eq!(PARAGRAPH_BREAK.split(text).count(), 2);
    }
}
