/// Formats `count` followed by `noun`, adding an `s` unless `count` is one.
///
/// ```not_rust
/// (1, "heading")    -> "1 heading"
/// (2, "code block") -> "2 code blocks"
/// ```
#[must_use]
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
