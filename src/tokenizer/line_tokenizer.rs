/// Splits text into lines on `\n`. Line terminators are not part of the
/// returned lines and `\r` is left untouched.
///
/// Every input yields at least one line: the empty string is a single empty
/// line and a trailing `\n` produces a trailing empty line. Joining the result
/// with `\n` gives back the input.
///
/// ## Example
///
/// ```not_rust
/// "Hello\nWorld!" -> ["Hello", "World!"]
/// "Hello\n"       -> ["Hello", ""]
/// ""              -> [""]
/// ```
#[must_use]
pub fn line_tokenizer(text: &str) -> Vec<&str> { text.split('\n').collect() }

/// Number of lines `line_tokenizer` would return, without allocating.
#[must_use]
pub fn line_count(text: &str) -> usize { text.bytes().filter(|&b| b == b'\n').count() + 1 }
