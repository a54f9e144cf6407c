pub mod line_tokenizer;

pub use line_tokenizer::{line_count, line_tokenizer};
