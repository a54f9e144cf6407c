pub mod markdown_patterns;
pub mod pluralize;
