use thiserror::Error;

/// Errors returned by the size-checked entry points. The unchecked
/// operations never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The LCS table for the inputs would exceed the configured size limit
    #[error(
        "Input too large: diffing {old_lines} against {new_lines} lines needs {cells} table \
         cells, but the limit is {limit}"
    )]
    InputTooLarge {
        /// Number of lines in the old text
        old_lines: usize,
        /// Number of lines in the new text
        new_lines: usize,
        /// Number of cells the table would need
        cells: usize,
        /// The configured maximum
        limit: usize,
    },
}
